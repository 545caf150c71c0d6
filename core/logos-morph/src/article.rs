use logos_protocol::{FeatureFlags, Features, LexicalFlags, Number, WordEntry};

use crate::adjective::{case_row, gender_column};

/// Preposition + article contractions. These never inflect.
pub const MERGED_ARTICLES: &[&str] = &["im", "am", "beim", "zum", "zur", "vom", "ins", "ans", "aufs"];

const DEFINITE: [[&str; 4]; 4] = [
    ["der", "die", "das", "die"],
    ["des", "der", "des", "der"],
    ["dem", "der", "dem", "den"],
    ["den", "die", "das", "die"],
];

const DER_WORD_STEMS: &[&str] = &["dies", "jen", "jed", "welch", "solch", "manch"];

const DER_WORD_ENDINGS: [[&str; 4]; 4] = [
    ["er", "e", "es", "e"],
    ["es", "er", "es", "er"],
    ["em", "er", "em", "en"],
    ["en", "e", "es", "e"],
];

/// Longest first so "kein" is not read as "k" + "ein".
const EIN_WORD_STEMS: &[&str] = &["unser", "kein", "mein", "dein", "sein", "euer", "ihr", "ein"];

const EIN_WORD_ENDINGS: [[&str; 4]; 4] = [
    ["", "e", "", "e"],
    ["es", "er", "es", "er"],
    ["em", "er", "em", "en"],
    ["en", "e", "", "e"],
];

const INFLECTED_ENDINGS: &[&str] = &["", "e", "en", "em", "er", "es"];

pub fn is_merged_article(base: &str) -> bool {
    MERGED_ARTICLES.contains(&base.to_lowercase().as_str())
}

pub fn is_definite(base: &str) -> bool {
    matches!(base.to_lowercase().as_str(), "der" | "die" | "das" | "den" | "dem" | "des")
}

/// Splits an inflected or bare determiner into its stem ("dieser" -> "dies").
pub fn der_word_stem(base: &str) -> Option<&'static str> {
    let lower = base.to_lowercase();
    DER_WORD_STEMS
        .iter()
        .copied()
        .find(|stem| lower.strip_prefix(stem).map_or(false, |rest| INFLECTED_ENDINGS.contains(&rest)))
}

pub fn ein_word_stem(base: &str) -> Option<&'static str> {
    let lower = base.to_lowercase();
    // "eure", "euren": the stem loses its e before an ending.
    let lower = if lower.starts_with("eur") && lower.len() > 3 {
        format!("euer{}", &lower[3..])
    } else {
        lower
    };
    EIN_WORD_STEMS
        .iter()
        .copied()
        .find(|stem| lower.strip_prefix(stem).map_or(false, |rest| INFLECTED_ENDINGS.contains(&rest)))
}

pub fn inflect_article(base: &str, features: &Features, entry: Option<&WordEntry>) -> String {
    let merged = features.has(FeatureFlags::MERGED_ARTICLE)
        || entry.map_or(false, |e| e.has(LexicalFlags::MERGED_ARTICLE))
        || is_merged_article(base);
    if merged || features.has(FeatureFlags::NON_MORPH) {
        return base.to_string();
    }

    let row = case_row(features.case_or_default());
    let column = gender_column(features);

    if is_definite(base) {
        return DEFINITE[row][column].to_string();
    }
    if let Some(stem) = der_word_stem(base) {
        return format!("{}{}", stem, DER_WORD_ENDINGS[row][column]);
    }
    if let Some(stem) = ein_word_stem(base) {
        if stem == "ein" && features.number_or_default() == Number::Plural {
            return String::new();
        }
        let ending = EIN_WORD_ENDINGS[row][column];
        return match stem {
            "euer" if !ending.is_empty() => format!("eur{}", ending),
            _ => format!("{}{}", stem, ending),
        };
    }
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_protocol::{Case, Gender};

    fn features(case: Case, gender: Gender, number: Number) -> Features {
        Features { case: Some(case), gender: Some(gender), number: Some(number), ..Features::default() }
    }

    #[test]
    fn test_definite_table() {
        assert_eq!(inflect_article("der", &features(Case::Genitive, Gender::Masculine, Number::Singular), None), "des");
        assert_eq!(inflect_article("der", &features(Case::Accusative, Gender::Neuter, Number::Singular), None), "das");
        assert_eq!(inflect_article("die", &features(Case::Dative, Gender::Feminine, Number::Plural), None), "den");
        assert_eq!(inflect_article("das", &features(Case::Dative, Gender::Neuter, Number::Singular), None), "dem");
    }

    #[test]
    fn test_der_words() {
        let f = features(Case::Dative, Gender::Masculine, Number::Singular);
        assert_eq!(inflect_article("dieser", &f, None), "diesem");
        assert_eq!(inflect_article("jed", &features(Case::Nominative, Gender::Neuter, Number::Singular), None), "jedes");
        assert_eq!(der_word_stem("diese"), Some("dies"));
        assert_eq!(der_word_stem("die"), None);
    }

    #[test]
    fn test_ein_words() {
        assert_eq!(inflect_article("ein", &features(Case::Nominative, Gender::Masculine, Number::Singular), None), "ein");
        assert_eq!(inflect_article("ein", &features(Case::Accusative, Gender::Masculine, Number::Singular), None), "einen");
        assert_eq!(inflect_article("eine", &features(Case::Dative, Gender::Feminine, Number::Singular), None), "einer");
        assert_eq!(inflect_article("kein", &features(Case::Genitive, Gender::Neuter, Number::Singular), None), "keines");
        assert_eq!(inflect_article("ein", &features(Case::Nominative, Gender::Masculine, Number::Plural), None), "");
        assert_eq!(inflect_article("kein", &features(Case::Dative, Gender::Neuter, Number::Plural), None), "keinen");
    }

    #[test]
    fn test_euer_drops_e() {
        assert_eq!(inflect_article("euer", &features(Case::Nominative, Gender::Masculine, Number::Singular), None), "euer");
        assert_eq!(inflect_article("euer", &features(Case::Nominative, Gender::Feminine, Number::Singular), None), "eure");
        assert_eq!(inflect_article("eure", &features(Case::Dative, Gender::Masculine, Number::Singular), None), "eurem");
    }

    #[test]
    fn test_merged_articles_are_literal() {
        let f = features(Case::Accusative, Gender::Masculine, Number::Singular);
        assert_eq!(inflect_article("zum", &f, None), "zum");
        let flagged = Features { flags: FeatureFlags::MERGED_ARTICLE, ..f.clone() };
        assert_eq!(inflect_article("hinters", &flagged, None), "hinters");
    }
}
