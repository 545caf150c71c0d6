use logos_protocol::{ArticleForm, Case, FeatureFlags, Features, Gender, Number, WordEntry};

use crate::phonology::{attach, drop_chars, ends_with_any, is_sibilant_final, is_vowel, syllables};

type EndingTable = [[&'static str; 4]; 4];

// Rows: nominative, genitive, dative, accusative. Columns: M, F, N, plural.
const WEAK: EndingTable = [
    ["e", "e", "e", "en"],
    ["en", "en", "en", "en"],
    ["en", "en", "en", "en"],
    ["en", "e", "e", "en"],
];

const MIXED: EndingTable = [
    ["er", "e", "es", "en"],
    ["en", "en", "en", "en"],
    ["en", "en", "en", "en"],
    ["en", "e", "es", "en"],
];

const STRONG: EndingTable = [
    ["er", "e", "es", "e"],
    ["en", "er", "en", "er"],
    ["em", "er", "em", "en"],
    ["en", "e", "es", "e"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Degree {
    Positive,
    Comparative,
    Superlative,
}

impl Degree {
    fn of(features: &Features) -> Self {
        if features.has(FeatureFlags::SUPERLATIVE) {
            Degree::Superlative
        } else if features.has(FeatureFlags::COMPARATIVE) {
            Degree::Comparative
        } else {
            Degree::Positive
        }
    }
}

pub(crate) fn case_row(case: Case) -> usize {
    match case {
        Case::Nominative => 0,
        Case::Genitive => 1,
        Case::Dative => 2,
        Case::Accusative => 3,
    }
}

/// Column for gender, or the plural column.
pub(crate) fn gender_column(features: &Features) -> usize {
    if features.number_or_default() == Number::Plural {
        return 3;
    }
    match features.gender.unwrap_or(Gender::Masculine) {
        Gender::Masculine => 0,
        Gender::Feminine => 1,
        Gender::Neuter => 2,
    }
}

/// Stem changes before an inflectional ending: "dunkel" -> "dunkl",
/// "teuer" -> "teur", "hoch" -> "hoh".
fn attributive_stem(base: &str) -> String {
    if base == "hoch" {
        return "hoh".to_string();
    }
    if base.ends_with("el") && syllables(base) > 1 {
        return format!("{}l", drop_chars(base, 2));
    }
    let vowel_before_er = base.ends_with("er") && drop_chars(base, 2).chars().last().map_or(false, is_vowel);
    if vowel_before_er {
        return format!("{}r", drop_chars(base, 2));
    }
    base.to_string()
}

fn comparative_stem(base: &str, entry: Option<&WordEntry>) -> String {
    match entry.and_then(|e| e.comparative.clone()) {
        Some(form) => form,
        None => attach(&attributive_stem(base), "er"),
    }
}

fn superlative_stem(base: &str, entry: Option<&WordEntry>) -> String {
    if let Some(form) = entry.and_then(|e| e.superlative.as_deref()) {
        return form.strip_suffix('e').unwrap_or(form).to_string();
    }
    if is_sibilant_final(base) || ends_with_any(base, &["t", "d"]) {
        format!("{}est", base)
    } else {
        format!("{}st", base)
    }
}

pub fn inflect_adjective(base: &str, features: &Features, entry: Option<&WordEntry>) -> String {
    if features.has(FeatureFlags::NON_MORPH) {
        return base.to_string();
    }
    let degree = Degree::of(features);

    let Some(article_form) = features.article_form else {
        return match degree {
            Degree::Positive => base.to_string(),
            Degree::Comparative => comparative_stem(base, entry),
            Degree::Superlative => format!("am {}en", superlative_stem(base, entry)),
        };
    };

    let stem = match degree {
        Degree::Positive => attributive_stem(base),
        Degree::Comparative => comparative_stem(base, entry),
        Degree::Superlative => superlative_stem(base, entry),
    };
    let table = match article_form {
        ArticleForm::Definite => &WEAK,
        ArticleForm::Indefinite => &MIXED,
        ArticleForm::Bare => &STRONG,
    };
    let ending = table[case_row(features.case_or_default())][gender_column(features)];
    attach(&stem, ending)
}

/// Adverbs only inflect for degree.
pub fn inflect_adverb(base: &str, features: &Features, entry: Option<&WordEntry>) -> String {
    match Degree::of(features) {
        Degree::Positive => base.to_string(),
        Degree::Comparative => comparative_stem(base, entry),
        Degree::Superlative => format!("am {}en", superlative_stem(base, entry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_protocol::PartOfSpeech;

    fn attributive(article_form: ArticleForm, case: Case, gender: Gender, number: Number) -> Features {
        Features {
            article_form: Some(article_form),
            case: Some(case),
            gender: Some(gender),
            number: Some(number),
            ..Features::default()
        }
    }

    #[test]
    fn test_weak_endings() {
        let f = attributive(ArticleForm::Definite, Case::Nominative, Gender::Masculine, Number::Singular);
        assert_eq!(inflect_adjective("klein", &f, None), "kleine");
        let f = attributive(ArticleForm::Definite, Case::Accusative, Gender::Masculine, Number::Singular);
        assert_eq!(inflect_adjective("klein", &f, None), "kleinen");
        let f = attributive(ArticleForm::Definite, Case::Accusative, Gender::Neuter, Number::Singular);
        assert_eq!(inflect_adjective("klein", &f, None), "kleine");
    }

    #[test]
    fn test_mixed_and_strong_endings() {
        let f = attributive(ArticleForm::Indefinite, Case::Nominative, Gender::Neuter, Number::Singular);
        assert_eq!(inflect_adjective("klein", &f, None), "kleines");
        let f = attributive(ArticleForm::Bare, Case::Dative, Gender::Masculine, Number::Singular);
        assert_eq!(inflect_adjective("kalt", &f, None), "kaltem");
        let f = attributive(ArticleForm::Bare, Case::Genitive, Gender::Feminine, Number::Plural);
        assert_eq!(inflect_adjective("alt", &f, None), "alter");
    }

    #[test]
    fn test_stem_adjustments() {
        let f = attributive(ArticleForm::Definite, Case::Dative, Gender::Feminine, Number::Singular);
        assert_eq!(inflect_adjective("dunkel", &f, None), "dunklen");
        assert_eq!(inflect_adjective("teuer", &f, None), "teuren");
        assert_eq!(inflect_adjective("hoch", &f, None), "hohen");
        assert_eq!(inflect_adjective("leise", &f, None), "leisen");
    }

    #[test]
    fn test_predicative_degrees() {
        let mut f = Features::default();
        assert_eq!(inflect_adjective("schnell", &f, None), "schnell");
        f.set(FeatureFlags::COMPARATIVE, true);
        assert_eq!(inflect_adjective("schnell", &f, None), "schneller");
        let f = Features { flags: FeatureFlags::SUPERLATIVE, ..Features::default() };
        assert_eq!(inflect_adjective("schnell", &f, None), "am schnellsten");
        assert_eq!(inflect_adjective("kurz", &f, None), "am kurzesten");
    }

    #[test]
    fn test_comparative_of_e_final_stems() {
        let f = Features { flags: FeatureFlags::COMPARATIVE, ..Features::default() };
        assert_eq!(inflect_adjective("leise", &f, None), "leiser");
        assert_eq!(inflect_adjective("müde", &f, None), "müder");
        assert_eq!(inflect_adjective("dunkel", &f, None), "dunkler");
        assert_eq!(inflect_adjective("teuer", &f, None), "teurer");

        let mut f = attributive(ArticleForm::Definite, Case::Dative, Gender::Feminine, Number::Singular);
        f.set(FeatureFlags::COMPARATIVE, true);
        assert_eq!(inflect_adjective("leise", &f, None), "leiseren");
    }

    #[test]
    fn test_lexicon_comparison() {
        let entry = WordEntry::new("groß", PartOfSpeech::Adjective).with_comparison("größer", "größte");
        let mut f = attributive(ArticleForm::Definite, Case::Nominative, Gender::Masculine, Number::Singular);
        f.set(FeatureFlags::SUPERLATIVE, true);
        assert_eq!(inflect_adjective("groß", &f, Some(&entry)), "größte");
        let pred = Features { flags: FeatureFlags::SUPERLATIVE, ..Features::default() };
        assert_eq!(inflect_adjective("groß", &pred, Some(&entry)), "am größten");
    }

    #[test]
    fn test_adverb_degree_only() {
        let f = Features { flags: FeatureFlags::COMPARATIVE, case: Some(Case::Dative), ..Features::default() };
        assert_eq!(inflect_adverb("schnell", &f, None), "schneller");
        assert_eq!(inflect_adverb("schnell", &Features::default(), None), "schnell");
    }
}
