use logos_protocol::{Case, FeatureFlags, Features, Gender, LexicalFlags, Number, WordEntry};
use tracing::trace;

use crate::phonology::{capitalize, ends_with_any, is_consonant, is_vowel, last_char, penultimate_char, syllables};

/// Nouns with these endings never inflect.
const INVARIANT_SUFFIXES: &[&str] = &["fonds"];

pub fn inflect_noun(base: &str, features: &Features, entry: Option<&WordEntry>) -> String {
    let invariant = entry.map_or(false, |e| e.has(LexicalFlags::INVARIANT))
        || ends_with_any(base, INVARIANT_SUFFIXES);
    if invariant {
        return capitalize(base);
    }

    let case = if features.has(FeatureFlags::POSSESSIVE) { Case::Genitive } else { features.case_or_default() };
    let gender = entry
        .and_then(|e| e.gender)
        .or(features.gender)
        .unwrap_or(Gender::Masculine);
    let plural_only = entry.map_or(false, |e| e.has(LexicalFlags::PLURAL_ONLY));

    let form = if features.number_or_default() == Number::Plural || plural_only {
        plural_case_form(base, case, gender, entry, plural_only)
    } else {
        singular_case_form(base, case, gender, entry)
    };
    capitalize(&form)
}

fn singular_case_form(base: &str, case: Case, gender: Gender, entry: Option<&WordEntry>) -> String {
    if let Some(form) = entry.and_then(|e| e.case_form(case, Number::Singular)) {
        return form.unwrap_or(base).to_string();
    }
    if case == Case::Nominative || gender == Gender::Feminine {
        return base.to_string();
    }

    if gender == Gender::Masculine && is_weak_masculine(base) {
        return if base.ends_with('e') { format!("{}n", base) } else { format!("{}en", base) };
    }

    if case != Case::Genitive {
        return base.to_string();
    }

    if entry.map_or(false, |e| e.has(LexicalFlags::PROPER)) {
        return if ends_with_any(base, &["s", "ß", "x", "z"]) { format!("{}'", base) } else { format!("{}s", base) };
    }
    genitive_singular(base)
}

fn is_weak_masculine(base: &str) -> bool {
    ends_with_any(base, &["e", "ent", "ant", "ist"])
}

fn genitive_singular(base: &str) -> String {
    if ends_with_any(base, &["nis"]) {
        return format!("{}ses", base);
    }
    if let Some(stem) = base.strip_suffix('ß') {
        return format!("{}sses", stem);
    }
    if ends_with_any(base, &["s", "x", "z", "sch"]) {
        return format!("{}es", base);
    }
    if ends_with_any(base, &["el", "er", "en", "chen", "lein", "em"]) {
        return format!("{}s", base);
    }
    // Monosyllables closing on a consonant cluster take "-es" ("Kindes").
    let cluster = matches!(
        (penultimate_char(base), last_char(base)),
        (Some(a), Some(b)) if is_consonant(a) && is_consonant(b)
    );
    if cluster && syllables(base) == 1 {
        format!("{}es", base)
    } else {
        format!("{}s", base)
    }
}

/// "-el"/"-er"/"-en" after a consonant ("Onkel", "Lehrer"), not "Spiel" or "Tier".
fn unstressed_ending(base: &str, suffixes: &[&str]) -> bool {
    ends_with_any(base, suffixes)
        && base.chars().rev().nth(2).map_or(false, is_consonant)
        && syllables(base) > 1
}

fn plural_case_form(base: &str, case: Case, gender: Gender, entry: Option<&WordEntry>, plural_only: bool) -> String {
    let plural = if plural_only {
        base.to_string()
    } else {
        match entry.and_then(|e| e.plural.clone()) {
            Some(plural) => plural,
            None => {
                trace!(noun = base, "no lexicon plural, deriving by rule");
                plural_of(base, gender)
            }
        }
    };

    if let Some(form) = entry.and_then(|e| e.case_form(case, Number::Plural)) {
        return form.map(str::to_string).unwrap_or(plural);
    }
    if case == Case::Dative && !plural.ends_with('n') && !plural.ends_with('s') {
        return format!("{}n", plural);
    }
    plural
}

/// Rule-derived plural, checked in order; the first matching ending wins.
pub fn plural_of(base: &str, gender: Gender) -> String {
    let last = last_char(base).unwrap_or('e');

    if ends_with_any(base, &["chen", "lein"]) {
        return base.to_string();
    }
    if gender == Gender::Feminine && ends_with_any(base, &["in"]) && syllables(base) > 1 {
        return format!("{}nen", base);
    }
    if ends_with_any(base, &["ung", "heit", "keit", "schaft", "ion", "tät", "ei", "ik"]) {
        return format!("{}en", base);
    }
    if ends_with_any(base, &["nis"]) {
        return format!("{}se", base);
    }
    if ends_with_any(base, &["um"]) && syllables(base) > 1 {
        return format!("{}en", &base[..base.len() - 2]);
    }
    if base.ends_with('e') {
        return format!("{}n", base);
    }
    if unstressed_ending(base, &["el", "er"]) {
        return if gender == Gender::Feminine { format!("{}n", base) } else { base.to_string() };
    }
    if unstressed_ending(base, &["en"]) {
        return base.to_string();
    }
    // Full vowels, not diphthongs ("Auto" but not "Frau").
    if matches!(last, 'a' | 'i' | 'o' | 'u' | 'y') && !penultimate_char(base).map_or(false, is_vowel) {
        return format!("{}s", base);
    }
    if gender == Gender::Feminine || (gender == Gender::Masculine && is_weak_masculine(base)) {
        return format!("{}en", base);
    }
    format!("{}e", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(case: Case, number: Number) -> Features {
        Features { case: Some(case), number: Some(number), ..Features::default() }
    }

    #[test]
    fn test_invariant_fonds() {
        for case in Case::ALL {
            assert_eq!(inflect_noun("fonds", &features(case, Number::Singular), None), "Fonds");
            assert_eq!(inflect_noun("Immobilienfonds", &features(case, Number::Plural), None), "Immobilienfonds");
        }
    }

    #[test]
    fn test_genitive_rules() {
        let gen = features(Case::Genitive, Number::Singular);
        let neuter = Features { gender: Some(Gender::Neuter), ..gen.clone() };
        assert_eq!(inflect_noun("Spiel", &neuter, None), "Spiels");
        assert_eq!(inflect_noun("Haus", &neuter, None), "Hauses");
        assert_eq!(inflect_noun("Kind", &neuter, None), "Kindes");
        assert_eq!(inflect_noun("Ergebnis", &neuter, None), "Ergebnisses");
        assert_eq!(inflect_noun("Fluß", &gen, None), "Flusses");
        assert_eq!(inflect_noun("Lehrer", &gen, None), "Lehrers");
    }

    #[test]
    fn test_weak_masculine() {
        let acc = Features { gender: Some(Gender::Masculine), ..features(Case::Accusative, Number::Singular) };
        assert_eq!(inflect_noun("Junge", &acc, None), "Jungen");
        assert_eq!(inflect_noun("Student", &acc, None), "Studenten");
        let nom = Features { case: Some(Case::Nominative), ..acc };
        assert_eq!(inflect_noun("Student", &nom, None), "Student");
    }

    #[test]
    fn test_feminine_singular_never_changes() {
        let dat = Features { gender: Some(Gender::Feminine), ..features(Case::Genitive, Number::Singular) };
        assert_eq!(inflect_noun("Sonne", &dat, None), "Sonne");
    }

    #[test]
    fn test_plural_rules() {
        assert_eq!(plural_of("Blume", Gender::Feminine), "Blumen");
        assert_eq!(plural_of("Lehrerin", Gender::Feminine), "Lehrerinnen");
        assert_eq!(plural_of("Zeitung", Gender::Feminine), "Zeitungen");
        assert_eq!(plural_of("Lehrer", Gender::Masculine), "Lehrer");
        assert_eq!(plural_of("Schwester", Gender::Feminine), "Schwestern");
        assert_eq!(plural_of("Mädchen", Gender::Neuter), "Mädchen");
        assert_eq!(plural_of("Auto", Gender::Neuter), "Autos");
        assert_eq!(plural_of("Ergebnis", Gender::Neuter), "Ergebnisse");
        assert_eq!(plural_of("Museum", Gender::Neuter), "Museen");
        assert_eq!(plural_of("Studium", Gender::Neuter), "Studien");
        assert_eq!(plural_of("Frau", Gender::Feminine), "Frauen");
        assert_eq!(plural_of("Spiel", Gender::Neuter), "Spiele");
    }

    #[test]
    fn test_dative_plural_adds_n() {
        let dat = Features { gender: Some(Gender::Neuter), ..features(Case::Dative, Number::Plural) };
        assert_eq!(inflect_noun("Spiel", &dat, None), "Spielen");
        assert_eq!(inflect_noun("Auto", &dat, None), "Autos");
        assert_eq!(inflect_noun("Blume", &dat, None), "Blumen");
    }

    #[test]
    fn test_lexicon_plural_and_overrides() {
        let mut entry = WordEntry::new("Haus", logos_protocol::PartOfSpeech::Noun)
            .with_gender(Gender::Neuter)
            .with_plural("Häuser");
        entry.genitive_plural = Some("-".to_string());

        for case in [Case::Nominative, Case::Accusative, Case::Genitive] {
            assert_eq!(inflect_noun("Haus", &features(case, Number::Plural), Some(&entry)), "Häuser");
        }
        assert_eq!(inflect_noun("Haus", &features(Case::Dative, Number::Plural), Some(&entry)), "Häusern");
    }

    #[test]
    fn test_proper_noun_genitive() {
        let entry = WordEntry::new("Klaus", logos_protocol::PartOfSpeech::Noun).with_flags(LexicalFlags::PROPER);
        assert_eq!(inflect_noun("Klaus", &features(Case::Genitive, Number::Singular), Some(&entry)), "Klaus'");
    }

    #[test]
    fn test_nouns_are_capitalised() {
        assert_eq!(inflect_noun("spiel", &Features::default(), None), "Spiel");
    }
}
