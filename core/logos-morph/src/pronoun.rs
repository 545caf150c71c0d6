use logos_protocol::{Features, Gender, Number, Person};

use crate::adjective::case_row;

/// Nominative, genitive, dative, accusative.
type Paradigm = [&'static str; 4];

const ICH: Paradigm = ["ich", "meiner", "mir", "mich"];
const DU: Paradigm = ["du", "deiner", "dir", "dich"];
const ER: Paradigm = ["er", "seiner", "ihm", "ihn"];
const SIE_SINGULAR: Paradigm = ["sie", "ihrer", "ihr", "sie"];
const ES: Paradigm = ["es", "seiner", "ihm", "es"];
const WIR: Paradigm = ["wir", "unser", "uns", "uns"];
const IHR: Paradigm = ["ihr", "euer", "euch", "euch"];
const SIE_PLURAL: Paradigm = ["sie", "ihrer", "ihnen", "sie"];

const WER: Paradigm = ["wer", "wessen", "wem", "wen"];
const WAS: Paradigm = ["was", "wessen", "was", "was"];
const BEIDE: Paradigm = ["beide", "beider", "beiden", "beide"];

/// Grammatical person, number and gender a personal pronoun contributes to
/// agreement. "sie" is read as feminine singular; callers that know the
/// pronoun is plural override the number.
pub fn personal_pronoun_features(base: &str) -> Option<(Person, Number, Option<Gender>)> {
    let features = match base.to_lowercase().as_str() {
        "ich" => (Person::First, Number::Singular, None),
        "du" => (Person::Second, Number::Singular, None),
        "er" => (Person::Third, Number::Singular, Some(Gender::Masculine)),
        "sie" => (Person::Third, Number::Singular, Some(Gender::Feminine)),
        "es" => (Person::Third, Number::Singular, Some(Gender::Neuter)),
        "wir" => (Person::First, Number::Plural, None),
        "ihr" => (Person::Second, Number::Plural, None),
        _ => return None,
    };
    Some(features)
}

fn paradigm(base: &str, number: Number) -> Option<&'static Paradigm> {
    let paradigm = match (base.to_lowercase().as_str(), number) {
        ("ich", _) => &ICH,
        ("du", _) => &DU,
        ("er", _) => &ER,
        ("sie", Number::Plural) => &SIE_PLURAL,
        ("sie", Number::Singular) => &SIE_SINGULAR,
        ("es", _) => &ES,
        ("wir", _) => &WIR,
        ("ihr", _) => &IHR,
        ("wer", _) => &WER,
        ("was", _) => &WAS,
        ("beide", _) => &BEIDE,
        _ => return None,
    };
    Some(paradigm)
}

/// Personal, interrogative and the indefinite "beide" decline by case;
/// any other pronoun is returned unchanged.
pub fn inflect_pronoun(base: &str, features: &Features) -> String {
    match paradigm(base, features.number_or_default()) {
        Some(forms) => forms[case_row(features.case_or_default())].to_string(),
        None => base.to_string(),
    }
}
