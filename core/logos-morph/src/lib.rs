//! German inflection: turns every word leaf the syntax pass left behind into
//! its final surface string.

pub mod adjective;
pub mod article;
pub mod noun;
pub mod phonology;
pub mod pronoun;
pub mod verb;

use logos_protocol::{Group, InflectedWord, Lexicon, PartOfSpeech, Realized, TextLeaf, WordEntry};
use tracing::debug;

pub use adjective::{inflect_adjective, inflect_adverb};
pub use article::{inflect_article, is_merged_article};
pub use noun::{inflect_noun, plural_of};
pub use pronoun::{inflect_pronoun, personal_pronoun_features};
pub use verb::{inflect_verb, is_modal, separable_particle};

/// Inflects one word. `entry` is the lexicon record, if any; the word's own
/// attached entry is not consulted here.
pub fn inflect(word: &InflectedWord, entry: Option<&WordEntry>) -> String {
    let features = &word.features;
    match word.pos {
        PartOfSpeech::Noun => inflect_noun(&word.base, features, entry),
        PartOfSpeech::Verb | PartOfSpeech::Modal => {
            inflect_verb(&word.base, features, entry, word.particle.as_deref())
        }
        PartOfSpeech::Adjective => inflect_adjective(&word.base, features, entry),
        PartOfSpeech::Adverb => inflect_adverb(&word.base, features, entry),
        PartOfSpeech::Article => inflect_article(&word.base, features, entry),
        PartOfSpeech::Pronoun => inflect_pronoun(&word.base, features),
        PartOfSpeech::Preposition
        | PartOfSpeech::Conjunction
        | PartOfSpeech::Particle
        | PartOfSpeech::Numeral
        | PartOfSpeech::Complementiser
        | PartOfSpeech::Symbol => word.base.clone(),
    }
}

/// Replaces every `InflectedWord` under `group` with a text leaf. Leaves
/// that already hold text and the group structure are kept as they are.
pub fn morphology(group: Group, lexicon: &dyn Lexicon) -> Group {
    let Group { category, features, children } = group;
    let children = children.into_iter().map(|child| realise_leaf(child, lexicon)).collect();
    Group { category, features, children }
}

fn realise_leaf(node: Realized, lexicon: &dyn Lexicon) -> Realized {
    match node {
        Realized::Inflect(word) => {
            let entry = match &word.entry {
                Some(entry) => Some(entry.clone()),
                None => lexicon.lookup(&word.base, lookup_pos(word.pos)),
            };
            let text = inflect(&word, entry.as_ref());
            debug!(base = %word.base, pos = ?word.pos, surface = %text, "inflected");
            Realized::Text(TextLeaf { text, features: word.features })
        }
        Realized::Group(group) => Realized::Group(morphology(group, lexicon)),
        text @ Realized::Text(_) => text,
    }
}

/// Modals are stored as verbs.
fn lookup_pos(pos: PartOfSpeech) -> PartOfSpeech {
    match pos {
        PartOfSpeech::Modal => PartOfSpeech::Verb,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_protocol::{Case, Category, Features, Gender, LexiconIndex, NoLexicon, Number, Person, Tense};
    use proptest::prelude::*;

    fn word(base: &str, pos: PartOfSpeech, features: Features) -> Realized {
        Realized::Inflect(InflectedWord::new(base, pos).with_features(features))
    }

    #[test]
    fn test_morphology_resolves_every_leaf() {
        let mut group = Group::new(Category::List);
        group.push(word(
            "der",
            PartOfSpeech::Article,
            Features { case: Some(Case::Genitive), gender: Some(Gender::Masculine), ..Features::default() },
        ));
        group.push(word("fonds", PartOfSpeech::Noun, Features { case: Some(Case::Genitive), ..Features::default() }));
        let mut inner = Group::new(Category::List);
        inner.push(Realized::text("und"));
        group.push(inner.into());

        let out = morphology(group, &NoLexicon);
        assert_eq!(out.pending_words(), 0);
        assert_eq!(out.plain_text(), "des Fonds und");
    }

    #[test]
    fn test_lexicon_lookup_feeds_inflection() {
        let lexicon: LexiconIndex = vec![WordEntry::new("verlieren", PartOfSpeech::Verb).with_preterite("verlor")]
            .into_iter()
            .collect();
        let features = Features {
            tense: Some(Tense::Past),
            person: Some(Person::Third),
            number: Some(Number::Singular),
            ..Features::default()
        };
        let mut group = Group::new(Category::List);
        group.push(word("verlieren", PartOfSpeech::Verb, features));
        assert_eq!(morphology(group, &lexicon).plain_text(), "verlor");
    }

    #[test]
    fn test_attached_entry_wins_over_lexicon() {
        let attached = WordEntry::new("Haus", PartOfSpeech::Noun).with_plural("Häuser");
        let mut leaf = InflectedWord::new("Haus", PartOfSpeech::Noun)
            .with_features(Features { number: Some(Number::Plural), ..Features::default() });
        leaf.entry = Some(attached);
        let mut group = Group::new(Category::List);
        group.push(leaf.into());
        assert_eq!(morphology(group, &NoLexicon).plain_text(), "Häuser");
    }

    #[test]
    fn test_modal_conjugates_as_verb() {
        let features = Features { person: Some(Person::Third), ..Features::default() };
        let modal = InflectedWord::new("können", PartOfSpeech::Modal).with_features(features);
        assert_eq!(inflect(&modal, None), "kann");
    }

    #[test]
    fn test_closed_class_passes_through() {
        let prep = InflectedWord::new("während", PartOfSpeech::Complementiser);
        assert_eq!(inflect(&prep, None), "während");
    }

    proptest! {
        #[test]
        fn test_verb_inflection_is_deterministic(stem in "[a-z]{2,8}", person in 0usize..3, plural: bool) {
            let base = format!("{}en", stem);
            let features = Features {
                person: Some([Person::First, Person::Second, Person::Third][person]),
                number: Some(if plural { Number::Plural } else { Number::Singular }),
                ..Features::default()
            };
            let first = inflect_verb(&base, &features, None, None);
            let second = inflect_verb(&base, &features, None, None);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_plural_never_empty(base in "[A-Z][a-zäöü]{1,10}", gender in 0usize..3) {
            let plural = plural_of(&base, Gender::ALL[gender]);
            prop_assert!(plural.starts_with(&base[..1]));
            prop_assert!(plural.chars().count() >= 2);
        }
    }
}
