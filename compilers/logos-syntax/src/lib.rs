//! Syntax pass: linearizes an input `Element` tree into a `Group` of
//! ordered constituents whose word leaves still await inflection.

pub mod clause;
pub mod config;
pub mod coordination;
pub mod interrogative;
pub mod literal;
pub mod noun_phrase;
pub mod ordering;
pub mod phrase;
pub mod verb_group;

use logos_protocol::{
    DiscourseFunction, Element, FeatureFlags, Features, Group, InflectedWord, Lexicon, PartOfSpeech, PhraseKind, Realized, TextLeaf,
    Word, WordEntry,
};
use tracing::{debug, trace};

pub use config::RealiserConfig;
pub use verb_group::{Placement, SplitVerbGroup, VerbGroup};

/// Own features first, then whatever the parent imposes on the child.
pub(crate) fn merged(own: &Features, imposed: &Features) -> Features {
    let mut features = own.clone();
    features.inherit(imposed, FeatureFlags::all());
    if features.function.is_none() {
        features.function = imposed.function;
    }
    if features.governing_case.is_none() {
        features.governing_case = imposed.governing_case;
    }
    features
}

pub struct Realiser<'a> {
    lexicon: &'a dyn Lexicon,
    config: RealiserConfig,
}

impl<'a> Realiser<'a> {
    pub fn new(lexicon: &'a dyn Lexicon, config: RealiserConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    /// Realizes a whole tree. A result that is not already a group is
    /// wrapped in one carrying its features.
    pub fn realise(&self, element: &Element) -> Group {
        match self.element(element, &Features::default()) {
            Realized::Group(group) => group,
            other => {
                let mut group = Group::new(element.category()).with_features(other.features().clone());
                group.push(other);
                group
            }
        }
    }

    pub(crate) fn element(&self, element: &Element, imposed: &Features) -> Realized {
        if element.features().has(FeatureFlags::ELIDED) {
            trace!(category = ?element.category(), "elided");
            return Group::new(element.category()).into();
        }
        match element {
            Element::Word(word) => self.word(word, imposed),
            Element::Canned(canned) => Realized::Text(TextLeaf {
                text: canned.text.clone(),
                features: merged(&canned.features, imposed),
            }),
            Element::Phrase(phrase) => match phrase.kind {
                PhraseKind::Clause => self.clause(phrase, imposed).into(),
                PhraseKind::Verb => self.verb_phrase(phrase, imposed).into(),
                PhraseKind::Noun => self.noun_phrase(phrase, imposed).into(),
                PhraseKind::Adjective | PhraseKind::Adverb => self.modifier_phrase(phrase, imposed).into(),
                PhraseKind::Preposition => self.prepositional_phrase(phrase, imposed).into(),
            },
            Element::Coordination(coord) => self.coordination(coord, imposed).into(),
            Element::List(list) => {
                let features = merged(&list.features, imposed);
                let mut group = Group::new(element.category()).with_features(features);
                for child in &list.elements {
                    group.push(self.element(child, imposed));
                }
                group.into()
            }
        }
    }

    pub(crate) fn word(&self, word: &Word, imposed: &Features) -> Realized {
        let mut leaf = InflectedWord::new(word.base.clone(), word.pos).with_features(merged(&word.features, imposed));
        leaf.entry = word.entry.clone();
        Realized::Inflect(leaf)
    }

    /// The caller's copy of the entry, else the lexicon's.
    pub(crate) fn entry(&self, word: &Word) -> Option<WordEntry> {
        self.lookup(&word.base, word.pos, word.entry.as_ref())
    }

    pub(crate) fn lookup(&self, base: &str, pos: PartOfSpeech, attached: Option<&WordEntry>) -> Option<WordEntry> {
        if let Some(entry) = attached {
            return Some(entry.clone());
        }
        let pos = if pos == PartOfSpeech::Modal { PartOfSpeech::Verb } else { pos };
        let entry = self.lexicon.lookup(base, pos);
        if entry.is_none() {
            trace!(base, ?pos, "lexicon miss");
        }
        entry
    }

    /// Realizes `elements` into a list group tagged with their function.
    pub(crate) fn list(&self, function: DiscourseFunction, elements: &[Element], imposed: &Features) -> Group {
        let children = elements.iter().map(|element| self.element(element, imposed)).collect();
        Group::list(function, children)
    }

    /// A modifier list. With two or more members, single adjectives and
    /// adverbs are marked as a parallel chain and phrases as composite.
    pub(crate) fn modifier_list(&self, elements: &[Element], imposed: &Features) -> Group {
        let mut group = self.list(DiscourseFunction::Modifier, elements, imposed);
        if elements.len() < 2 {
            return group;
        }
        for (element, child) in elements.iter().zip(group.children.iter_mut()) {
            let flag = match element {
                Element::Word(word) if matches!(word.pos, PartOfSpeech::Adjective | PartOfSpeech::Adverb) => {
                    FeatureFlags::PARALLEL
                }
                Element::Phrase(_) | Element::Coordination(_) => FeatureFlags::COMPOSITE,
                _ => continue,
            };
            child.features_mut().set(flag, true);
        }
        group
    }
}

/// Runs the syntax pass over `element`.
pub fn syntax(element: &Element, lexicon: &dyn Lexicon, config: &RealiserConfig) -> Group {
    debug!(category = ?element.category(), "syntax pass");
    Realiser::new(lexicon, config.clone()).realise(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_protocol::{Canned, Case, Category, ElementList, NoLexicon, Phrase};

    fn realise(element: impl Into<Element>) -> Group {
        syntax(&element.into(), &NoLexicon, &RealiserConfig::default())
    }

    #[test]
    fn test_canned_text_passes_through() {
        let group = realise(Canned::new("Guten Tag"));
        assert_eq!(group.category, Category::Canned);
        assert_eq!(group.plain_text(), "Guten Tag");
        assert_eq!(group.pending_words(), 0);
    }

    #[test]
    fn test_word_is_left_for_morphology() {
        let group = realise(Word::noun("Spiel"));
        assert_eq!(group.pending_words(), 1);
    }

    #[test]
    fn test_list_keeps_order() {
        let list = ElementList {
            elements: vec![Canned::new("eins").into(), Canned::new("zwei").into()],
            features: Features::default(),
        };
        assert_eq!(realise(Element::List(list)).plain_text(), "eins zwei");
    }

    #[test]
    fn test_merged_keeps_explicit_case() {
        let own = Features { case: Some(Case::Dative), ..Features::default() };
        let imposed = Features { case: Some(Case::Accusative), number: Some(logos_protocol::Number::Plural), ..Features::default() };
        let features = merged(&own, &imposed);
        assert_eq!(features.case, Some(Case::Dative));
        assert_eq!(features.number, Some(logos_protocol::Number::Plural));
    }

    #[test]
    fn test_elided_elements_are_dropped() {
        let clause = Phrase::clause(Word::noun("Klaus"), Word::verb("verlieren"))
            .with_object(Phrase::noun(Some("das"), Word::noun("Spiel")).with_flag(FeatureFlags::ELIDED));
        assert_eq!(realise(clause).plain_text(), "Klaus verlieren");
    }

    #[test]
    fn test_modifier_chains_are_marked() {
        let realiser = Realiser::new(&NoLexicon, RealiserConfig::default());
        let none = Features::default();
        let chain: [Element; 3] = [Word::adverb("schnell").into(), Word::adverb("leise").into(), Phrase::adverb(Word::adverb("sicher")).into()];
        let group = realiser.modifier_list(&chain, &none);
        assert!(group.children[0].features().has(FeatureFlags::PARALLEL));
        assert!(group.children[1].features().has(FeatureFlags::PARALLEL));
        assert!(group.children[2].features().has(FeatureFlags::COMPOSITE));

        let single = realiser.modifier_list(&chain[..1], &none);
        assert!(!single.children[0].features().has(FeatureFlags::PARALLEL));
    }

    #[test]
    fn test_noun_phrase_at_top_level() {
        let np = Phrase::noun(Some("der"), Word::noun("fonds"));
        let group = realise(np);
        assert_eq!(group.category, Category::Phrase(PhraseKind::Noun));
        assert_eq!(group.plain_text(), "der fonds");
    }
}
