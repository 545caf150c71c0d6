//! Input tree handed to the syntax pass.
//!
//! The tree is built by the caller and read, never rewritten, by the
//! realizer. Each child is tagged with its discourse function when it is
//! attached through one of the `with_*` builders.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::features::{
    ClauseStatus, DiscourseFunction, FeatureFlags, Features, InterrogativeType, PartOfSpeech, Tense,
};
use crate::lexicon::WordEntry;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum PhraseKind {
    Clause,
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
}

/// Closed category tag of every node, input or realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Category {
    Phrase(PhraseKind),
    Word(PartOfSpeech),
    Canned,
    List,
    Coordinated,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Element {
    Word(Word),
    Canned(Canned),
    Phrase(Box<Phrase>),
    Coordination(Box<Coordination>),
    List(ElementList),
}

impl Element {
    pub fn category(&self) -> Category {
        match self {
            Element::Word(word) => Category::Word(word.pos),
            Element::Canned(_) => Category::Canned,
            Element::Phrase(phrase) => Category::Phrase(phrase.kind),
            Element::Coordination(_) => Category::Coordinated,
            Element::List(_) => Category::List,
        }
    }

    pub fn features(&self) -> &Features {
        match self {
            Element::Word(word) => &word.features,
            Element::Canned(canned) => &canned.features,
            Element::Phrase(phrase) => &phrase.features,
            Element::Coordination(coord) => &coord.features,
            Element::List(list) => &list.features,
        }
    }

    pub fn features_mut(&mut self) -> &mut Features {
        match self {
            Element::Word(word) => &mut word.features,
            Element::Canned(canned) => &mut canned.features,
            Element::Phrase(phrase) => &mut phrase.features,
            Element::Coordination(coord) => &mut coord.features,
            Element::List(list) => &mut list.features,
        }
    }

    pub fn function(&self) -> Option<DiscourseFunction> {
        self.features().function
    }

    pub fn tagged(mut self, function: DiscourseFunction) -> Self {
        self.features_mut().function = Some(function);
        self
    }

    pub fn with_flag(mut self, flag: FeatureFlags) -> Self {
        self.features_mut().set(flag, true);
        self
    }

    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Element::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Element::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn is_clause(&self) -> bool {
        matches!(self, Element::Phrase(phrase) if phrase.kind == PhraseKind::Clause)
    }
}

impl From<Word> for Element {
    fn from(word: Word) -> Self {
        Element::Word(word)
    }
}

impl From<Phrase> for Element {
    fn from(phrase: Phrase) -> Self {
        Element::Phrase(Box::new(phrase))
    }
}

impl From<Coordination> for Element {
    fn from(coord: Coordination) -> Self {
        Element::Coordination(Box::new(coord))
    }
}

impl From<Canned> for Element {
    fn from(canned: Canned) -> Self {
        Element::Canned(canned)
    }
}

/// A lexical leaf. `entry` is an owned copy of the lexicon record, if the
/// caller already resolved one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Word {
    pub base: String,
    pub pos: PartOfSpeech,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entry: Option<WordEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Features,
}

impl Word {
    pub fn new(base: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { base: base.into(), pos, entry: None, features: Features::default() }
    }

    pub fn noun(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Noun)
    }

    pub fn verb(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Verb)
    }

    pub fn adjective(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Adjective)
    }

    pub fn adverb(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Adverb)
    }

    pub fn article(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Article)
    }

    pub fn pronoun(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Pronoun)
    }

    pub fn preposition(base: impl Into<String>) -> Self {
        Self::new(base, PartOfSpeech::Preposition)
    }

    pub fn with_entry(mut self, entry: WordEntry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_flag(mut self, flag: FeatureFlags) -> Self {
        self.features.set(flag, true);
        self
    }
}

/// Already-final text, passed through every stage untouched.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Canned {
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Features,
}

impl Canned {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), features: Features::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ElementList {
    pub elements: Vec<Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Features,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Phrase {
    pub kind: PhraseKind,
    pub features: Features,
    pub head: Option<Element>,
    pub specifier: Option<Element>,
    pub cue_phrase: Option<Element>,
    /// Clause only.
    pub subjects: Vec<Element>,
    /// Clause only.
    pub verb_phrase: Option<Element>,
    pub front_modifiers: Vec<Element>,
    pub pre_modifiers: Vec<Element>,
    pub modifiers: Vec<Element>,
    pub complements: Vec<Element>,
    pub post_modifiers: Vec<Element>,
}

impl Default for Phrase {
    fn default() -> Self {
        Phrase::new(PhraseKind::Clause)
    }
}

impl Phrase {
    pub fn new(kind: PhraseKind) -> Self {
        Self {
            kind,
            features: Features::default(),
            head: None,
            specifier: None,
            cue_phrase: None,
            subjects: Vec::new(),
            verb_phrase: None,
            front_modifiers: Vec::new(),
            pre_modifiers: Vec::new(),
            modifiers: Vec::new(),
            complements: Vec::new(),
            post_modifiers: Vec::new(),
        }
    }

    /// Clause with `subject`, a verb phrase headed by `verb`, and an optional object.
    pub fn clause(subject: impl Into<Element>, verb: impl Into<Element>) -> Self {
        let mut vp = Phrase::new(PhraseKind::Verb);
        vp.head = Some(verb.into().tagged(DiscourseFunction::Head));
        Phrase::new(PhraseKind::Clause).with_subject(subject).with_verb_phrase(vp)
    }

    pub fn noun(specifier: Option<&str>, head: impl Into<Element>) -> Self {
        let mut np = Phrase::new(PhraseKind::Noun).with_head(head);
        if let Some(spec) = specifier {
            np = np.with_specifier(Word::article(spec));
        }
        np
    }

    pub fn verb(head: impl Into<Element>) -> Self {
        Phrase::new(PhraseKind::Verb).with_head(head)
    }

    pub fn adjective(head: impl Into<Element>) -> Self {
        Phrase::new(PhraseKind::Adjective).with_head(head)
    }

    pub fn adverb(head: impl Into<Element>) -> Self {
        Phrase::new(PhraseKind::Adverb).with_head(head)
    }

    pub fn preposition(head: impl Into<Element>, complement: impl Into<Element>) -> Self {
        Phrase::new(PhraseKind::Preposition).with_head(head).with_complement(complement)
    }

    pub fn with_head(mut self, head: impl Into<Element>) -> Self {
        self.head = Some(head.into().tagged(DiscourseFunction::Head));
        self
    }

    pub fn with_specifier(mut self, specifier: impl Into<Element>) -> Self {
        self.specifier = Some(specifier.into().tagged(DiscourseFunction::Specifier));
        self
    }

    pub fn with_cue_phrase(mut self, cue: impl Into<Element>) -> Self {
        self.cue_phrase = Some(cue.into().tagged(DiscourseFunction::CuePhrase));
        self
    }

    pub fn with_subject(mut self, subject: impl Into<Element>) -> Self {
        self.subjects.push(subject.into().tagged(DiscourseFunction::Subject));
        self
    }

    pub fn with_verb_phrase(mut self, vp: impl Into<Element>) -> Self {
        self.verb_phrase = Some(vp.into().tagged(DiscourseFunction::VerbPhrase));
        self
    }

    pub fn with_front_modifier(mut self, modifier: impl Into<Element>) -> Self {
        self.front_modifiers.push(modifier.into().tagged(DiscourseFunction::FrontModifier));
        self
    }

    pub fn with_pre_modifier(mut self, modifier: impl Into<Element>) -> Self {
        self.pre_modifiers.push(modifier.into().tagged(DiscourseFunction::PreModifier));
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<Element>) -> Self {
        self.modifiers.push(modifier.into().tagged(DiscourseFunction::Modifier));
        self
    }

    pub fn with_post_modifier(mut self, modifier: impl Into<Element>) -> Self {
        self.post_modifiers.push(modifier.into().tagged(DiscourseFunction::PostModifier));
        self
    }

    /// Adds a complement. An already-tagged object role (object, indirect
    /// object) is kept.
    pub fn with_complement(mut self, complement: impl Into<Element>) -> Self {
        let mut complement = complement.into();
        if !matches!(
            complement.function(),
            Some(DiscourseFunction::Object) | Some(DiscourseFunction::IndirectObject)
        ) {
            complement.features_mut().function = Some(DiscourseFunction::Complement);
        }
        self.complements.push(complement);
        self
    }

    /// Adds an accusative object. On a clause the object goes to the verb phrase.
    pub fn with_object(self, object: impl Into<Element>) -> Self {
        self.with_verb_complement(object.into().tagged(DiscourseFunction::Object))
    }

    /// Adds a dative object. On a clause the object goes to the verb phrase.
    pub fn with_indirect_object(self, object: impl Into<Element>) -> Self {
        self.with_verb_complement(object.into().tagged(DiscourseFunction::IndirectObject))
    }

    fn with_verb_complement(mut self, complement: Element) -> Self {
        if self.kind == PhraseKind::Clause {
            if let Some(Element::Phrase(vp)) = self.verb_phrase.as_mut() {
                vp.complements.push(complement);
                return self;
            }
        }
        self.complements.push(complement);
        self
    }

    /// Adds a modifier to the verb phrase of a clause (or to self otherwise).
    pub fn with_verb_modifier(mut self, modifier: impl Into<Element>) -> Self {
        let modifier = modifier.into().tagged(DiscourseFunction::Modifier);
        if self.kind == PhraseKind::Clause {
            if let Some(Element::Phrase(vp)) = self.verb_phrase.as_mut() {
                vp.modifiers.push(modifier);
                return self;
            }
        }
        self.modifiers.push(modifier);
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_flag(mut self, flag: FeatureFlags) -> Self {
        self.features.set(flag, true);
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.features.tense = Some(tense);
        self
    }

    pub fn with_interrogative(mut self, kind: InterrogativeType) -> Self {
        self.features.interrogative = Some(kind);
        self
    }

    pub fn with_modal(mut self, modal: impl Into<String>) -> Self {
        self.features.modal = Some(modal.into());
        self.features.set(FeatureFlags::CONTAINS_MODAL, true);
        self
    }

    /// Marks the clause subordinate, introduced by `complementiser`.
    pub fn subordinate(mut self, complementiser: impl Into<String>) -> Self {
        self.features.clause_status = Some(ClauseStatus::Subordinate);
        self.features.complementiser = Some(complementiser.into());
        self
    }
}

/// Coordinated elements joined by a conjunction ("Klaus und Maria").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Coordination {
    pub coordinates: Vec<Element>,
    pub conjunction: String,
    pub features: Features,
    pub pre_modifiers: Vec<Element>,
    pub complements: Vec<Element>,
    pub post_modifiers: Vec<Element>,
}

impl Default for Coordination {
    fn default() -> Self {
        Coordination::new(Vec::new(), "und")
    }
}

impl Coordination {
    pub fn new(coordinates: Vec<Element>, conjunction: impl Into<String>) -> Self {
        Self {
            coordinates,
            conjunction: conjunction.into(),
            features: Features::default(),
            pre_modifiers: Vec::new(),
            complements: Vec::new(),
            post_modifiers: Vec::new(),
        }
    }

    pub fn and(coordinates: Vec<Element>) -> Self {
        Self::new(coordinates, "und")
    }

    /// "und"/"sowie" coordinations of two or more members read as plural.
    pub fn is_plural(&self) -> bool {
        self.coordinates.len() > 1 && matches!(self.conjunction.as_str(), "und" | "sowie" | "")
    }
}
