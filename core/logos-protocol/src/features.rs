use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use alloc::string::String;
use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Genitive = 1,
    Dative = 2,
    Accusative = 3,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Nominative, Case::Genitive, Case::Dative, Case::Accusative];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
    Neuter = 2,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    First = 1,
    Second = 2,
    Third = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Tense {
    Past = 0,
    Present = 1,
    Future = 2,
}

/// Non-finite and special verb forms. `Normal` is the finite form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Form {
    Normal = 0,
    /// "zu" infinitive.
    Infinitive = 1,
    BareInfinitive = 2,
    Imperative = 3,
    Gerund = 4,
    PastParticiple = 5,
    PresentParticiple = 6,
}

/// Which article precedes a noun; selects the adjective declension class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ArticleForm {
    Definite = 0,
    Indefinite = 1,
    Bare = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ClauseStatus {
    Matrix = 0,
    Subordinate = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum InterrogativeType {
    YesNo = 0,
    How = 1,
    WhoSubject = 2,
    WhatSubject = 3,
    WhoObject = 4,
    WhatObject = 5,
}

impl InterrogativeType {
    pub fn questions_object(self) -> bool {
        matches!(self, InterrogativeType::WhoObject | InterrogativeType::WhatObject)
    }

    pub fn questions_subject(self) -> bool {
        matches!(self, InterrogativeType::WhoSubject | InterrogativeType::WhatSubject)
    }
}

/// The role a child plays inside its parent phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum DiscourseFunction {
    Subject = 0,
    Object = 1,
    IndirectObject = 2,
    Complement = 3,
    Specifier = 4,
    Head = 5,
    PreModifier = 6,
    Modifier = 7,
    PostModifier = 8,
    FrontModifier = 9,
    CuePhrase = 10,
    Complementiser = 11,
    Conjunction = 12,
    Auxiliary = 13,
    VerbPhrase = 14,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Adjective = 1,
    Verb = 2,
    Adverb = 3,
    Article = 4,
    Preposition = 5,
    Conjunction = 6,
    Pronoun = 7,
    Particle = 8,
    Numeral = 9,
    Complementiser = 10,
    Modal = 11,
    Symbol = 12,
}

bitflags! {
    /// Boolean grammatical features carried on elements.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct FeatureFlags: u32 {
        const PASSIVE = 1;
        const NEGATED = 1 << 1;
        const PROGRESSIVE = 1 << 2;
        const PERFECT = 1 << 3;
        const COMPARATIVE = 1 << 4;
        const SUPERLATIVE = 1 << 5;
        const APPOSITIVE = 1 << 6;
        /// Left out of the realized text.
        const ELIDED = 1 << 7;
        const POSSESSIVE = 1 << 8;
        const SEPARABLE = 1 << 9;
        const CONTAINS_MODAL = 1 << 10;
        /// Surface the base form untouched (e.g. infinitive under a modal).
        const NON_MORPH = 1 << 11;
        const SUPPRESS_COMPLEMENTISER = 1 << 12;
        /// A question word fronted ahead of the finite verb.
        const VERB_SPLITTING = 1 << 13;
        const MERGED_ARTICLE = 1 << 14;
        /// Separable particle is realized elsewhere; inflect the stem alone.
        const DETACHED_PARTICLE = 1 << 15;
        /// Parallel adjective chain ("a, b und c").
        const PARALLEL = 1 << 16;
        /// A member that is itself a phrase rather than a single word.
        const COMPOSITE = 1 << 17;
        const INTERROGATIVE = 1 << 18;
    }
}

/// Typed feature bag of an element. Unset fields fall back to the defaults
/// documented on the accessors.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Features {
    pub tense: Option<Tense>,
    pub number: Option<Number>,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub case: Option<Case>,
    /// Case a phrase imposes on its complements (prepositions).
    pub governing_case: Option<Case>,
    pub form: Option<Form>,
    pub article_form: Option<ArticleForm>,
    pub clause_status: Option<ClauseStatus>,
    pub function: Option<DiscourseFunction>,
    pub interrogative: Option<InterrogativeType>,
    pub modal: Option<String>,
    pub complementiser: Option<String>,
    pub flags: FeatureFlags,
}

impl Features {
    pub fn has(&self, flag: FeatureFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn set(&mut self, flag: FeatureFlags, value: bool) {
        self.flags.set(flag, value);
    }

    pub fn case_or_default(&self) -> Case {
        self.case.unwrap_or(Case::Nominative)
    }

    pub fn number_or_default(&self) -> Number {
        self.number.unwrap_or(Number::Singular)
    }

    pub fn person_or_default(&self) -> Person {
        self.person.unwrap_or(Person::Third)
    }

    pub fn tense_or_default(&self) -> Tense {
        self.tense.unwrap_or(Tense::Present)
    }

    pub fn form_or_default(&self) -> Form {
        self.form.unwrap_or(Form::Normal)
    }

    pub fn article_form_or_default(&self) -> ArticleForm {
        self.article_form.unwrap_or(ArticleForm::Bare)
    }

    pub fn is_subordinate(&self) -> bool {
        self.clause_status == Some(ClauseStatus::Subordinate)
    }

    /// Copies every field set on `parent` into the unset fields of `self`.
    /// Flags in `flags` are or-ed in.
    pub fn inherit(&mut self, parent: &Features, flags: FeatureFlags) {
        macro_rules! fill {
            ($($field:ident),*) => {
                $(if self.$field.is_none() {
                    self.$field = parent.$field.clone();
                })*
            };
        }
        fill!(tense, number, person, gender, case, form, article_form, clause_status, modal);
        self.flags |= parent.flags & flags;
    }
}
