use rkyv::{Archive, Deserialize, Serialize};
use crate::features::{Case, Gender, Number, PartOfSpeech};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bitflags::bitflags;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Stable identifier a lexicon source may assign to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct LemmaId(pub u32);

/// Marks a case override as "no such form, use the base form".
pub const NO_FORM: &str = "-";

bitflags! {
    /// Lexical markers stored with an entry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct LexicalFlags: u32 {
        const SEPARABLE = 1;
        const MERGED_ARTICLE = 1 << 1;
        /// Never inflects (e.g. "Fonds").
        const INVARIANT = 1 << 2;
        const PROPER = 1 << 3;
        const PLURAL_ONLY = 1 << 4;

        // Adjective ordering classes
        const QUALITATIVE = 1 << 5;
        const COLOUR = 1 << 6;
        const CLASSIFYING = 1 << 7;

        const MODAL = 1 << 8;
        const COPULA = 1 << 9;
    }
}

// rkyv support for LexicalFlags
impl Archive for LexicalFlags {
    type Archived = u32;
    type Resolver = ();

    unsafe fn resolve(&self, _pos: usize, _resolver: Self::Resolver, out: *mut Self::Archived) {
        out.write(self.bits());
    }
}

impl<S: rkyv::Fallible + ?Sized> Serialize<S> for LexicalFlags {
    fn serialize(&self, _serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        Ok(())
    }
}

impl<D: rkyv::Fallible + ?Sized> Deserialize<LexicalFlags, D> for u32 {
    fn deserialize(&self, _deserializer: &mut D) -> Result<LexicalFlags, D::Error> {
        Ok(LexicalFlags::from_bits_truncate(*self))
    }
}

/// A lexicon record. Entries are handed out by value so the realizer can
/// never write back into the lexicon.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordEntry {
    pub id: Option<LemmaId>,
    pub base: String,
    pub pos: PartOfSpeech,
    pub gender: Option<Gender>,

    pub plural: Option<String>,
    pub genitive_singular: Option<String>,
    pub dative_singular: Option<String>,
    pub accusative_singular: Option<String>,
    pub genitive_plural: Option<String>,
    pub dative_plural: Option<String>,
    pub accusative_plural: Option<String>,

    pub present_1s: Option<String>,
    pub present_2s: Option<String>,
    pub present_3s: Option<String>,
    pub present_2p: Option<String>,
    /// First/third person plural present.
    pub present_plural: Option<String>,
    /// First person singular preterite ("verlor", "hatte").
    pub preterite: Option<String>,
    pub past_participle: Option<String>,
    /// "haben" or "sein".
    pub perfect_auxiliary: Option<String>,
    pub particle: Option<String>,

    pub comparative: Option<String>,
    pub superlative: Option<String>,

    pub governing_case: Option<Case>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: LexicalFlags,
}

impl WordEntry {
    pub fn new(base: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            id: None,
            base: base.into(),
            pos,
            gender: None,
            plural: None,
            genitive_singular: None,
            dative_singular: None,
            accusative_singular: None,
            genitive_plural: None,
            dative_plural: None,
            accusative_plural: None,
            present_1s: None,
            present_2s: None,
            present_3s: None,
            present_2p: None,
            present_plural: None,
            preterite: None,
            past_participle: None,
            perfect_auxiliary: None,
            particle: None,
            comparative: None,
            superlative: None,
            governing_case: None,
            flags: LexicalFlags::empty(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    pub fn with_preterite(mut self, preterite: impl Into<String>) -> Self {
        self.preterite = Some(preterite.into());
        self
    }

    pub fn with_past_participle(mut self, participle: impl Into<String>) -> Self {
        self.past_participle = Some(participle.into());
        self
    }

    pub fn with_present(mut self, first: &str, second: &str, third: &str) -> Self {
        self.present_1s = Some(first.to_string());
        self.present_2s = Some(second.to_string());
        self.present_3s = Some(third.to_string());
        self
    }

    pub fn with_comparison(mut self, comparative: impl Into<String>, superlative: impl Into<String>) -> Self {
        self.comparative = Some(comparative.into());
        self.superlative = Some(superlative.into());
        self
    }

    pub fn with_governing_case(mut self, case: Case) -> Self {
        self.governing_case = Some(case);
        self
    }

    pub fn with_flags(mut self, flags: LexicalFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn has(&self, flag: LexicalFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Case-specific override. `Some(None)` means the entry explicitly has no
    /// such form and the base form should be used.
    pub fn case_form(&self, case: Case, number: Number) -> Option<Option<&str>> {
        let field = match (number, case) {
            (Number::Singular, Case::Genitive) => &self.genitive_singular,
            (Number::Singular, Case::Dative) => &self.dative_singular,
            (Number::Singular, Case::Accusative) => &self.accusative_singular,
            (Number::Plural, Case::Genitive) => &self.genitive_plural,
            (Number::Plural, Case::Dative) => &self.dative_plural,
            (Number::Plural, Case::Accusative) => &self.accusative_plural,
            (_, Case::Nominative) => return None,
        };
        field.as_deref().map(|form| if form == NO_FORM { None } else { Some(form) })
    }
}

#[derive(Debug, Clone, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dictionary {
    pub version: u32,
    pub entries: Vec<WordEntry>,
}

impl Dictionary {
    /// Validates and deserializes an rkyv archive produced by `atlas-compiler`.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<Dictionary>(&aligned)
            .map_err(|_| LexiconError::CorruptArchive)?;
        archived
            .deserialize(&mut rkyv::Infallible)
            .map_err(|_| LexiconError::CorruptArchive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    CorruptArchive,
    DuplicateEntry { base: String, pos: PartOfSpeech },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::CorruptArchive => write!(f, "lexicon archive failed validation"),
            LexiconError::DuplicateEntry { base, pos } => {
                write!(f, "duplicate lexicon entry: '{}' ({:?})", base, pos)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}

/// Keyed word lookup. A miss is an ordinary outcome: callers fall back to
/// rule-based derivation.
pub trait Lexicon {
    fn lookup(&self, base: &str, pos: PartOfSpeech) -> Option<WordEntry>;
}

/// A lexicon that knows no words.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLexicon;

impl Lexicon for NoLexicon {
    fn lookup(&self, _base: &str, _pos: PartOfSpeech) -> Option<WordEntry> {
        None
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn lookup(&self, base: &str, pos: PartOfSpeech) -> Option<WordEntry> {
        (**self).lookup(base, pos)
    }
}

/// Case-insensitive `(base, pos)` index over a dictionary.
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    entries: BTreeMap<(String, PartOfSpeech), WordEntry>,
}

impl LexiconIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dictionary(dict: Dictionary) -> Result<Self, LexiconError> {
        let mut index = Self::new();
        for entry in dict.entries {
            index.insert(entry)?;
        }
        Ok(index)
    }

    pub fn insert(&mut self, entry: WordEntry) -> Result<(), LexiconError> {
        let key = (entry.base.to_lowercase(), entry.pos);
        if self.entries.contains_key(&key) {
            return Err(LexiconError::DuplicateEntry { base: entry.base, pos: entry.pos });
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<WordEntry> for LexiconIndex {
    /// Later duplicates replace earlier ones.
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut index = Self::new();
        for entry in iter {
            index.entries.insert((entry.base.to_lowercase(), entry.pos), entry);
        }
        index
    }
}

impl Lexicon for LexiconIndex {
    fn lookup(&self, base: &str, pos: PartOfSpeech) -> Option<WordEntry> {
        self.entries.get(&(base.to_lowercase(), pos)).cloned()
    }
}

impl Lexicon for Dictionary {
    fn lookup(&self, base: &str, pos: PartOfSpeech) -> Option<WordEntry> {
        self.entries
            .iter()
            .find(|e| e.pos == pos && e.base.to_lowercase() == base.to_lowercase())
            .cloned()
    }
}
