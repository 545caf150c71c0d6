#![no_std] // Critical for WASM/Embedded compatibility

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod features;
pub mod lexicon;
pub mod tree;
pub mod realized;

// Re-export core types for convenience
pub use features::*;
pub use lexicon::{Dictionary, LemmaId, Lexicon, LexiconError, LexiconIndex, LexicalFlags, NoLexicon, WordEntry, NO_FORM};
pub use tree::{Canned, Category, Coordination, Element, ElementList, Phrase, PhraseKind, Word};
pub use realized::{Group, InflectedWord, Realized, TextLeaf};
