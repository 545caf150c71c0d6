//! Output of the syntax pass: an ordered tree of groups whose leaves are
//! either words still awaiting inflection or final text.

use alloc::string::String;
use alloc::vec::Vec;

use crate::features::{DiscourseFunction, FeatureFlags, Features, PartOfSpeech};
use crate::lexicon::WordEntry;
use crate::tree::Category;

#[derive(Debug, Clone, PartialEq)]
pub enum Realized {
    Inflect(InflectedWord),
    Text(TextLeaf),
    Group(Group),
}

impl Realized {
    pub fn text(text: impl Into<String>) -> Self {
        Realized::Text(TextLeaf::new(text))
    }

    pub fn features(&self) -> &Features {
        match self {
            Realized::Inflect(word) => &word.features,
            Realized::Text(leaf) => &leaf.features,
            Realized::Group(group) => &group.features,
        }
    }

    pub fn features_mut(&mut self) -> &mut Features {
        match self {
            Realized::Inflect(word) => &mut word.features,
            Realized::Text(leaf) => &mut leaf.features,
            Realized::Group(group) => &mut group.features,
        }
    }

    pub fn function(&self) -> Option<DiscourseFunction> {
        self.features().function
    }

    pub fn tagged(mut self, function: DiscourseFunction) -> Self {
        self.features_mut().function = Some(function);
        self
    }

    /// True for an empty group or empty text; such nodes contribute nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Realized::Inflect(_) => false,
            Realized::Text(leaf) => leaf.text.is_empty(),
            Realized::Group(group) => group.children.iter().all(Realized::is_empty),
        }
    }

    /// Concatenates the leaves with single spaces. Unresolved words show their base.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let piece = match self {
            Realized::Inflect(word) => word.base.as_str(),
            Realized::Text(leaf) => leaf.text.as_str(),
            Realized::Group(group) => {
                for child in &group.children {
                    child.collect_text(out);
                }
                return;
            }
        };
        if piece.is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
}

/// A word the morphology pass still has to inflect.
#[derive(Debug, Clone, PartialEq)]
pub struct InflectedWord {
    pub base: String,
    pub pos: PartOfSpeech,
    pub entry: Option<WordEntry>,
    pub features: Features,
    /// Separable particle of a verb ("ab" in "abschließen").
    pub particle: Option<String>,
}

impl InflectedWord {
    pub fn new(base: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { base: base.into(), pos, entry: None, features: Features::default(), particle: None }
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

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLeaf {
    pub text: String,
    pub features: Features,
}

impl TextLeaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), features: Features::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub category: Category,
    pub features: Features,
    pub children: Vec<Realized>,
}

impl Group {
    pub fn new(category: Category) -> Self {
        Self { category, features: Features::default(), children: Vec::new() }
    }

    pub fn list(function: DiscourseFunction, children: Vec<Realized>) -> Self {
        let mut group = Self::new(Category::List);
        group.features.function = Some(function);
        group.children = children;
        group
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn push(&mut self, child: Realized) {
        if !child.is_empty() {
            self.children.push(child);
        }
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = Realized>) {
        for child in children {
            self.push(child);
        }
    }

    /// Number of unresolved `InflectedWord` leaves under this group.
    pub fn pending_words(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Realized::Inflect(_) => 1,
                Realized::Text(_) => 0,
                Realized::Group(group) => group.pending_words(),
            })
            .sum()
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl From<Group> for Realized {
    fn from(group: Group) -> Self {
        Realized::Group(group)
    }
}

impl From<InflectedWord> for Realized {
    fn from(word: InflectedWord) -> Self {
        Realized::Inflect(word)
    }
}

impl From<TextLeaf> for Realized {
    fn from(leaf: TextLeaf) -> Self {
        Realized::Text(leaf)
    }
}
