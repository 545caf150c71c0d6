//! Orthography pass: flattens an inflected `Group` into a punctuated,
//! capitalized sentence.

pub mod config;
pub mod punctuation;

use logos_protocol::{Category, DiscourseFunction, FeatureFlags, Group, PhraseKind, Realized};
use tracing::debug;

pub use config::OrthographyConfig;

/// Conjunctions that always open a subordinate clause. Met inside a list
/// they force a comma in front.
pub const SUBORDINATORS: &[&str] = &[
    "weil", "dass", "während", "obwohl", "ob", "wenn", "nachdem", "bevor", "damit", "falls", "sodass", "seitdem",
    "sobald", "solange", "indem",
];

const COMMA: &str = ",";

fn is_subordinator(text: &str) -> bool {
    SUBORDINATORS.contains(&text.to_lowercase().as_str())
}

/// A subordinate clause that still carries its complementiser.
fn introduces_subordinate(group: &Group) -> bool {
    group.category == Category::Phrase(PhraseKind::Clause)
        && group.features.is_subordinate()
        && matches!(
            group.children.first(),
            Some(Realized::Text(leaf)) if leaf.features.function == Some(DiscourseFunction::Complementiser)
        )
}

/// Walks one sentence. The token buffer is the only state, so nothing
/// carries over between calls.
struct Finisher<'c> {
    config: &'c OrthographyConfig,
    tokens: Vec<String>,
}

impl<'c> Finisher<'c> {
    fn new(config: &'c OrthographyConfig) -> Self {
        Self { config, tokens: Vec::new() }
    }

    fn push(&mut self, text: &str) {
        if !text.is_empty() {
            self.tokens.push(text.to_string());
        }
    }

    /// At most one comma in a row, none at the start and none right after
    /// a coordinating "und".
    fn comma(&mut self) {
        match self.tokens.last().map(String::as_str) {
            None | Some(COMMA) | Some("und") | Some("oder") => {}
            Some(_) => self.tokens.push(COMMA.to_string()),
        }
    }

    fn node(&mut self, node: &Realized) {
        match node {
            Realized::Text(leaf) => self.push(&leaf.text),
            Realized::Inflect(word) => {
                debug!(base = %word.base, "uninflected word reached orthography");
                self.push(&word.base);
            }
            Realized::Group(group) => self.group(group),
        }
    }

    fn group(&mut self, group: &Group) {
        if introduces_subordinate(group) {
            self.comma();
            self.children(&group.children);
            self.comma();
            return;
        }
        if group.category != Category::List {
            self.children(&group.children);
            return;
        }
        match group.features.function {
            Some(DiscourseFunction::PreModifier) => self.pre_modifiers(group),
            Some(DiscourseFunction::Modifier | DiscourseFunction::PostModifier) => self.modifiers(group),
            Some(DiscourseFunction::CuePhrase) => {
                self.list(group);
                if self.config.comma_after_cue_phrase {
                    self.comma();
                }
            }
            Some(DiscourseFunction::FrontModifier) => {
                self.list(group);
                if self.config.comma_after_front_modifiers {
                    self.comma();
                }
            }
            _ => self.list(group),
        }
    }

    fn children(&mut self, children: &[Realized]) {
        for child in children {
            self.node(child);
        }
    }

    /// A plain list; a subordinating conjunction inside it opens a clause.
    fn list(&mut self, group: &Group) {
        for child in &group.children {
            if let Realized::Text(leaf) = child {
                if is_subordinator(&leaf.text) {
                    self.comma();
                }
            }
            self.node(child);
        }
    }

    fn pre_modifiers(&mut self, group: &Group) {
        let appositive = !group.children.is_empty() && group.children.iter().all(|c| c.features().has(FeatureFlags::APPOSITIVE));
        if appositive {
            self.comma();
            self.children(&group.children);
            self.comma();
            return;
        }
        for (i, child) in group.children.iter().enumerate() {
            if i > 0 && self.config.comma_separate_premodifiers {
                self.comma();
            }
            self.node(child);
        }
    }

    /// Appositive members are set off by commas; two or more parallel,
    /// non-composite members read "a, b und c".
    fn modifiers(&mut self, group: &Group) {
        let members = &group.children;
        let parallel = members.len() >= 2
            && members.iter().all(|m| m.features().has(FeatureFlags::PARALLEL))
            && !members.iter().any(|m| m.features().has(FeatureFlags::COMPOSITE));
        if parallel {
            let last = members.len() - 1;
            for (i, member) in members.iter().enumerate() {
                if i == last {
                    self.push("und");
                } else if i > 0 {
                    self.comma();
                }
                self.node(member);
            }
            return;
        }
        for member in members {
            if member.features().has(FeatureFlags::APPOSITIVE) {
                self.comma();
                self.node(member);
                self.comma();
            } else {
                self.node(member);
            }
        }
    }

    fn finish(mut self, group: &Group) -> String {
        self.group(group);
        let joined = punctuation::normalize(&self.tokens.join(" "));
        let text = punctuation::strip_trailing(punctuation::strip_leading(&joined));
        if text.is_empty() {
            return String::new();
        }
        let mut sentence = punctuation::capitalize(text);
        if !punctuation::ends_sentence(&sentence) {
            sentence.push(if group.features.has(FeatureFlags::INTERROGATIVE) { '?' } else { '.' });
        }
        sentence
    }
}

/// Runs the orthography pass with the default configuration.
pub fn orthography(group: &Group) -> String {
    orthography_with(group, &OrthographyConfig::default())
}

pub fn orthography_with(group: &Group, config: &OrthographyConfig) -> String {
    Finisher::new(config).finish(group)
}
