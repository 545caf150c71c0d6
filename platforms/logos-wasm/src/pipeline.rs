use logos_morph::morphology;
use logos_ortho::{orthography_with, OrthographyConfig};
use logos_protocol::{Dictionary, Element, Lexicon, LexiconIndex};
use logos_syntax::{syntax, RealiserConfig};
use tracing::debug;

use crate::error::RealiseError;

/// Runs syntax, morphology and orthography over one tree.
pub fn realise(
    element: &Element,
    lexicon: &dyn Lexicon,
    config: &RealiserConfig,
    orthography: &OrthographyConfig,
) -> String {
    let group = syntax(element, lexicon, config);
    let group = morphology(group, lexicon);
    let sentence = orthography_with(&group, orthography);
    debug!(%sentence, "realised");
    sentence
}

/// A lexicon plus the settings of both configurable passes.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    lexicon: LexiconIndex,
    syntax: RealiserConfig,
    orthography: OrthographyConfig,
}

impl Pipeline {
    pub fn new(lexicon: LexiconIndex) -> Self {
        Self { lexicon, ..Self::default() }
    }

    /// Loads a lexicon compiled by `atlas-compiler`.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, RealiseError> {
        let dictionary = Dictionary::from_archive(bytes)?;
        debug!(version = dictionary.version, entries = dictionary.entries.len(), "lexicon loaded");
        Ok(Self::new(LexiconIndex::from_dictionary(dictionary)?))
    }

    pub fn with_syntax_config(mut self, config: RealiserConfig) -> Self {
        self.syntax = config;
        self
    }

    pub fn with_orthography_config(mut self, config: OrthographyConfig) -> Self {
        self.orthography = config;
        self
    }

    pub fn lexicon(&self) -> &LexiconIndex {
        &self.lexicon
    }

    pub fn realise(&self, element: &Element) -> String {
        realise(element, &self.lexicon, &self.syntax, &self.orthography)
    }

    pub fn realise_json(&self, tree: &str) -> Result<String, RealiseError> {
        let element: Element = serde_json::from_str(tree)?;
        Ok(self.realise(&element))
    }
}
