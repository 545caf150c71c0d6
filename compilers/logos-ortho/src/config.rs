#[cfg(feature = "serde")]
use serde::Deserialize;

/// Optional commas the finisher may insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrthographyConfig {
    /// "ein großes, helles Zimmer"
    pub comma_separate_premodifiers: bool,
    pub comma_after_cue_phrase: bool,
    pub comma_after_front_modifiers: bool,
}

impl OrthographyConfig {
    pub fn with_premodifier_commas(mut self, enabled: bool) -> Self {
        self.comma_separate_premodifiers = enabled;
        self
    }

    pub fn with_cue_phrase_comma(mut self, enabled: bool) -> Self {
        self.comma_after_cue_phrase = enabled;
        self
    }

    pub fn with_front_modifier_comma(mut self, enabled: bool) -> Self {
        self.comma_after_front_modifiers = enabled;
        self
    }
}
