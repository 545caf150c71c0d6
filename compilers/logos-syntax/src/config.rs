#[cfg(feature = "serde")]
use serde::Deserialize;

/// Switches for the syntax pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealiserConfig {
    /// Reorder adjective pre-modifiers qualitative < colour < classifying < noun.
    pub order_adjectives: bool,
}

impl Default for RealiserConfig {
    fn default() -> Self {
        Self { order_adjectives: true }
    }
}

impl RealiserConfig {
    pub fn with_adjective_ordering(mut self, enabled: bool) -> Self {
        self.order_adjectives = enabled;
        self
    }
}
