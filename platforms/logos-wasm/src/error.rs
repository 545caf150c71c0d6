use logos_protocol::LexiconError;
use thiserror::Error;

/// Failures before realization starts. Realization itself always yields
/// a string.
#[derive(Debug, Error)]
pub enum RealiseError {
    #[error("lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("malformed tree: {0}")]
    Json(#[from] serde_json::Error),

    /// A JS value that does not describe an element tree.
    #[error("malformed tree: {0}")]
    Tree(String),
}
