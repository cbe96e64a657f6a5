//! Shared result and error types.

use serde::Serialize;
use thiserror::Error;

/// Crate-wide result alias.
pub type KalimatResult<T> = Result<T, KalimatError>;

/// Errors produced by the suggestion model, the rankers, and the corpus
/// utilities.
#[derive(Debug, Error)]
pub enum KalimatError {
    /// A query ran against a model or ranker that has never been fed data.
    #[error("model is not trained yet; ingest at least one document before querying")]
    ModelNotTrained,

    /// A caller-supplied argument was outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The corpus endpoint answered, but the payload was not usable.
    #[error("malformed corpus payload: {0}")]
    MalformedCorpus(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One next-word suggestion: a token and how often it followed the
/// queried context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub token: String,
    pub count: u32,
}

/// One ranked document: its position in the fitted corpus and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocScore {
    pub doc_id: usize,
    pub score: f32,
}
