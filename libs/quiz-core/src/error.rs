//! Error types for quiz-core.

use thiserror::Error;

/// Errors that can occur while importing a question catalog.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an array of questions")]
    NotAnArray,

    #[error("invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("duplicate ID {id} at index {index}")]
    DuplicateId { index: usize, id: i64 },
}

/// Errors raised by a key-value backend on write.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap any backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Errors returned by quiz session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("question not found: {0}")]
    UnknownQuestion(i64),

    #[error("answer option {index} out of range for question {card_id} ({len} options)")]
    InvalidOption {
        card_id: i64,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
