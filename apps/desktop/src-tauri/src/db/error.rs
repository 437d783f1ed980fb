//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for quiz_core::StoreError {
    fn from(e: DbError) -> Self {
        quiz_core::StoreError::backend(e)
    }
}
