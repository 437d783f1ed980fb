//! Application state.

use crate::commands::CommandError;
use crate::db::SqliteKvStore;
use quiz_core::{Catalog, QuizSession};
use std::sync::{Mutex, MutexGuard};

pub type Session = QuizSession<SqliteKvStore>;

/// Global application state.
pub struct AppState {
    session: Mutex<Session>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: SqliteKvStore) -> Self {
        Self {
            session: Mutex::new(QuizSession::new(catalog, store)),
        }
    }

    pub fn session(&self) -> Result<MutexGuard<'_, Session>, CommandError> {
        self.session.lock().map_err(|_| CommandError {
            message: "session state is unavailable".to_string(),
        })
    }
}
