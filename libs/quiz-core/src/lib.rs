//! Core quiz flashcard library used by the desktop application.
//!
//! Provides:
//! - Question catalog with validated bulk import
//! - Filter engine (topics, free-text search, incorrect-only gate)
//! - Persisted progress over an abstract key-value store
//! - Quiz session tying answers, reveals and "go to last" navigation together

pub mod catalog;
pub mod error;
pub mod filter;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::{unique_topics, Catalog};
pub use error::{ImportError, SessionError, StoreError};
pub use filter::{apply_filters, FilteredView};
pub use session::{AnswerOutcome, Navigation, QuizSession};
pub use store::{KeyValueStore, MemoryStore, ProgressStore};
pub use types::{FilterCriteria, Question, Theme};
