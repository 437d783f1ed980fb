//! Local SQLite persistence.

pub mod error;
pub mod kv;
pub mod schema;

pub use error::DbError;
pub use kv::SqliteKvStore;
