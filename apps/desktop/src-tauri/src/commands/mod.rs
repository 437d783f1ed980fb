//! Tauri commands exposed to the frontend.

pub mod catalog;
pub mod filter;
pub mod settings;
pub mod study;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<quiz_core::ImportError> for CommandError {
    fn from(e: quiz_core::ImportError) -> Self {
        Self {
            message: format!("Import failed: {}", e),
        }
    }
}

impl From<quiz_core::SessionError> for CommandError {
    fn from(e: quiz_core::SessionError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<quiz_core::StoreError> for CommandError {
    fn from(e: quiz_core::StoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(e: std::io::Error) -> Self {
        Self { message: e.to_string() }
    }
}
