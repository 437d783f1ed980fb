//! Application configuration from environment variables (and `.env`).

use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_VAR: &str = "QUIZ_DB_PATH";
pub const CATALOG_PATH_VAR: &str = "QUIZ_CATALOG_PATH";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Question file to load instead of the bundled set.
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    /// Load from the process environment after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_VAR) {
            Some(path) => PathBuf::from(non_empty(DB_PATH_VAR, path)?),
            None => default_db_path(),
        };

        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|path| non_empty(CATALOG_PATH_VAR, path).map(PathBuf::from))
            .transpose()?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path,
            catalog_path,
            log_filter,
        })
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { var })
    } else {
        Ok(value)
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quiz-flashcards")
        .join("state.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.db_path.ends_with("quiz-flashcards/state.db"));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/quiz.db"),
            (CATALOG_PATH_VAR, "/tmp/questions.json"),
            (LOG_FILTER_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/quiz.db"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/questions.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn rejects_empty_paths() {
        let result = AppConfig::from_lookup(lookup(&[(CATALOG_PATH_VAR, " ")]));
        assert!(matches!(
            result,
            Err(ConfigError::Empty {
                var: CATALOG_PATH_VAR
            })
        ));
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let config = AppConfig::from_lookup(lookup(&[(LOG_FILTER_VAR, "")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }
}
