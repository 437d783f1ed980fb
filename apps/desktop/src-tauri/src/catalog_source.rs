//! Loading the question catalog at startup and from user-chosen files.

use anyhow::Context;
use quiz_core::Catalog;
use std::path::Path;

/// Question set shipped with the application.
const BUNDLED_QUESTIONS: &str = include_str!("../resources/questions.json");

pub fn bundled_catalog() -> anyhow::Result<Catalog> {
    Catalog::from_json(BUNDLED_QUESTIONS).context("bundled question set is invalid")
}

pub fn catalog_from_file(path: &Path) -> anyhow::Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Catalog::from_json(&content).with_context(|| format!("failed to import {}", path.display()))
}

/// Configured file if any, else the bundled set.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog = match path {
        Some(path) => catalog_from_file(path)?,
        None => bundled_catalog()?,
    };
    tracing::info!("Loaded {} questions", catalog.len());
    Ok(catalog)
}
