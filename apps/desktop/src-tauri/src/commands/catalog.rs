//! Catalog-related Tauri commands.

use crate::state::AppState;
use quiz_core::{Catalog, Question};
use std::fs;
use std::path::Path;
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use super::filter::FilterResponse;
use super::CommandError;

#[derive(Debug, serde::Serialize)]
pub struct ImportResult {
    pub imported: usize,
    pub topics: Vec<String>,
    pub filtered: FilterResponse,
}

/// Every question in catalog order.
#[tauri::command]
pub async fn list_questions(state: State<'_, AppState>) -> Result<Vec<Question>, CommandError> {
    let session = state.session()?;
    Ok(session.catalog().questions().to_vec())
}

/// Sorted topic vocabulary for the filter chips.
#[tauri::command]
pub async fn list_topics(state: State<'_, AppState>) -> Result<Vec<String>, CommandError> {
    let session = state.session()?;
    Ok(session.topics().to_vec())
}

/// Replace the catalog from a JSON string. Rejected wholesale on any invalid item.
#[tauri::command]
pub async fn import_questions(
    json: String,
    state: State<'_, AppState>,
) -> Result<ImportResult, CommandError> {
    let catalog = Catalog::from_json(&json)?;
    replace(catalog, &state)
}

/// Replace the catalog from a JSON file.
#[tauri::command]
pub async fn import_questions_file(
    file_path: String,
    state: State<'_, AppState>,
) -> Result<ImportResult, CommandError> {
    import_from_path(Path::new(&file_path), &state)
}

/// Let the user pick a JSON file, then import it. `None` when cancelled.
#[tauri::command]
pub async fn pick_questions_file(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<Option<ImportResult>, CommandError> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Questions", &["json"])
        .blocking_pick_file();

    let Some(file) = picked else {
        return Ok(None);
    };
    let path = file.into_path().map_err(|e| CommandError {
        message: e.to_string(),
    })?;

    import_from_path(&path, &state).map(Some)
}

fn import_from_path(path: &Path, state: &AppState) -> Result<ImportResult, CommandError> {
    let content = fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&content)?;
    tracing::info!("Importing questions from {}", path.display());
    replace(catalog, state)
}

fn replace(catalog: Catalog, state: &AppState) -> Result<ImportResult, CommandError> {
    let imported = catalog.len();
    let mut session = state.session()?;
    let view = session.replace_catalog(catalog);

    Ok(ImportResult {
        imported,
        topics: session.topics().to_vec(),
        filtered: view.into(),
    })
}
