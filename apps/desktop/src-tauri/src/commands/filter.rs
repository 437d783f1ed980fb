//! Filter-related Tauri commands.

use crate::state::AppState;
use quiz_core::{FilterCriteria, FilteredView};
use tauri::State;

use super::CommandError;

/// Filtered questions plus what the toolbar shows.
#[derive(Debug, serde::Serialize)]
pub struct FilterResponse {
    pub view: FilteredView,
    pub count_label: String,
    pub is_empty: bool,
}

impl From<FilteredView> for FilterResponse {
    fn from(view: FilteredView) -> Self {
        Self {
            count_label: view.count_label(),
            is_empty: view.is_empty(),
            view,
        }
    }
}

/// Replace the active criteria and return the visible questions.
#[tauri::command]
pub async fn apply_filters(
    criteria: FilterCriteria,
    state: State<'_, AppState>,
) -> Result<FilterResponse, CommandError> {
    let mut session = state.session()?;
    Ok(session.change_filter(criteria).into())
}

/// Reset every criterion to its default.
#[tauri::command]
pub async fn clear_filters(state: State<'_, AppState>) -> Result<FilterResponse, CommandError> {
    let mut session = state.session()?;
    Ok(session.clear_filters().into())
}

/// Current criteria, for restoring the toolbar.
#[tauri::command]
pub async fn get_filters(state: State<'_, AppState>) -> Result<FilterCriteria, CommandError> {
    let session = state.session()?;
    Ok(session.criteria().clone())
}
