//! Settings-related Tauri commands.

use crate::state::AppState;
use quiz_core::Theme;
use tauri::State;

use super::CommandError;

/// Saved theme, or the system preference when none is saved.
#[tauri::command]
pub async fn get_theme(
    prefers_dark: bool,
    state: State<'_, AppState>,
) -> Result<Theme, CommandError> {
    let session = state.session()?;
    Ok(session.theme(prefers_dark))
}

/// Switch between light and dark and persist the choice.
#[tauri::command]
pub async fn toggle_theme(
    prefers_dark: bool,
    state: State<'_, AppState>,
) -> Result<Theme, CommandError> {
    let mut session = state.session()?;
    session.toggle_theme(prefers_dark).map_err(Into::into)
}
