//! Answer tracking and navigation Tauri commands.

use crate::state::AppState;
use quiz_core::store::INCORRECT_KEY;
use quiz_core::{AnswerOutcome, Navigation};
use tauri::State;

use super::filter::FilterResponse;
use super::CommandError;

/// How long the web view flashes the card reached by "go to last".
pub const HIGHLIGHT_DURATION_MS: u64 = 1200;

#[derive(Debug, serde::Serialize)]
pub struct ProgressResponse {
    pub incorrect_ids: Vec<i64>,
    pub last_card_id: Option<i64>,
    pub revealed_ids: Vec<i64>,
    /// When the incorrect-answer set was last written (RFC 3339).
    pub incorrect_updated_at: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct NavigationResponse {
    pub navigation: Navigation,
    /// Present when filters were cleared and the list must be redrawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered: Option<FilterResponse>,
    pub highlight_ms: u64,
}

/// Record an answer for a card. Does not recompute the visible list.
#[tauri::command]
pub async fn submit_answer(
    card_id: i64,
    option_index: usize,
    state: State<'_, AppState>,
) -> Result<AnswerOutcome, CommandError> {
    let mut session = state.session()?;
    session.submit_answer(card_id, option_index).map_err(Into::into)
}

/// Flip a card between question and revealed answer.
#[tauri::command]
pub async fn toggle_reveal(card_id: i64, state: State<'_, AppState>) -> Result<bool, CommandError> {
    let mut session = state.session()?;
    session.toggle_reveal(card_id).map_err(Into::into)
}

/// Jump back to the last viewed card.
#[tauri::command]
pub async fn go_to_last(state: State<'_, AppState>) -> Result<NavigationResponse, CommandError> {
    let mut session = state.session()?;
    let navigation = session.go_to_last();

    let filtered = match navigation {
        Navigation::Located {
            filters_cleared: true,
            ..
        } => Some(session.visible().into()),
        _ => None,
    };

    Ok(NavigationResponse {
        navigation,
        filtered,
        highlight_ms: HIGHLIGHT_DURATION_MS,
    })
}

/// Persisted progress plus the cards revealed this session.
#[tauri::command]
pub async fn get_progress(state: State<'_, AppState>) -> Result<ProgressResponse, CommandError> {
    let session = state.session()?;
    let revealed_ids = session
        .catalog()
        .questions()
        .iter()
        .map(|q| q.id)
        .filter(|id| session.is_revealed(*id))
        .collect();

    let progress = session.progress();
    Ok(ProgressResponse {
        incorrect_updated_at: progress.backend().updated_at(INCORRECT_KEY)?,
        incorrect_ids: progress.get_incorrect_set().into_iter().collect(),
        last_card_id: progress.get_last_card_id(),
        revealed_ids,
    })
}
