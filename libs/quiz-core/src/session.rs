//! Quiz session: catalog, filter criteria, reveal flags and persisted progress.
//!
//! Commands mutate state and return what changed. Answer submission does not
//! recompute the visible list; callers decide whether to call [`QuizSession::refresh`].
//! "Go to last" looks at the list as last rendered, not a fresh recomputation.

use crate::catalog::Catalog;
use crate::error::SessionError;
use crate::filter::{apply_filters, FilteredView};
use crate::store::{KeyValueStore, ProgressStore};
use crate::types::{FilterCriteria, Theme};
use serde::Serialize;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SessionError>;

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub card_id: i64,
    pub selected_index: usize,
    pub correct_index: usize,
    pub correct: bool,
    pub revealed: bool,
    /// True when the "only incorrect" filter is on and the list may be stale.
    pub refilter_suggested: bool,
}

/// Result of a "go to last" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Navigation {
    NoLastCard,
    Located { card_id: i64, filters_cleared: bool },
    NotFound { card_id: i64 },
}

pub struct QuizSession<S> {
    catalog: Catalog,
    topics: Vec<String>,
    criteria: FilterCriteria,
    revealed: HashSet<i64>,
    /// Ids of the list last handed out for display, in order.
    rendered: Vec<i64>,
    progress: ProgressStore<S>,
}

impl<S: KeyValueStore> QuizSession<S> {
    pub fn new(catalog: Catalog, backend: S) -> Self {
        let topics = catalog.topics();
        let rendered = catalog.questions().iter().map(|q| q.id).collect();
        Self {
            catalog,
            topics,
            criteria: FilterCriteria::default(),
            revealed: HashSet::new(),
            rendered,
            progress: ProgressStore::new(backend),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Topic vocabulary for the filter chips.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn progress(&self) -> &ProgressStore<S> {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressStore<S> {
        &mut self.progress
    }

    /// Visible questions under the current criteria. Does not update the
    /// rendered list; see [`QuizSession::refresh`].
    pub fn visible(&self) -> FilteredView {
        let incorrect = self.progress.get_incorrect_set();
        apply_filters(self.catalog.questions(), &self.criteria, &incorrect)
            .into_iter()
            .collect()
    }

    /// Ids of the list last returned for display. May be stale after answers.
    pub fn rendered_ids(&self) -> &[i64] {
        &self.rendered
    }

    /// Recompute the visible list and record it as rendered.
    pub fn refresh(&mut self) -> FilteredView {
        let view = self.visible();
        self.rendered = view.questions.iter().map(|q| q.id).collect();
        view
    }

    pub fn change_filter(&mut self, criteria: FilterCriteria) -> FilteredView {
        tracing::debug!(?criteria, "Filter changed");
        self.criteria = criteria;
        self.refresh()
    }

    pub fn clear_filters(&mut self) -> FilteredView {
        self.change_filter(FilterCriteria::default())
    }

    pub fn is_revealed(&self, card_id: i64) -> bool {
        self.revealed.contains(&card_id)
    }

    /// Record an answer. Last submission wins; the card stays revealed.
    pub fn submit_answer(&mut self, card_id: i64, option_index: usize) -> Result<AnswerOutcome> {
        let question = self
            .catalog
            .get(card_id)
            .ok_or(SessionError::UnknownQuestion(card_id))?;
        if option_index >= question.answers.len() {
            return Err(SessionError::InvalidOption {
                card_id,
                index: option_index,
                len: question.answers.len(),
            });
        }

        let correct = question.is_correct(option_index);
        let correct_index = question.correct_index;

        if correct {
            self.progress.remove_incorrect(card_id)?;
        } else {
            self.progress.add_incorrect(card_id)?;
        }
        self.revealed.insert(card_id);
        self.progress.set_last_card_id(card_id)?;

        tracing::debug!(card_id, option_index, correct, "Answer submitted");

        Ok(AnswerOutcome {
            card_id,
            selected_index: option_index,
            correct_index,
            correct,
            revealed: true,
            refilter_suggested: self.criteria.only_incorrect,
        })
    }

    /// Flip a card's revealed flag (tapping the card). Returns the new flag.
    pub fn toggle_reveal(&mut self, card_id: i64) -> Result<bool> {
        if !self.catalog.contains(card_id) {
            return Err(SessionError::UnknownQuestion(card_id));
        }
        let revealed = if self.revealed.remove(&card_id) {
            false
        } else {
            self.revealed.insert(card_id);
            true
        };
        self.progress.set_last_card_id(card_id)?;
        Ok(revealed)
    }

    /// Locate the last viewed card in the rendered list, clearing filters
    /// once if it is not there.
    pub fn go_to_last(&mut self) -> Navigation {
        let Some(card_id) = self.progress.get_last_card_id() else {
            return Navigation::NoLastCard;
        };

        if self.rendered.contains(&card_id) {
            return Navigation::Located {
                card_id,
                filters_cleared: false,
            };
        }

        if self.clear_filters().contains(card_id) {
            tracing::debug!(card_id, "Cleared filters to reach last card");
            Navigation::Located {
                card_id,
                filters_cleared: true,
            }
        } else {
            tracing::debug!(card_id, "Last card no longer in catalog");
            Navigation::NotFound { card_id }
        }
    }

    /// Swap the whole catalog. Topic selection and reveal flags reset.
    pub fn replace_catalog(&mut self, catalog: Catalog) -> FilteredView {
        tracing::info!("Replacing catalog with {} questions", catalog.len());
        self.topics = catalog.topics();
        self.catalog = catalog;
        self.criteria.selected_topics.clear();
        self.revealed.clear();
        self.refresh()
    }

    /// Saved theme, or the system default when none is saved.
    pub fn theme(&self, prefers_dark: bool) -> Theme {
        self.progress
            .get_theme()
            .unwrap_or_else(|| Theme::system_default(prefers_dark))
    }

    pub fn toggle_theme(&mut self, prefers_dark: bool) -> Result<Theme> {
        let theme = self.theme(prefers_dark).toggled();
        self.progress.set_theme(theme)?;
        Ok(theme)
    }
}
