//! Core types for the quiz flashcards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Question {
    /// Whether the option at `index` is the correct one.
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// The text of the correct answer.
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_index).map(String::as_str)
    }
}

/// Active filter criteria. The default matches every question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub selected_topics: BTreeSet<String>,
    pub search_text: String,
    pub only_incorrect: bool,
}

impl FilterCriteria {
    /// True when no criterion is active.
    pub fn is_default(&self) -> bool {
        self.selected_topics.is_empty() && self.normalized_search().is_empty() && !self.only_incorrect
    }

    /// Search text as matched: trimmed and lower-cased.
    pub fn normalized_search(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse from the stored string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme used when nothing has been saved yet.
    pub fn system_default(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}
