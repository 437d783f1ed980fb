//! Filter engine computing the visible subset of the catalog.

use crate::types::{FilterCriteria, Question};
use serde::Serialize;
use std::collections::BTreeSet;

/// Questions passing all active criteria, in catalog order.
pub fn apply_filters<'a>(
    questions: &'a [Question],
    criteria: &FilterCriteria,
    incorrect: &BTreeSet<i64>,
) -> Vec<&'a Question> {
    let search = criteria.normalized_search();

    questions
        .iter()
        .filter(|item| {
            topic_matches(item, &criteria.selected_topics)
                && text_matches(item, &search)
                && (!criteria.only_incorrect || incorrect.contains(&item.id))
        })
        .collect()
}

fn topic_matches(item: &Question, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || item.topics.iter().any(|t| selected.contains(t))
}

/// `needle` must already be lower-cased.
fn text_matches(item: &Question, needle: &str) -> bool {
    needle.is_empty() || item.question.to_lowercase().contains(needle)
}

/// Filtered result handed to the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub questions: Vec<Question>,
    pub count: usize,
}

impl FilteredView {
    pub fn new(questions: Vec<Question>) -> Self {
        let count = questions.len();
        Self { questions, count }
    }

    /// Whether the "no results" indicator should be shown.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, id: i64) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }

    /// Count label, e.g. "1 question" or "3 questions".
    pub fn count_label(&self) -> String {
        let plural = if self.count == 1 { "" } else { "s" };
        format!("{} question{}", self.count, plural)
    }
}

impl<'a> FromIterator<&'a Question> for FilteredView {
    fn from_iter<I: IntoIterator<Item = &'a Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().cloned().collect())
    }
}
