//! Question catalog and validated JSON import.
//!
//! # Format
//! ```json
//! [
//!   { "id": 1, "question": "What is Rust?", "answers": ["A language", "A fungus"],
//!     "correctIndex": 0, "topics": ["Basics"] }
//! ]
//! ```
//! `topics` may be omitted. Items without an `id` are numbered after the
//! highest explicit id in the file.

use crate::error::ImportError;
use crate::types::Question;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

type Result<T> = std::result::Result<T, ImportError>;

/// Ordered, read-mostly list of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Wrap questions without validation. The caller guarantees unique ids and
    /// `correct_index < answers.len()` for every question; use
    /// [`Catalog::from_json`] for untrusted input.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse and validate a JSON array of questions. All-or-nothing.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let items = value.as_array().ok_or(ImportError::NotAnArray)?;

        let drafts = items
            .iter()
            .enumerate()
            .map(|(index, item)| Draft::from_value(index, item))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        for draft in &drafts {
            if let Some(id) = draft.id {
                if !seen.insert(id) {
                    return Err(ImportError::DuplicateId {
                        index: draft.index,
                        id,
                    });
                }
            }
        }

        // Missing ids continue after the highest explicit one; `None` once exhausted.
        let mut next_id = seen.iter().copied().max().unwrap_or(0).checked_add(1);
        let mut questions = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = match draft.id {
                Some(id) => id,
                None => {
                    let id = next_id.ok_or_else(|| ImportError::InvalidItem {
                        index: draft.index,
                        reason: "no id available".to_string(),
                    })?;
                    next_id = id.checked_add(1);
                    id
                }
            };
            questions.push(Question {
                id,
                question: draft.question,
                answers: draft.answers,
                correct_index: draft.correct_index,
                topics: draft.topics,
            });
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Sorted topic vocabulary of this catalog.
    pub fn topics(&self) -> Vec<String> {
        unique_topics(&self.questions)
    }
}

/// Distinct topic labels, sorted for stable display.
pub fn unique_topics(questions: &[Question]) -> Vec<String> {
    let distinct: BTreeSet<&str> = questions
        .iter()
        .flat_map(|q| q.topics.iter().map(String::as_str))
        .collect();

    let mut topics: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    topics.sort_by(|a, b| collate(a, b));
    topics
}

/// Case-insensitive ordering, lower case first on ties.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// A validated item that may still lack an id.
struct Draft {
    index: usize,
    id: Option<i64>,
    question: String,
    answers: Vec<String>,
    correct_index: usize,
    topics: Vec<String>,
}

impl Draft {
    fn from_value(index: usize, value: &Value) -> Result<Self> {
        let invalid = |reason: &str| ImportError::InvalidItem {
            index,
            reason: reason.to_string(),
        };

        let obj: &Map<String, Value> = value.as_object().ok_or_else(|| invalid("not an object"))?;

        let question = obj
            .get("question")
            .and_then(Value::as_str)
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| invalid("missing question text"))?
            .to_string();

        let answers = obj
            .get("answers")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("answers must be an array"))?
            .iter()
            .map(|a| a.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid("answers must be strings"))?;
        if answers.is_empty() {
            return Err(invalid("answers must not be empty"));
        }

        let correct_index = obj
            .get("correctIndex")
            .and_then(Value::as_u64)
            .ok_or_else(|| invalid("correctIndex must be a non-negative integer"))?
            as usize;
        if correct_index >= answers.len() {
            return Err(invalid("correctIndex out of range"));
        }

        let id = match obj.get("id") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_i64().ok_or_else(|| invalid("id must be an integer"))?),
        };

        let topics = obj
            .get("topics")
            .and_then(Value::as_array)
            .map(|ts| {
                ts.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            index,
            id,
            question,
            answers,
            correct_index,
            topics,
        })
    }
}
