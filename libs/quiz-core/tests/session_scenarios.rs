//! End-to-end scenarios over a quiz session backed by the in-memory store.

use pretty_assertions::assert_eq;
use quiz_core::store::{INCORRECT_KEY, LAST_CARD_KEY};
use quiz_core::{
    unique_topics, Catalog, FilterCriteria, KeyValueStore, MemoryStore, Navigation, QuizSession,
};
use std::collections::BTreeSet;

const CATALOG: &str = r#"[
    {"id": 1, "question": "Which keyword declares a constant?", "answers": ["let", "const"], "correctIndex": 1, "topics": ["A"]},
    {"id": 2, "question": "What does Box allocate on?", "answers": ["Stack", "Heap"], "correctIndex": 1, "topics": ["B"]},
    {"id": 7, "question": "What does Rc count?", "answers": ["References", "Lines"], "correctIndex": 0, "topics": ["A", "B"]}
]"#;

fn session_with(store: MemoryStore) -> QuizSession<MemoryStore> {
    let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
    QuizSession::new(catalog, store)
}

fn session() -> QuizSession<MemoryStore> {
    session_with(MemoryStore::new())
}

fn visible_ids(session: &QuizSession<MemoryStore>) -> Vec<i64> {
    session.visible().questions.iter().map(|q| q.id).collect()
}

#[test]
fn topics_are_unique_and_sorted() {
    let s = session();
    assert_eq!(s.topics(), &["A".to_string(), "B".to_string()]);
    assert_eq!(unique_topics(s.catalog().questions()), vec!["A", "B"]);
}

#[test]
fn default_filters_show_full_catalog() {
    let s = session();
    assert_eq!(visible_ids(&s), vec![1, 2, 7]);
    assert_eq!(s.visible().count_label(), "3 questions");
}

#[test]
fn topic_filter_returns_matching_in_order() {
    let mut s = session();
    let view = s.change_filter(FilterCriteria {
        selected_topics: ["B".to_string()].into_iter().collect(),
        ..Default::default()
    });
    let ids: Vec<i64> = view.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![2, 7]);
}

#[test]
fn repeated_correct_answer_is_idempotent() {
    let mut s = session();
    s.submit_answer(1, 1).unwrap();
    assert!(!s.progress().is_incorrect(1));
    s.submit_answer(1, 1).unwrap();
    assert!(!s.progress().is_incorrect(1));
    assert!(s.progress().get_incorrect_set().is_empty());
}

#[test]
fn last_submission_wins() {
    let mut s = session();
    s.submit_answer(2, 1).unwrap();
    s.submit_answer(2, 0).unwrap();
    assert!(s.progress().is_incorrect(2));

    s.submit_answer(7, 1).unwrap();
    s.submit_answer(7, 0).unwrap();
    assert!(!s.progress().is_incorrect(7));
}

#[test]
fn only_incorrect_tracks_answers_after_refilter() {
    let mut s = session();
    s.submit_answer(1, 0).unwrap();
    s.submit_answer(7, 1).unwrap();

    let view = s.change_filter(FilterCriteria {
        only_incorrect: true,
        ..Default::default()
    });
    assert_eq!(view.count, 2);

    s.submit_answer(7, 0).unwrap();
    assert_eq!(visible_ids(&s), vec![1]);
}

#[test]
fn go_to_last_clears_filters_that_hide_card() {
    let mut s = session();
    s.progress_mut().set_last_card_id(7).unwrap();
    s.change_filter(FilterCriteria {
        search_text: "constant".to_string(),
        ..Default::default()
    });
    assert!(!s.visible().contains(7));

    assert_eq!(
        s.go_to_last(),
        Navigation::Located {
            card_id: 7,
            filters_cleared: true
        }
    );
    assert!(s.criteria().is_default());
    assert!(s.visible().contains(7));
}

#[test]
fn malformed_incorrect_set_degrades_to_empty() {
    let s = session_with(MemoryStore::with_entry(INCORRECT_KEY, "definitely not json"));
    assert!(s.progress().get_incorrect_set().is_empty());
}

#[test]
fn incorrect_set_roundtrip() {
    let mut s = session();
    let ids: BTreeSet<i64> = [2, 7, 40].into_iter().collect();
    s.progress_mut().save_incorrect_set(&ids).unwrap();
    assert_eq!(s.progress().get_incorrect_set(), ids);
}

#[test]
fn state_survives_a_new_session() {
    let mut s = session();
    s.submit_answer(2, 0).unwrap();
    let store = s.progress_mut().backend_mut().clone();

    let restored = session_with(store);
    assert!(restored.progress().is_incorrect(2));
    assert_eq!(restored.progress().get_last_card_id(), Some(2));
    assert_eq!(
        restored.progress().backend().get(LAST_CARD_KEY).unwrap().as_deref(),
        Some("2")
    );
}

#[test]
fn rejected_import_keeps_previous_catalog() {
    let mut s = session();
    let bad = r#"[{"id": 1, "question": "ok", "answers": ["a"], "correctIndex": 0},
                  {"id": 2, "question": "", "answers": ["a"], "correctIndex": 0}]"#;
    let err = Catalog::from_json(bad).unwrap_err();
    assert_eq!(err.to_string(), "invalid item at index 1: missing question text");
    assert_eq!(visible_ids(&s), vec![1, 2, 7]);

    let good = r#"[{"question": "New", "answers": ["a"], "correctIndex": 0, "topics": ["N"]}]"#;
    let view = s.replace_catalog(Catalog::from_json(good).unwrap());
    assert_eq!(view.count, 1);
    assert_eq!(s.topics(), &["N".to_string()]);
}

#[test]
fn go_to_last_finds_stale_card_without_clearing_filters() {
    let mut s = session();
    s.submit_answer(7, 1).unwrap();
    let view = s.change_filter(FilterCriteria {
        selected_topics: ["B".to_string()].into_iter().collect(),
        only_incorrect: true,
        ..Default::default()
    });
    assert_eq!(view.count, 1);

    // The correct answer removes 7 from the set, but the list is not redrawn.
    s.submit_answer(7, 0).unwrap();
    assert_eq!(
        s.go_to_last(),
        Navigation::Located {
            card_id: 7,
            filters_cleared: false
        }
    );
    assert!(s.criteria().only_incorrect);
    assert_eq!(s.rendered_ids(), &[7]);
}

#[test]
fn strict_topic_subset_still_matches() {
    let mut s = session();
    let view = s.change_filter(FilterCriteria {
        selected_topics: ["A".to_string()].into_iter().collect(),
        ..Default::default()
    });
    assert!(view.contains(7));
}
