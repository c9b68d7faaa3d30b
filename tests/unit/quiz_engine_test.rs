//! Unit tests for the QuizEngine public API.
//!
//! These tests drive the engine through its full lifecycle — load, select,
//! submit — against a canned in-process quiz API, and exercise the pure
//! render and grading functions directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use histoday::services::quiz_api::{QuizApiTrait, QuizParams};
use histoday::services::quiz_engine::{
    format_quiz_area, grade_quiz, render_quiz, QuizEngine, QuizEngineTrait, LOAD_FAILED_NOTICE,
    NO_QUESTIONS_NOTICE, SUBMIT_LABEL,
};
use histoday::types::errors::QuizError;
use histoday::types::quiz::{QuizNode, QuizQuestion, QuizResponse, QuizStatus};

/// What the canned API should serve.
enum Canned {
    Questions(Vec<QuizQuestion>),
    Empty,
    Fail(u16),
}

/// In-process quiz API double that records the parameters of the last fetch.
struct MockQuizApi {
    canned: Canned,
    captured: Rc<RefCell<Option<QuizParams>>>,
}

impl QuizApiTrait for MockQuizApi {
    fn fetch_quiz(&self, params: &QuizParams) -> Result<QuizResponse, QuizError> {
        *self.captured.borrow_mut() = Some(params.clone());
        match &self.canned {
            Canned::Questions(questions) => Ok(QuizResponse {
                count: questions.len(),
                questions: questions.clone(),
            }),
            Canned::Empty => Ok(QuizResponse::default()),
            Canned::Fail(status) => Err(QuizError::Status(*status)),
        }
    }
}

fn question(id: &str, text: &str, options: &[i64], correct: i64) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: text.to_string(),
        description: None,
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
    }
}

fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        question("q1", "In which year did this happen? — A", &[1901, 1910, 1923], 1901),
        question("q2", "In which year did this happen? — B", &[1969, 1977, 1981], 1977),
        question("q3", "In which year did this happen? — C", &[1492, 1592, 1692], 1492),
    ]
}

/// Helper: an engine over the canned API plus a handle on captured params.
fn engine_with(canned: Canned) -> (QuizEngine, Rc<RefCell<Option<QuizParams>>>) {
    let captured = Rc::new(RefCell::new(None));
    let api = MockQuizApi {
        canned,
        captured: captured.clone(),
    };
    (QuizEngine::new(Box::new(api)), captured)
}

#[test]
fn test_new_engine_is_idle_and_blank() {
    let (engine, _) = engine_with(Canned::Empty);
    assert_eq!(*engine.status(), QuizStatus::Idle);
    assert!(engine.view().is_empty());
}

/// A successful load renders one card per question plus a single submit
/// action, in payload order.
#[test]
fn test_load_renders_questions_in_order() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));

    let status = engine.load_quiz(None, 5);
    assert_eq!(status, QuizStatus::Rendered);

    let view = engine.view();
    assert_eq!(view.len(), 4);
    match (&view[0], &view[3]) {
        (QuizNode::Question(card), QuizNode::SubmitButton(label)) => {
            assert_eq!(card.title, "1. In which year did this happen? — A");
            assert_eq!(card.description, "");
            assert_eq!(card.choices.len(), 3);
            assert_eq!(card.choices[0].group, "q1");
            assert_eq!(card.choices[0].value, "1901");
            assert_eq!(label, SUBMIT_LABEL);
        }
        other => panic!("unexpected view shape: {:?}", other),
    }
}

/// Day key and count reach the API as request parameters.
#[test]
fn test_load_passes_day_key_and_count() {
    let (mut engine, captured) = engine_with(Canned::Empty);

    engine.load_quiz(Some("03-07"), 7);
    assert_eq!(
        captured.borrow().as_ref().unwrap(),
        &QuizParams::new(Some("03-07"), 7)
    );

    engine.load_quiz(None, 5);
    assert_eq!(
        captured.borrow().as_ref().unwrap(),
        &QuizParams::new(None, 5)
    );
}

/// A failed fetch shows exactly the fixed failure notice and discards any
/// partial data.
#[test]
fn test_load_failure_shows_fixed_notice() {
    let (mut engine, _) = engine_with(Canned::Fail(502));

    let status = engine.load_quiz(Some("03-07"), 5);
    assert_eq!(status, QuizStatus::Failed);
    assert!(engine.questions().is_empty());
    assert_eq!(
        engine.view(),
        vec![QuizNode::Notice(LOAD_FAILED_NOTICE.to_string())]
    );
}

/// An empty round shows the fixed notice and creates no selectable inputs.
#[test]
fn test_empty_round_shows_notice_and_no_choices() {
    let (mut engine, _) = engine_with(Canned::Empty);

    engine.load_quiz(None, 5);
    let view = engine.view();
    assert_eq!(view, vec![QuizNode::Notice(NO_QUESTIONS_NOTICE.to_string())]);

    let html = engine.format_for_display();
    assert!(html.contains(NO_QUESTIONS_NOTICE));
    assert!(!html.contains("type=\"radio\""));
}

/// Selecting twice within a group replaces the previous choice; exactly one
/// option per question can be selected.
#[test]
fn test_select_is_exclusive_within_group() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));
    engine.load_quiz(None, 5);

    assert!(engine.select("q1", "1910"));
    assert!(engine.select("q1", "1901"));

    let selected: Vec<_> = match &engine.view()[0] {
        QuizNode::Question(card) => card
            .choices
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value.clone())
            .collect(),
        other => panic!("expected a question card, got {:?}", other),
    };
    assert_eq!(selected, vec!["1901".to_string()]);
}

/// Selections are only possible for inputs that were actually rendered.
#[test]
fn test_select_rejects_unknown_targets() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));

    // Nothing rendered yet.
    assert!(!engine.select("q1", "1901"));

    engine.load_quiz(None, 5);
    assert!(!engine.select("q9", "1901"));
    assert!(!engine.select("q1", "1800"));
}

/// All-correct selections score full marks; submitting again appends a
/// second card instead of replacing the first.
#[test]
fn test_submit_scores_and_appends_cards() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));
    engine.load_quiz(None, 5);

    engine.select("q1", "1901");
    engine.select("q2", "1977");
    engine.select("q3", "1492");

    let card = engine.submit().unwrap();
    assert_eq!(card.score, 3);
    assert_eq!(card.total, 3);
    assert_eq!(*engine.status(), QuizStatus::Graded);

    let again = engine.submit().unwrap();
    assert_eq!(again.score, 3);

    let results = engine
        .view()
        .into_iter()
        .filter(|n| matches!(n, QuizNode::Result(_)))
        .count();
    assert_eq!(results, 2);
}

/// No selections score zero of the total.
#[test]
fn test_submit_with_no_selections_scores_zero() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));
    engine.load_quiz(None, 5);

    let card = engine.submit().unwrap();
    assert_eq!(card.score, 0);
    assert_eq!(card.total, 3);
}

/// Grading is only possible after render completes.
#[test]
fn test_submit_before_render_is_rejected() {
    let (mut engine, _) = engine_with(Canned::Fail(500));
    assert_eq!(engine.submit(), None);

    engine.load_quiz(None, 5);
    assert_eq!(*engine.status(), QuizStatus::Failed);
    assert_eq!(engine.submit(), None);
}

/// Reloading discards the previous round's selections and score cards.
#[test]
fn test_reload_discards_previous_round() {
    let (mut engine, _) = engine_with(Canned::Questions(sample_questions()));
    engine.load_quiz(None, 5);
    engine.select("q1", "1901");
    engine.submit().unwrap();

    engine.load_quiz(None, 5);
    assert_eq!(*engine.status(), QuizStatus::Rendered);
    assert!(engine
        .view()
        .iter()
        .all(|n| !matches!(n, QuizNode::Result(_))));

    let card = engine.submit().unwrap();
    assert_eq!(card.score, 0);
}

/// grade_quiz ignores selections that do not parse as integers.
#[test]
fn test_grade_quiz_unparsable_selection_scores_zero() {
    let questions = vec![QuizQuestion {
        id: "q1".to_string(),
        question: "Pick one".to_string(),
        description: None,
        options: vec!["first".to_string(), "second".to_string()],
        correct: 1,
    }];
    let mut selections = HashMap::new();
    selections.insert("q1".to_string(), "first".to_string());

    assert_eq!(grade_quiz(&questions, &selections), 0);
}

/// grade_quiz only counts exact matches against each question's own answer.
#[test]
fn test_grade_quiz_partial_score() {
    let questions = sample_questions();
    let mut selections = HashMap::new();
    selections.insert("q1".to_string(), "1901".to_string());
    selections.insert("q2".to_string(), "1969".to_string());

    assert_eq!(grade_quiz(&questions, &selections), 1);
}

/// render_quiz is pure: selections project into choice state without
/// touching the inputs.
#[test]
fn test_render_quiz_projects_selections() {
    let questions = sample_questions();
    let mut selections = HashMap::new();
    selections.insert("q2".to_string(), "1977".to_string());

    let nodes = render_quiz(&questions, &selections);
    match &nodes[1] {
        QuizNode::Question(card) => {
            assert!(card.choices.iter().any(|c| c.selected && c.value == "1977"));
            assert_eq!(card.choices.iter().filter(|c| c.selected).count(), 1);
        }
        other => panic!("expected a question card, got {:?}", other),
    }
    match &nodes[0] {
        QuizNode::Question(card) => {
            assert!(card.choices.iter().all(|c| !c.selected));
        }
        other => panic!("expected a question card, got {:?}", other),
    }
}

/// The formatted quiz area is rooted at the fixed container id, names radio
/// groups by question id, and escapes markup in question text.
#[test]
fn test_format_quiz_area_html() {
    let questions = vec![QuizQuestion {
        id: "q1".to_string(),
        question: "1 < 2 & 3 > 2?".to_string(),
        description: Some("Comparison <basics>".to_string()),
        options: vec!["1".to_string(), "2".to_string()],
        correct: 1,
    }];
    let mut selections = HashMap::new();
    selections.insert("q1".to_string(), "1".to_string());

    let html = format_quiz_area(&render_quiz(&questions, &selections));
    assert!(html.starts_with("<div id=\"quiz-area\">"));
    assert!(html.contains("name=\"q1\""));
    assert!(html.contains("value=\"1\" checked"));
    assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2?"));
    assert!(html.contains("Comparison &lt;basics&gt;"));
    assert!(html.contains(SUBMIT_LABEL));
}
