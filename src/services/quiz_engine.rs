//! Quiz Engine.
//!
//! Drives the quiz display area through its lifecycle: fetch a round of
//! questions through the API port, project questions and selections into a
//! render tree, and grade selections on submit.

use std::collections::HashMap;

use crate::services::quiz_api::{QuizApiTrait, QuizParams};
use crate::types::quiz::{
    Choice, QuestionCard, QuizNode, QuizQuestion, QuizStatus, ResultCard,
};

/// Element id of the quiz display container in formatted output.
pub const QUIZ_AREA_ID: &str = "quiz-area";
/// Notice shown when the quiz cannot be fetched.
pub const LOAD_FAILED_NOTICE: &str = "Could not load quiz.";
/// Notice shown when the API returns an empty round.
pub const NO_QUESTIONS_NOTICE: &str = "No questions found.";
/// Label of the grading action.
pub const SUBMIT_LABEL: &str = "Submit Quiz";
/// Static hint appended under every score card.
pub const RESULT_HINT: &str = "Reload the page for a fresh set of questions.";

/// Trait defining the quiz engine operations.
pub trait QuizEngineTrait {
    fn load_quiz(&mut self, day_key: Option<&str>, count: u32) -> QuizStatus;
    fn select(&mut self, question_id: &str, value: &str) -> bool;
    fn submit(&mut self) -> Option<ResultCard>;
    fn status(&self) -> &QuizStatus;
    fn questions(&self) -> &[QuizQuestion];
    fn view(&self) -> Vec<QuizNode>;
}

/// Quiz engine over an injected API port.
///
/// Selections are keyed by question id and hold the selected option's
/// literal text; the render tree is derived from state on demand.
pub struct QuizEngine {
    api: Box<dyn QuizApiTrait>,
    status: QuizStatus,
    questions: Vec<QuizQuestion>,
    selections: HashMap<String, String>,
    results: Vec<ResultCard>,
}

impl QuizEngine {
    pub fn new(api: Box<dyn QuizApiTrait>) -> Self {
        Self {
            api,
            status: QuizStatus::Idle,
            questions: Vec::new(),
            selections: HashMap::new(),
            results: Vec::new(),
        }
    }

    /// Formats the current view as the quiz area's HTML fragment.
    pub fn format_for_display(&self) -> String {
        format_quiz_area(&self.view())
    }

    fn rendered(&self) -> bool {
        matches!(self.status, QuizStatus::Rendered | QuizStatus::Graded)
    }
}

impl QuizEngineTrait for QuizEngine {
    /// Fetches one round of questions, scoped to `day_key` when given.
    ///
    /// The fetch is the engine's only suspension point: a single blocking
    /// attempt with no retry. Failure discards any previous round and leaves
    /// the view showing the fixed failure notice; success renders the
    /// returned questions (possibly none) with fresh selections.
    fn load_quiz(&mut self, day_key: Option<&str>, count: u32) -> QuizStatus {
        self.status = QuizStatus::Loading;
        self.questions.clear();
        self.selections.clear();
        self.results.clear();

        let params = QuizParams::new(day_key, count);
        self.status = match self.api.fetch_quiz(&params) {
            Ok(response) => {
                self.questions = response.questions;
                QuizStatus::Rendered
            }
            Err(_) => QuizStatus::Failed,
        };
        self.status.clone()
    }

    /// Records a selection. Only one option per question can be selected;
    /// selecting again within a group replaces the group's previous choice.
    ///
    /// Returns false without change when no quiz is rendered or the
    /// (question, option) pair was never rendered.
    fn select(&mut self, question_id: &str, value: &str) -> bool {
        if !self.rendered() {
            return false;
        }
        let exists = self
            .questions
            .iter()
            .any(|q| q.id == question_id && q.options.iter().any(|o| o == value));
        if !exists {
            return false;
        }
        self.selections
            .insert(question_id.to_string(), value.to_string());
        true
    }

    /// Grades the current selections and appends a score card.
    ///
    /// Only possible after render completes; repeated submission appends
    /// another card rather than replacing the prior one.
    fn submit(&mut self) -> Option<ResultCard> {
        if !self.rendered() {
            return None;
        }
        let card = ResultCard {
            score: grade_quiz(&self.questions, &self.selections),
            total: self.questions.len(),
            hint: RESULT_HINT.to_string(),
        };
        self.results.push(card.clone());
        self.status = QuizStatus::Graded;
        Some(card)
    }

    fn status(&self) -> &QuizStatus {
        &self.status
    }

    fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Derives the display area's render tree from the current state.
    ///
    /// Idle and Loading show nothing, Failed shows the failure notice, and
    /// a rendered round shows its questions followed by any score cards.
    fn view(&self) -> Vec<QuizNode> {
        match self.status {
            QuizStatus::Idle | QuizStatus::Loading => Vec::new(),
            QuizStatus::Failed => vec![QuizNode::Notice(LOAD_FAILED_NOTICE.to_string())],
            QuizStatus::Rendered | QuizStatus::Graded => {
                let mut nodes = render_quiz(&self.questions, &self.selections);
                nodes.extend(self.results.iter().cloned().map(QuizNode::Result));
                nodes
            }
        }
    }
}

/// Projects questions and current selections into the display area's render
/// tree.
///
/// An empty round yields exactly the fixed "no questions" notice. Otherwise
/// each question becomes a card with a 1-based numbered title, its
/// description line (empty string when none), and one choice per option in
/// payload order, followed by a single submit node.
pub fn render_quiz(
    questions: &[QuizQuestion],
    selections: &HashMap<String, String>,
) -> Vec<QuizNode> {
    if questions.is_empty() {
        return vec![QuizNode::Notice(NO_QUESTIONS_NOTICE.to_string())];
    }

    let mut nodes = Vec::with_capacity(questions.len() + 1);
    for (index, question) in questions.iter().enumerate() {
        let selected = selections.get(&question.id);
        let choices = question
            .options
            .iter()
            .map(|option| Choice {
                group: question.id.clone(),
                value: option.clone(),
                label: option.clone(),
                selected: selected.map(|s| s == option).unwrap_or(false),
            })
            .collect();
        nodes.push(QuizNode::Question(QuestionCard {
            id: question.id.clone(),
            title: format!("{}. {}", index + 1, question.question),
            description: question.description.clone().unwrap_or_default(),
            choices,
            correct: question.correct,
        }));
    }
    nodes.push(QuizNode::SubmitButton(SUBMIT_LABEL.to_string()));
    nodes
}

/// Scores one point per question whose selection, parsed as an integer,
/// equals the question's correct value. Missing, wrong, and unparsable
/// selections score zero.
pub fn grade_quiz(questions: &[QuizQuestion], selections: &HashMap<String, String>) -> usize {
    questions
        .iter()
        .filter(|question| {
            selections
                .get(&question.id)
                .and_then(|value| value.trim().parse::<i64>().ok())
                .map(|value| value == question.correct)
                .unwrap_or(false)
        })
        .count()
}

/// Formats a render tree as the quiz area's HTML fragment.
pub fn format_quiz_area(nodes: &[QuizNode]) -> String {
    let mut html = format!("<div id=\"{}\">\n", QUIZ_AREA_ID);
    for node in nodes {
        match node {
            QuizNode::Notice(text) => {
                html.push_str(&format!(
                    "  <p class=\"notice\">{}</p>\n",
                    escape_html(text)
                ));
            }
            QuizNode::Question(card) => {
                html.push_str(&format!(
                    "  <fieldset data-question=\"{}\">\n    <h3>{}</h3>\n    <p class=\"description\">{}</p>\n",
                    escape_html(&card.id),
                    escape_html(&card.title),
                    escape_html(&card.description)
                ));
                for choice in &card.choices {
                    let checked = if choice.selected { " checked" } else { "" };
                    html.push_str(&format!(
                        "    <label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>\n",
                        escape_html(&choice.group),
                        escape_html(&choice.value),
                        checked,
                        escape_html(&choice.label)
                    ));
                }
                html.push_str("  </fieldset>\n");
            }
            QuizNode::SubmitButton(label) => {
                html.push_str(&format!(
                    "  <button type=\"button\">{}</button>\n",
                    escape_html(label)
                ));
            }
            QuizNode::Result(card) => {
                html.push_str(&format!(
                    "  <div class=\"result\">{} / {}<br><small>{}</small></div>\n",
                    card.score,
                    card.total,
                    escape_html(&card.hint)
                ));
            }
        }
    }
    html.push_str("</div>\n");
    html
}

/// Escapes the HTML-significant characters of `text`.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
