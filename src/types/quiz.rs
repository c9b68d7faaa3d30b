use serde::{Deserialize, Deserializer, Serialize};

/// One multiple-choice question as served by the quiz API.
///
/// The API serves `options` as JSON numbers (years); the page displays them
/// as text, so they are normalized to strings on deserialization. `correct`
/// is the correct option's integer value, not an index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "options_as_strings")]
    pub options: Vec<String>,
    pub correct: i64,
}

/// One round of quiz questions, produced entirely by the external API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// Accepts option labels as either JSON strings or numbers.
fn options_as_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    raw.into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "option label must be a string or number, got {}",
                other
            ))),
        })
        .collect()
}

/// Lifecycle of the quiz display area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStatus {
    Idle,
    Loading,
    Rendered,
    Failed,
    Graded,
}

/// A node of the quiz display area's render tree.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizNode {
    /// A fixed message shown instead of questions (load failure, empty quiz).
    Notice(String),
    Question(QuestionCard),
    SubmitButton(String),
    Result(ResultCard),
}

/// A rendered question: numbered title, description line, and one
/// exclusive-choice input per option. The correct value rides along on the
/// card so grading can read it back without the original payload.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub choices: Vec<Choice>,
    pub correct: i64,
}

/// One selectable option. `group` ties the choice to its question so exactly
/// one option per question can be selected; `value` is the option's literal
/// text. Choices are never disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub group: String,
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The "score / total" card appended after grading.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub score: usize,
    pub total: usize,
    pub hint: String,
}
