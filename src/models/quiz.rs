use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Style;

/// One selectable answer of a quiz question, tagged with the style it
/// votes for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    /// Option key within the question ("A".."D")
    pub key: char,
    pub text: String,
    pub style: Style,
}

/// A style-quiz question with exactly four options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

/// A single `{question, selected option}` pair from a quiz session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizAnswer {
    pub question_id: u32,
    pub selected_option: char,
}

/// Outcome of a completed quiz session.
///
/// Persisted with overwrite semantics: only the latest result is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizResult {
    pub style: Style,
    pub answers: Vec<QuizAnswer>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}
