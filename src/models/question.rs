// src/models/question.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Option keys in column order of the question bank.
pub const OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// A raw row of the question bank, exactly as the record store holds it.
/// Any cell may be missing.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct QuestionRow {
    pub id: i64,
    pub question: Option<String>,
    #[sqlx(rename = "option_a")]
    pub a: Option<String>,
    #[sqlx(rename = "option_b")]
    pub b: Option<String>,
    #[sqlx(rename = "option_c")]
    pub c: Option<String>,
    #[sqlx(rename = "option_d")]
    pub d: Option<String>,
    /// Comma-delimited option keys, e.g. "A,C".
    pub correct: Option<String>,
}

impl QuestionRow {
    /// Option cells paired with their keys, in column order.
    pub fn option_cells(&self) -> [(&'static str, Option<&str>); 4] {
        [
            (OPTION_KEYS[0], self.a.as_deref()),
            (OPTION_KEYS[1], self.b.as_deref()),
            (OPTION_KEYS[2], self.c.as_deref()),
            (OPTION_KEYS[3], self.d.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnswerOption {
    pub key: String,
    pub text: String,
}

/// A question that survived loading: non-blank text, at least one option,
/// every option trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    /// Always four entries (A-D); empty options keep an empty `text`.
    pub options: Vec<AnswerOption>,
    pub correct: BTreeSet<String>,
}

/// DTO for sending a question to the client (excludes the correct answers).
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicQuestion {
    pub id: i64,
    pub number: usize,
    pub question: String,
    /// Non-empty options in display order.
    pub options: Vec<AnswerOption>,
}
