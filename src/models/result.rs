// src/models/result.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::question::PublicQuestion;

/// Timestamp layout of the `date` column.
pub const RESULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents one row of the results table.
/// One row is appended per submitted quiz.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ResultRecord {
    pub email: String,
    pub score: i64,
    pub total: i64,
    pub percentage: f64,
    /// Local time formatted with `RESULT_DATE_FORMAT`.
    pub date: String,
    /// Id of the started quiz this result closes. Each id is recorded once.
    #[serde(default)]
    pub quiz_id: Option<String>,
}

/// DTO for returning a started quiz.
#[derive(Debug, Serialize, ToSchema)]
pub struct StartQuizResponse {
    pub questions: Vec<PublicQuestion>,
    pub quiz_token: String,
    pub expires_in: u64, // seconds
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitQuizRequest {
    /// The token received from `start_quiz`.
    pub quiz_token: String,

    /// User's answers map.
    /// Key: Question ID
    /// Value: Selected option keys (e.g. ["A", "C"])
    pub answers: HashMap<i64, Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitQuizResponse {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    /// 1-based position on the leaderboard after this submission.
    pub rank: usize,
    pub attempts_today: usize,
    pub max_attempts: usize,
    pub message: String,
}
