// src/models/leaderboard.rs

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregated statistics of one user across all recorded results.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    /// Grouping key; never exposed.
    #[serde(skip)]
    pub email: String,
    pub username: String,
    /// Mean percentage, rounded to two decimals.
    pub avg_score: f64,
    pub quizzes: usize,
    pub best_score: f64,
}
