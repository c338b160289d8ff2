// src/handlers/leaderboard.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    cache::ReadCache, error::AppError, models::leaderboard::LeaderboardEntry,
    quiz::leaderboard::build_leaderboard,
};

/// Every user who has submitted a quiz, ranked by average percentage.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses((status = 200, description = "Ranked users", body = [LeaderboardEntry]))
)]
pub async fn get_leaderboard(State(cache): State<ReadCache>) -> Result<impl IntoResponse, AppError> {
    let results = cache.results().await?;
    Ok(Json(build_leaderboard(&results)))
}
