// src/docs.rs

use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::handlers::{auth, leaderboard, quiz};

#[derive(OpenApi)]
#[openapi(
    info(title = "Daily Quiz API"),
    paths(
        auth::login,
        quiz::quiz_status,
        quiz::start_quiz,
        quiz::submit_quiz,
        leaderboard::get_leaderboard,
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
