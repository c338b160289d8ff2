// src/models/user.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for email login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        email(message = "A valid email address is required."),
        length(max = 254)
    )]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub username: String,
}

/// Quota status of the current user.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizStatusResponse {
    pub username: String,
    pub attempts_today: usize,
    pub max_attempts: usize,
    pub remaining: usize,
    pub can_start: bool,
}
