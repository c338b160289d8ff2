// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginRequest, LoginResponse},
    quiz::username::format_username,
    utils::jwt::sign_jwt,
};

/// Logs a user in with their company email.
///
/// The email is trimmed and lower-cased, then must be well formed and belong
/// to the allowed domain. Returns a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = LoginResponse),
        (status = 400, description = "Malformed email"),
        (status = 403, description = "Email outside the company domain")
    )
)]
pub async fn login(
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = LoginRequest {
        email: payload.email.trim().to_lowercase(),
    };

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    if !payload.email.ends_with(&config.allowed_domain) {
        tracing::info!("Rejected login outside {}", config.allowed_domain);
        return Err(AppError::Forbidden(format!(
            "Only {} emails allowed",
            config.allowed_domain
        )));
    }

    let token = sign_jwt(&payload.email, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        username: format_username(&payload.email),
    }))
}
