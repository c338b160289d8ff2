// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::AppError};

/// Audience of login tokens.
pub const SESSION_AUDIENCE: &str = "session";
/// Audience of started-quiz tokens.
pub const QUIZ_AUDIENCE: &str = "quiz";

/// JWT Claims structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    /// Subject - the user's normalized email.
    pub sub: String,
    /// Token purpose, `SESSION_AUDIENCE` or `QUIZ_AUDIENCE`.
    pub aud: String,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
    /// Id of a started quiz; a quiz is closed once a result carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    /// Question ids of a started quiz; empty for session tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<i64>,
}

fn expires_at(expiration_seconds: u64) -> Result<usize, AppError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs();
    Ok((now + expiration_seconds) as usize)
}

fn sign(claims: &Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Signs a session token for a logged-in email.
pub fn sign_jwt(email: &str, secret: &str, expiration_seconds: u64) -> Result<String, AppError> {
    let claims = Claims {
        sub: email.to_owned(),
        aud: SESSION_AUDIENCE.to_owned(),
        exp: expires_at(expiration_seconds)?,
        jti: None,
        questions: Vec::new(),
    };
    sign(&claims, secret)
}

/// Signs the token that marks a quiz as in progress for `email`.
/// Every call mints a fresh quiz id.
pub fn sign_quiz_token(
    email: &str,
    questions: Vec<i64>,
    secret: &str,
    expiration_seconds: u64,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: email.to_owned(),
        aud: QUIZ_AUDIENCE.to_owned(),
        exp: expires_at(expiration_seconds)?,
        jti: Some(uuid::Uuid::new_v4().to_string()),
        questions,
    };
    sign(&claims, secret)
}

/// Verifies and decodes a JWT string issued for `audience`.
///
/// Returns the `Claims` if valid, otherwise returns an `AppError`.
pub fn verify_jwt(token: &str, secret: &str, audience: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.set_audience(&[audience]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::AuthError("Invalid token".to_string()))?;

    Ok(token_data.claims)
}

/// Axum Middleware: Authentication.
///
/// Intercepts requests, validates the 'Authorization: Bearer <token>' header.
/// If valid, injects `Claims` into the request extensions for handlers to use.
/// If invalid, returns 401 Unauthorized.
pub async fn auth_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => return Err(StatusCode::UNAUTHORIZED),
    };

    match verify_jwt(token, &config.jwt_secret, SESSION_AUDIENCE) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit_test_secret";

    #[test]
    fn test_session_token_round_trip() {
        let token = sign_jwt("ana@drivesales.com", SECRET, 60).unwrap();
        let claims = verify_jwt(&token, SECRET, SESSION_AUDIENCE).unwrap();
        assert_eq!(claims.sub, "ana@drivesales.com");
        assert!(claims.questions.is_empty());
        assert!(claims.jti.is_none());
    }

    #[test]
    fn test_quiz_token_is_not_a_session_token() {
        let token = sign_quiz_token("ana@drivesales.com", vec![3, 1], SECRET, 60).unwrap();
        assert!(verify_jwt(&token, SECRET, SESSION_AUDIENCE).is_err());

        let claims = verify_jwt(&token, SECRET, QUIZ_AUDIENCE).unwrap();
        assert_eq!(claims.questions, vec![3, 1]);
        assert!(claims.jti.is_some());
    }

    #[test]
    fn test_each_quiz_token_gets_its_own_id() {
        let first = sign_quiz_token("ana@drivesales.com", vec![1], SECRET, 60).unwrap();
        let second = sign_quiz_token("ana@drivesales.com", vec![1], SECRET, 60).unwrap();
        let first = verify_jwt(&first, SECRET, QUIZ_AUDIENCE).unwrap();
        let second = verify_jwt(&second, SECRET, QUIZ_AUDIENCE).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = sign_jwt("ana@drivesales.com", SECRET, 60).unwrap();
        assert!(verify_jwt(&token, "other", SESSION_AUDIENCE).is_err());
    }
}
