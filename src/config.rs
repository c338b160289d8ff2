// src/config.rs

use std::env;
use std::str::FromStr;
use dotenvy::dotenv;

/// Default number of questions in one quiz.
pub const QUESTIONS_PER_QUIZ: usize = 20;
/// Default number of submissions a user may make per calendar day.
pub const MAX_ATTEMPTS_PER_DAY: usize = 3;
/// Default cap on rows read from the question bank.
pub const QUESTION_LOAD_LIMIT: usize = 500;
pub const ALLOWED_DOMAIN: &str = "@drivesales.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub jwt_expiration: u64,
    /// Lifetime of a started quiz in seconds.
    pub quiz_token_ttl: u64,
    pub rust_log: String,
    pub port: u16,
    pub allowed_domain: String,
    pub questions_per_quiz: usize,
    pub max_attempts_per_day: usize,
    pub question_load_limit: usize,
    pub questions_cache_ttl: u64,
    pub results_cache_ttl: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let allowed_domain = env::var("ALLOWED_DOMAIN")
            .map(|d| normalize_domain(&d))
            .unwrap_or_else(|_| ALLOWED_DOMAIN.to_string());

        Self {
            database_url,
            jwt_secret,
            jwt_expiration: env_or("JWT_EXPIRATION", 86_400),
            quiz_token_ttl: env_or("QUIZ_TOKEN_TTL", 3_600),
            rust_log,
            port: env_or("PORT", 3000),
            allowed_domain,
            questions_per_quiz: env_or("QUESTIONS_PER_QUIZ", QUESTIONS_PER_QUIZ),
            max_attempts_per_day: env_or("MAX_ATTEMPTS_PER_DAY", MAX_ATTEMPTS_PER_DAY),
            question_load_limit: env_or("QUESTION_LOAD_LIMIT", QUESTION_LOAD_LIMIT),
            questions_cache_ttl: env_or("QUESTIONS_CACHE_TTL", 60),
            results_cache_ttl: env_or("RESULTS_CACHE_TTL", 30),
        }
    }
}

/// Reads an optional variable, falling back to `default` when unset or unparsable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Accepts both `example.com` and `@example.com`.
fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().to_lowercase();
    if domain.starts_with('@') {
        domain
    } else {
        format!("@{}", domain)
    }
}
