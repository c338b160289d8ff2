// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use chrono::Local;

use crate::{
    cache::ReadCache,
    config::Config,
    error::AppError,
    models::{
        question::Question,
        result::{RESULT_DATE_FORMAT, ResultRecord, StartQuizResponse, SubmitQuizRequest, SubmitQuizResponse},
        user::QuizStatusResponse,
    },
    quiz::{
        leaderboard::{build_leaderboard, rank_of},
        quota::{attempts_on, can_attempt},
        sampler::build_quiz,
        scorer::{calculate_score, invalid_selections, unanswered},
        username::format_username,
    },
    utils::jwt::{Claims, QUIZ_AUDIENCE, sign_quiz_token, verify_jwt},
};

/// Counts today's attempts and fails once the daily cap is reached.
async fn check_quota(cache: &ReadCache, config: &Config, email: &str) -> Result<usize, AppError> {
    let results = cache.results().await?;
    let attempts_today = attempts_on(&results, email, Local::now().date_naive());

    if !can_attempt(attempts_today, config.max_attempts_per_day) {
        tracing::info!("Daily attempt cap reached ({}/{})", attempts_today, config.max_attempts_per_day);
        return Err(AppError::TooManyAttempts(format!(
            "You reached max {} attempts today",
            config.max_attempts_per_day
        )));
    }

    Ok(attempts_today)
}

/// Reports how many attempts the current user has used today.
#[utoipa::path(
    get,
    path = "/api/quiz/status",
    responses(
        (status = 200, description = "Attempt quota of the caller", body = QuizStatusResponse),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn quiz_status(
    State(cache): State<ReadCache>,
    State(config): State<Config>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let results = cache.results().await?;
    let attempts_today = attempts_on(&results, &claims.sub, Local::now().date_naive());
    let max_attempts = config.max_attempts_per_day;

    Ok(Json(QuizStatusResponse {
        username: format_username(&claims.sub),
        attempts_today,
        max_attempts,
        remaining: max_attempts.saturating_sub(attempts_today),
        can_start: can_attempt(attempts_today, max_attempts),
    }))
}

/// Starts a quiz.
///
/// * Rejects the request once the daily attempt cap is reached.
/// * Samples up to `questions_per_quiz` questions without replacement.
/// * Returns the questions without answers plus a token naming them.
#[utoipa::path(
    post,
    path = "/api/quiz/start",
    responses(
        (status = 200, description = "Quiz started", body = StartQuizResponse),
        (status = 404, description = "Question bank is empty"),
        (status = 429, description = "Daily attempt cap reached")
    )
)]
pub async fn start_quiz(
    State(cache): State<ReadCache>,
    State(config): State<Config>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    check_quota(&cache, &config, &claims.sub).await?;

    let bank = cache.questions().await?;
    if bank.is_empty() {
        return Err(AppError::NotFound("No questions available".to_string()));
    }

    let questions = build_quiz(&bank, config.questions_per_quiz);
    let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();

    let quiz_token = sign_quiz_token(
        &claims.sub,
        question_ids,
        &config.jwt_secret,
        config.quiz_token_ttl,
    )?;

    tracing::debug!("Started quiz with {} questions", questions.len());

    Ok(Json(StartQuizResponse {
        questions,
        quiz_token,
        expires_in: config.quiz_token_ttl,
    }))
}

/// Submits the answers of a started quiz.
///
/// * A started quiz can be submitted once.
/// * Every question of the quiz needs at least one selected option, and only
///   keys of the question's own options may be selected.
/// * A question scores when the selected keys equal the correct keys exactly.
/// * Appends the result, then reports the caller's leaderboard rank.
#[utoipa::path(
    post,
    path = "/api/quiz/submit",
    request_body = SubmitQuizRequest,
    responses(
        (status = 200, description = "Quiz scored and recorded", body = SubmitQuizResponse),
        (status = 400, description = "Unanswered questions"),
        (status = 401, description = "Invalid quiz token"),
        (status = 403, description = "Quiz token issued to another user"),
        (status = 409, description = "Quiz already submitted"),
        (status = 429, description = "Daily attempt cap reached")
    )
)]
pub async fn submit_quiz(
    State(cache): State<ReadCache>,
    State(config): State<Config>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = verify_jwt(&req.quiz_token, &config.jwt_secret, QUIZ_AUDIENCE)?;
    if quiz.sub != claims.sub {
        return Err(AppError::Forbidden(
            "Quiz was started by another user".to_string(),
        ));
    }
    let quiz_id = quiz
        .jti
        .ok_or_else(|| AppError::AuthError("Invalid token".to_string()))?;

    let results = cache.results().await?;
    if results.iter().any(|r| r.quiz_id.as_deref() == Some(quiz_id.as_str())) {
        return Err(AppError::Conflict("Quiz already submitted".to_string()));
    }

    check_quota(&cache, &config, &claims.sub).await?;

    let bank = cache.questions().await?;
    let by_id: HashMap<i64, &Question> = bank.iter().map(|q| (q.id, q)).collect();

    // Questions removed from the bank since the quiz started are not scored.
    let questions: Vec<Question> = quiz
        .questions
        .iter()
        .filter_map(|id| by_id.get(id).map(|q| (*q).clone()))
        .collect();

    if questions.is_empty() {
        return Err(AppError::BadRequest(
            "Quiz questions are no longer available".to_string(),
        ));
    }

    let missing = unanswered(&questions, &req.answers);
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Please answer all questions before submitting ({} unanswered).",
            missing.len()
        )));
    }

    let invalid = invalid_selections(&questions, &req.answers);
    if !invalid.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Selected options do not belong to {} question(s).",
            invalid.len()
        )));
    }

    let result = calculate_score(&questions, &req.answers);

    let record = ResultRecord {
        email: claims.sub.clone(),
        score: result.score as i64,
        total: result.total as i64,
        percentage: result.percentage,
        date: Local::now().format(RESULT_DATE_FORMAT).to_string(),
        quiz_id: Some(quiz_id),
    };
    let results = cache.append_result(&record).await?;

    let board = build_leaderboard(&results);
    let rank = rank_of(&board, &claims.sub).ok_or_else(|| {
        AppError::InternalServerError("Recorded result missing from leaderboard".to_string())
    })?;
    let attempts_today = attempts_on(&results, &claims.sub, Local::now().date_naive());

    tracing::info!(
        "Quiz submitted: {}/{} ({}%), rank #{}",
        result.score,
        result.total,
        result.percentage,
        rank
    );

    Ok(Json(SubmitQuizResponse {
        score: result.score,
        total: result.total,
        percentage: result.percentage,
        rank,
        attempts_today,
        max_attempts: config.max_attempts_per_day,
        message: format!(
            "Final Score: {}/{} ({}%)",
            result.score, result.total, result.percentage
        ),
    }))
}
