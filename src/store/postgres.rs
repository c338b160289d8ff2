// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{question::QuestionRow, result::ResultRecord},
    store::RecordStore,
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn question_rows(&self, limit: usize) -> Result<Vec<QuestionRow>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, option_a, option_b, option_c, option_d, correct
            FROM questions
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch question rows: {:?}", e);
            AppError::from(e)
        })
    }

    async fn results(&self) -> Result<Vec<ResultRecord>, AppError> {
        sqlx::query_as::<_, ResultRecord>(
            r#"
            SELECT email, score, total, percentage, date, quiz_id
            FROM results
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch results: {:?}", e);
            AppError::from(e)
        })
    }

    async fn append_result(&self, record: &ResultRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO results (email, score, total, percentage, date, quiz_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.email)
        .bind(record.score)
        .bind(record.total)
        .bind(record.percentage)
        .bind(&record.date)
        .bind(&record.quiz_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                return AppError::Conflict("Quiz already submitted".to_string());
            }
            tracing::error!("Failed to append result: {:?}", e);
            AppError::from(e)
        })?;

        Ok(())
    }
}
