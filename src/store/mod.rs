// src/store/mod.rs

//! The two tables the quiz reads and writes: the question bank and the
//! results log. Mirrors the `questions` and `results` tabs of the shared sheet.

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{question::QuestionRow, result::ResultRecord},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// First `limit` question rows in table order.
    async fn question_rows(&self, limit: usize) -> Result<Vec<QuestionRow>, AppError>;

    /// Every recorded result.
    async fn results(&self) -> Result<Vec<ResultRecord>, AppError>;

    /// Fails with `AppError::Conflict` when `record.quiz_id` is already recorded.
    async fn append_result(&self, record: &ResultRecord) -> Result<(), AppError>;
}
