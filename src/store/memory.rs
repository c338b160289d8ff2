// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{question::QuestionRow, result::ResultRecord},
    store::RecordStore,
};

/// Record store held entirely in memory. Used by tests and local demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    questions: RwLock<Vec<QuestionRow>>,
    results: RwLock<Vec<ResultRecord>>,
}

impl MemoryStore {
    pub fn new(questions: Vec<QuestionRow>, results: Vec<ResultRecord>) -> Self {
        Self {
            questions: RwLock::new(questions),
            results: RwLock::new(results),
        }
    }

    pub async fn push_question(&self, row: QuestionRow) {
        self.questions.write().await.push(row);
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn question_rows(&self, limit: usize) -> Result<Vec<QuestionRow>, AppError> {
        Ok(self.questions.read().await.iter().take(limit).cloned().collect())
    }

    async fn results(&self) -> Result<Vec<ResultRecord>, AppError> {
        Ok(self.results.read().await.clone())
    }

    async fn append_result(&self, record: &ResultRecord) -> Result<(), AppError> {
        let mut results = self.results.write().await;
        if record.quiz_id.is_some() && results.iter().any(|r| r.quiz_id == record.quiz_id) {
            return Err(AppError::Conflict("Quiz already submitted".to_string()));
        }
        results.push(record.clone());
        Ok(())
    }
}
