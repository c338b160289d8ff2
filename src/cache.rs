// src/cache.rs

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use moka::future::Cache;

use crate::{
    error::AppError,
    models::{question::Question, result::ResultRecord},
    quiz::loader::load_questions,
    store::RecordStore,
};

/// Time-based cache in front of the record store's read calls.
///
/// Each table is cached as a whole under a unit key.
#[derive(Clone)]
pub struct ReadCache {
    store: Arc<dyn RecordStore>,
    question_limit: usize,
    questions: Cache<(), Arc<Vec<Question>>>,
    results: Cache<(), Arc<Vec<ResultRecord>>>,
    /// Bumped on every append; a load that straddles an append is retried.
    results_generation: Arc<AtomicU64>,
}

impl ReadCache {
    pub fn new(
        store: Arc<dyn RecordStore>,
        question_limit: usize,
        questions_ttl: Duration,
        results_ttl: Duration,
    ) -> Self {
        Self {
            store,
            question_limit,
            questions: Cache::builder().max_capacity(1).time_to_live(questions_ttl).build(),
            results: Cache::builder().max_capacity(1).time_to_live(results_ttl).build(),
            results_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The loaded and filtered question bank.
    pub async fn questions(&self) -> Result<Arc<Vec<Question>>, AppError> {
        let questions = self
            .questions
            .try_get_with((), async {
                let rows = self.store.question_rows(self.question_limit).await?;
                let questions = load_questions(&rows, self.question_limit);
                tracing::info!("Loaded {} questions from {} rows", questions.len(), rows.len());
                Ok::<_, AppError>(Arc::new(questions))
            })
            .await?;
        Ok(questions)
    }

    pub async fn results(&self) -> Result<Arc<Vec<ResultRecord>>, AppError> {
        let results = self
            .results
            .try_get_with((), async {
                loop {
                    let generation = self.results_generation.load(Ordering::Acquire);
                    let results = self.store.results().await?;
                    if generation == self.results_generation.load(Ordering::Acquire) {
                        tracing::debug!("Loaded {} results", results.len());
                        return Ok::<_, AppError>(Arc::new(results));
                    }
                    tracing::debug!("Results changed while loading, reloading");
                }
            })
            .await?;
        Ok(results)
    }

    /// Appends to the store and returns a snapshot read after the append.
    ///
    /// The snapshot replaces the cached results, so quota and rank computed
    /// from it include the new row even if another load was in flight.
    pub async fn append_result(&self, record: &ResultRecord) -> Result<Arc<Vec<ResultRecord>>, AppError> {
        self.store.append_result(record).await?;
        self.results_generation.fetch_add(1, Ordering::AcqRel);

        let fresh = Arc::new(self.store.results().await?);
        self.results.insert((), fresh.clone()).await;
        Ok(fresh)
    }
}
