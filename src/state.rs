// src/state.rs

use std::{sync::Arc, time::Duration};

use axum::extract::FromRef;

use crate::{cache::ReadCache, config::Config, store::RecordStore};

#[derive(Clone)]
pub struct AppState {
    pub cache: ReadCache,
    pub config: Config,
}

impl AppState {
    /// Wraps `store` in a read cache tuned by `config`.
    pub fn new(store: Arc<dyn RecordStore>, config: Config) -> Self {
        let cache = ReadCache::new(
            store,
            config.question_load_limit,
            Duration::from_secs(config.questions_cache_ttl),
            Duration::from_secs(config.results_cache_ttl),
        );
        Self { cache, config }
    }
}

impl FromRef<AppState> for ReadCache {
    fn from_ref(state: &AppState) -> Self {
        state.cache.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
