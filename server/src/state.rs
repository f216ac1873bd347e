//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; inner fields are pooled or Arc-wrapped.

use std::sync::Arc;

use sqlx::PgPool;

use crate::llm::LlmClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Absent when LLM config is missing; generation endpoints return 503.
    pub llm: Option<Arc<LlmClient>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, llm: Option<LlmClient>) -> Self {
        Self { pool, llm: llm.map(Arc::new) }
    }
}
