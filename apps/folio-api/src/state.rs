//! Application state - shared across all handlers.

use std::sync::Arc;

use folio_core::ContentQueryService;
use folio_core::ports::PostStore;
use folio_infra::InMemoryPostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentQueryService,
    pub public_base_url: String,
}

impl AppState {
    /// Build the application state around a freshly seeded in-memory store.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = Arc::new(InMemoryPostStore::seeded(&config.content));
        let content = ContentQueryService::new(store, config.content.clone());

        tracing::info!(
            public_base_url = %config.public_base_url,
            "Application state initialized"
        );

        Self {
            content,
            public_base_url: config.public_base_url.clone(),
        }
    }
}
