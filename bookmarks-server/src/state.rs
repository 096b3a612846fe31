//! Application state shared across handlers

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::BookmarkStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn BookmarkStore>,
    config: ServerConfig,
}

impl AppState {
    pub fn new(store: impl BookmarkStore + 'static, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Arc::new(store),
                config,
            }),
        }
    }

    pub fn store(&self) -> &dyn BookmarkStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
