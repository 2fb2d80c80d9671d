//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::LabStore, hackerrank::ActivityFeed};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Problem, student and submission records
    store: Arc<dyn LabStore>,

    /// Public HackerRank activity
    feed: Arc<dyn ActivityFeed>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn LabStore>, feed: Arc<dyn ActivityFeed>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                feed,
                config,
            }),
        }
    }

    /// Get a reference to the record store
    pub fn store(&self) -> &dyn LabStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the HackerRank activity feed
    pub fn feed(&self) -> &dyn ActivityFeed {
        self.inner.feed.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
