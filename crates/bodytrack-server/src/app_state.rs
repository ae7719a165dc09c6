//! Shared application state for the bodytrack server.
//!
//! Owns the store, the metrics registry and the loaded config. Handlers get
//! it through axum `State`; cloning is cheap.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bodytrack_core::error::Result;
use bodytrack_core::motivation::{quote_at, Quote};

use crate::config::TrackerConfig;
use crate::obs::metrics::ServerMetrics;
use crate::store::TrackerStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<TrackerStore>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: TrackerConfig,
    quote_cursor: AtomicUsize,
}

impl AppState {
    /// Build application state with an empty store.
    pub fn new(cfg: TrackerConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(TrackerStore::new()))
    }

    /// Build application state around an existing store.
    pub fn with_store(cfg: TrackerConfig, store: Arc<TrackerStore>) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                quote_cursor: AtomicUsize::new(0),
            }),
            store,
            metrics: Arc::new(ServerMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &TrackerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &TrackerStore {
        &self.store
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    /// Next quote in rotation.
    pub fn next_quote(&self) -> Quote {
        quote_at(self.inner.quote_cursor.fetch_add(1, Ordering::Relaxed))
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Store-derived gauges for `/metrics`.
    pub fn metrics_gauges(&self) -> [(&'static str, u64); 2] {
        [
            ("bodytrack_entries", self.store.entry_count() as u64),
            ("bodytrack_photos", self.store.photo_count() as u64),
        ]
    }
}
