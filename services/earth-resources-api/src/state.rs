//! Application state for the earth-resources API.

use anyhow::Result;
use std::sync::Arc;

use crate::backend::{ClientConfig, WfsFilterService};
use crate::dispatch::FilterDispatcher;
use crate::metrics::MetricsCollector;

/// Shared application state.
pub struct AppState {
    /// Dispatcher over the production WFS backend.
    pub dispatcher: FilterDispatcher,

    /// Request counters for the /metrics exposition.
    pub metrics: MetricsCollector,
}

impl AppState {
    /// Create state from environment configuration.
    pub fn new() -> Result<Self> {
        let config = ClientConfig::from_env();
        let service = Arc::new(WfsFilterService::new(&config)?);

        Ok(Self {
            dispatcher: FilterDispatcher::new(service),
            metrics: MetricsCollector::new(),
        })
    }
}
