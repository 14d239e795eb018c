//! Application metrics collection and reporting.

use metrics::counter;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for the filter API.
///
/// Counters are held as atomics for the hand-rendered /metrics
/// exposition and mirrored to the metrics facade.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    pub mine_filter_requests: AtomicU64,
    pub mine_count_requests: AtomicU64,
    pub occurrence_count_requests: AtomicU64,
    pub activity_count_requests: AtomicU64,
    pub failed_requests: AtomicU64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mine feature request
    pub fn record_mine_filter_request(&self) {
        self.mine_filter_requests.fetch_add(1, Ordering::Relaxed);
        counter!("mine_filter_requests_total").increment(1);
    }

    /// Record a mine count request
    pub fn record_mine_count_request(&self) {
        self.mine_count_requests.fetch_add(1, Ordering::Relaxed);
        counter!("mine_count_requests_total").increment(1);
    }

    /// Record a mineral occurrence count request
    pub fn record_occurrence_count_request(&self) {
        self.occurrence_count_requests.fetch_add(1, Ordering::Relaxed);
        counter!("mineral_occurrence_count_requests_total").increment(1);
    }

    /// Record a mining activity count request
    pub fn record_activity_count_request(&self) {
        self.activity_count_requests.fetch_add(1, Ordering::Relaxed);
        counter!("mining_activity_count_requests_total").increment(1);
    }

    /// Record a dispatch that produced a failure envelope
    pub fn record_failed_request(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
        counter!("filter_failures_total").increment(1);
    }
}
