//! HTTP request handlers for the filter and monitoring endpoints.
//!
//! - `filters`: mine, mineral occurrence, and mining activity queries
//! - `monitoring`: health check and Prometheus metrics

pub mod filters;
pub mod monitoring;

pub use filters::{
    mine_filter_count_handler, mine_filter_handler, mineral_occurrence_count_handler,
    mining_activity_count_handler, CommonFilterParams, MineFilterParams,
};

pub use monitoring::{health_handler, metrics_handler};
