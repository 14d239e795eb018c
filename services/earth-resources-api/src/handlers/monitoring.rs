//! Health and metrics endpoints.

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::instrument;

use crate::state::AppState;

/// GET /health - Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /metrics - Prometheus exposition of the request counters
#[instrument(skip(state))]
pub async fn metrics_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let m = &state.metrics;

    let mut output = String::new();

    output.push_str(&format!(
        "# HELP mine_filter_requests_total Mine feature filter requests\n# TYPE mine_filter_requests_total counter\nmine_filter_requests_total {}\n",
        m.mine_filter_requests.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP mine_count_requests_total Mine count requests\n# TYPE mine_count_requests_total counter\nmine_count_requests_total {}\n",
        m.mine_count_requests.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP mineral_occurrence_count_requests_total Mineral occurrence count requests\n# TYPE mineral_occurrence_count_requests_total counter\nmineral_occurrence_count_requests_total {}\n",
        m.occurrence_count_requests.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP mining_activity_count_requests_total Mining activity count requests\n# TYPE mining_activity_count_requests_total counter\nmining_activity_count_requests_total {}\n",
        m.activity_count_requests.load(Ordering::Relaxed)
    ));
    output.push_str(&format!(
        "# HELP filter_failures_total Filter requests that produced a failure envelope\n# TYPE filter_failures_total counter\nfilter_failures_total {}\n",
        m.failed_requests.load(Ordering::Relaxed)
    ));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(output.into())
        .unwrap()
}
