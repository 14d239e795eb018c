//! HTTP handlers for the filter-dispatch endpoints.
//!
//! Every endpoint answers HTTP 200 with the envelope JSON; the success
//! flag carries the outcome.

use axum::extract::{Extension, Query};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use erml_protocol::{MineralOccurrenceQuery, MiningActivityQuery};
use wfs_common::FilterBoundingBox;

use crate::envelope::FilterResponse;
use crate::state::AppState;

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for the mine feature and mine count endpoints.
#[derive(Debug, Deserialize)]
pub struct MineFilterParams {
    #[serde(rename = "serviceUrl")]
    pub service_url: String,

    /// Empty means no name filter; forwarded verbatim either way.
    #[serde(rename = "mineName", default)]
    pub mine_name: String,

    /// Optional JSON bounding box document.
    #[serde(default)]
    pub bbox: Option<String>,

    /// Zero leaves the result cap to the backend default.
    #[serde(rename = "maxFeatures", default)]
    pub max_features: u32,
}

/// Parameters shared by the occurrence and activity count endpoints;
/// their filter constraints ride in a second query extractor.
#[derive(Debug, Deserialize)]
pub struct CommonFilterParams {
    #[serde(rename = "serviceUrl")]
    pub service_url: String,

    #[serde(default)]
    pub bbox: Option<String>,

    #[serde(rename = "maxFeatures", default)]
    pub max_features: u32,
}

/// Decode the optional bbox JSON parameter. Absent or unparseable input
/// means no spatial filter.
fn parse_bbox_param(bbox: Option<&str>) -> Option<FilterBoundingBox> {
    bbox.and_then(FilterBoundingBox::attempt_parse_from_json)
}

fn track_failure(state: &AppState, envelope: &FilterResponse) {
    if !envelope.is_success() {
        state.metrics.record_failed_request();
    }
}

// ============================================================================
// Mine Endpoints
// ============================================================================

/// GET /api/mines - fetch GML for mines matching the name filter
#[instrument(skip(state))]
pub async fn mine_filter_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MineFilterParams>,
) -> Json<FilterResponse> {
    state.metrics.record_mine_filter_request();

    let bbox = parse_bbox_param(params.bbox.as_deref());
    let envelope = state
        .dispatcher
        .filter_features(
            &params.service_url,
            &params.mine_name,
            bbox.as_ref(),
            params.max_features,
        )
        .await;

    track_failure(&state, &envelope);
    Json(envelope)
}

/// GET /api/mines/count - count mines matching the name filter
#[instrument(skip(state))]
pub async fn mine_filter_count_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MineFilterParams>,
) -> Json<FilterResponse> {
    state.metrics.record_mine_count_request();

    let bbox = parse_bbox_param(params.bbox.as_deref());
    let envelope = state
        .dispatcher
        .filter_features_count(
            &params.service_url,
            &params.mine_name,
            bbox.as_ref(),
            params.max_features,
        )
        .await;

    track_failure(&state, &envelope);
    Json(envelope)
}

// ============================================================================
// Mineral Occurrence Endpoints
// ============================================================================

/// GET /api/mineral-occurrences/count - count matching occurrences
#[instrument(skip(state))]
pub async fn mineral_occurrence_count_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(common): Query<CommonFilterParams>,
    Query(query): Query<MineralOccurrenceQuery>,
) -> Json<FilterResponse> {
    state.metrics.record_occurrence_count_request();

    let bbox = parse_bbox_param(common.bbox.as_deref());
    let envelope = state
        .dispatcher
        .filter_mineral_occurrence_count(
            &common.service_url,
            &query,
            bbox.as_ref(),
            common.max_features,
        )
        .await;

    track_failure(&state, &envelope);
    Json(envelope)
}

// ============================================================================
// Mining Activity Endpoints
// ============================================================================

/// GET /api/mining-activities/count - count matching activities
#[instrument(skip(state))]
pub async fn mining_activity_count_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(common): Query<CommonFilterParams>,
    Query(query): Query<MiningActivityQuery>,
) -> Json<FilterResponse> {
    state.metrics.record_activity_count_request();

    let bbox = parse_bbox_param(common.bbox.as_deref());
    let envelope = state
        .dispatcher
        .filter_mining_activity_count(
            &common.service_url,
            &query,
            bbox.as_ref(),
            common.max_features,
        )
        .await;

    track_failure(&state, &envelope);
    Json(envelope)
}
