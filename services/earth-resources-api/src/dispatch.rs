//! Filter dispatch: one entry point per query kind, each producing the
//! uniform response envelope.

use std::sync::Arc;

use tracing::error;

use erml_protocol::{MineralOccurrenceQuery, MiningActivityQuery};
use wfs_common::{FilterBoundingBox, ServiceError};

use crate::backend::GeoFilterService;
use crate::diagnostics::render_failure;
use crate::envelope::{FilterResponse, ResponseData};

/// Stateless dispatcher over a single backend collaborator.
///
/// Parameters pass through verbatim; in particular an empty mine name
/// reaches the backend as the empty string, because the backend owns the
/// empty-means-all convention. Each dispatch makes at most one backend
/// call and always returns a well-formed envelope.
#[derive(Clone)]
pub struct FilterDispatcher {
    service: Arc<dyn GeoFilterService>,
}

impl FilterDispatcher {
    pub fn new(service: Arc<dyn GeoFilterService>) -> Self {
        Self { service }
    }

    /// Fetch GML for mines matching the name filter.
    pub async fn filter_features(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> FilterResponse {
        match self
            .service
            .get_mines_gml(service_url, mine_name, bbox, max_features)
            .await
        {
            Ok(gml) => FilterResponse::success(ResponseData::Features(gml)),
            Err(e) => failure("mine feature query", e),
        }
    }

    /// Count mines matching the name filter.
    pub async fn filter_features_count(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> FilterResponse {
        match self
            .service
            .get_mines_count(service_url, mine_name, bbox, max_features)
            .await
        {
            Ok(count) => FilterResponse::success(ResponseData::Count(count)),
            Err(e) => failure("mine count query", e),
        }
    }

    /// Count mineral occurrences matching the query constraints.
    pub async fn filter_mineral_occurrence_count(
        &self,
        service_url: &str,
        query: &MineralOccurrenceQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> FilterResponse {
        match self
            .service
            .get_mineral_occurrence_count(service_url, query, bbox, max_features)
            .await
        {
            Ok(count) => FilterResponse::success(ResponseData::Count(count)),
            Err(e) => failure("mineral occurrence count query", e),
        }
    }

    /// Count mining activities matching the query constraints.
    pub async fn filter_mining_activity_count(
        &self,
        service_url: &str,
        query: &MiningActivityQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> FilterResponse {
        match self
            .service
            .get_mining_activity_count(service_url, query, bbox, max_features)
            .await
        {
            Ok(count) => FilterResponse::success(ResponseData::Count(count)),
            Err(e) => failure("mining activity count query", e),
        }
    }
}

/// Failure envelope with the diagnostic logged. The wire carries only
/// the success flag; the rendered diagnostic stays internal.
fn failure(operation: &str, error: ServiceError) -> FilterResponse {
    let diagnostic = render_failure(operation, &error);
    error!(error = %diagnostic, "Backend filter request failed");
    FilterResponse::failure(diagnostic)
}
