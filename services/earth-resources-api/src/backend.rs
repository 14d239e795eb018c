//! Backend filter service abstraction and its WFS implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use erml_protocol::{
    build_get_feature, mine, mineral_occurrence, mining_activity, parse_exception_report,
    parse_feature_count, MineFilter, MineralOccurrenceFilter, MineralOccurrenceQuery,
    MiningActivityFilter, MiningActivityQuery, ResultType,
};
use wfs_common::{FilterBoundingBox, RequestTrace, ServiceError, ServiceResult};

/// Filtered query and count operations against a geospatial backend.
///
/// One production implementation exists (the WFS client below);
/// everything else depends on this trait.
#[async_trait]
pub trait GeoFilterService: Send + Sync {
    /// Fetch raw GML for mines matching the name filter. An empty name
    /// matches all mines.
    async fn get_mines_gml(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<String>;

    /// Count mines matching the name filter.
    async fn get_mines_count(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64>;

    /// Count mineral occurrences matching the query constraints.
    async fn get_mineral_occurrence_count(
        &self,
        service_url: &str,
        query: &MineralOccurrenceQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64>;

    /// Count mining activities matching the query constraints.
    async fn get_mining_activity_count(
        &self,
        service_url: &str,
        query: &MiningActivityQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64>;
}

/// Outbound HTTP client settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let request_timeout_secs = std::env::var("WFS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        let connect_timeout_secs = std::env::var("WFS_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let user_agent = std::env::var("WFS_USER_AGENT")
            .unwrap_or_else(|_| "earth-resources-api/0.1".to_string());

        Self {
            request_timeout_secs,
            connect_timeout_secs,
            user_agent,
        }
    }
}

/// Production GeoFilterService: posts GetFeature documents to the
/// caller-named WFS endpoint and interprets the response bodies.
pub struct WfsFilterService {
    client: Client,
}

impl WfsFilterService {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// POST a GetFeature document, returning the body together with a
    /// trace of the request for diagnostics.
    async fn post_get_feature(
        &self,
        service_url: &str,
        document: String,
    ) -> ServiceResult<(String, RequestTrace)> {
        let trace = RequestTrace::new("POST", service_url);
        debug!(url = %service_url, bytes = document.len(), "Posting GetFeature request");

        let response = self
            .client
            .post(service_url)
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(document)
            .send()
            .await
            .map_err(|e| ServiceError::new(e.to_string(), trace.clone()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::new(
                format!("backend responded with HTTP {}", status),
                trace,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::new(e.to_string(), trace.clone()))?;

        Ok((body, trace))
    }

    /// Issue a hits query and parse the match count from the response.
    async fn count_features(
        &self,
        service_url: &str,
        type_name: &str,
        filter_xml: &str,
        max_features: u32,
    ) -> ServiceResult<u64> {
        let document = build_get_feature(type_name, filter_xml, ResultType::Hits, max_features);
        let (body, trace) = self.post_get_feature(service_url, document).await?;
        parse_feature_count(&body).map_err(|e| ServiceError::new(e.to_string(), trace))
    }
}

#[async_trait]
impl GeoFilterService for WfsFilterService {
    async fn get_mines_gml(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<String> {
        let filter_xml = MineFilter::new(mine_name, bbox).to_filter_xml();
        let document =
            build_get_feature(mine::FEATURE_TYPE, &filter_xml, ResultType::Results, max_features);
        let (body, trace) = self.post_get_feature(service_url, document).await?;

        // A 200 body can still be an exception report.
        if let Some(report) = parse_exception_report(&body) {
            return Err(ServiceError::new(report, trace));
        }
        Ok(body)
    }

    async fn get_mines_count(
        &self,
        service_url: &str,
        mine_name: &str,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64> {
        let filter_xml = MineFilter::new(mine_name, bbox).to_filter_xml();
        self.count_features(service_url, mine::FEATURE_TYPE, &filter_xml, max_features)
            .await
    }

    async fn get_mineral_occurrence_count(
        &self,
        service_url: &str,
        query: &MineralOccurrenceQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64> {
        let filter_xml = MineralOccurrenceFilter::new(query, bbox).to_filter_xml();
        self.count_features(
            service_url,
            mineral_occurrence::FEATURE_TYPE,
            &filter_xml,
            max_features,
        )
        .await
    }

    async fn get_mining_activity_count(
        &self,
        service_url: &str,
        query: &MiningActivityQuery,
        bbox: Option<&FilterBoundingBox>,
        max_features: u32,
    ) -> ServiceResult<u64> {
        let filter_xml = MiningActivityFilter::new(query, bbox).to_filter_xml();
        self.count_features(
            service_url,
            mining_activity::FEATURE_TYPE,
            &filter_xml,
            max_features,
        )
        .await
    }
}
