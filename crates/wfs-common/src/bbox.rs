//! Spatial bounds forwarded opaquely to backend filter queries.

use serde::{Deserialize, Serialize};

/// Geographic bounding box supplied by callers as a JSON document
/// attached to filter requests.
///
/// Field names follow the portal convention of camelCase compass bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBoundingBox {
    /// Coordinate reference system identifier, e.g. "EPSG:4326".
    #[serde(default = "default_crs")]
    pub crs: String,

    pub west_bound_longitude: f64,
    pub east_bound_longitude: f64,
    pub south_bound_latitude: f64,
    pub north_bound_latitude: f64,
}

fn default_crs() -> String {
    "EPSG:4326".to_string()
}

impl FilterBoundingBox {
    pub fn new(crs: impl Into<String>, west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            crs: crs.into(),
            west_bound_longitude: west,
            east_bound_longitude: east,
            south_bound_latitude: south,
            north_bound_latitude: north,
        }
    }

    /// Parse a bounding box from the JSON document callers attach to
    /// filter requests. Malformed input degrades to `None` (no spatial
    /// filter) rather than failing the whole request.
    pub fn attempt_parse_from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(bbox) => Some(bbox),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unparseable bbox parameter");
                None
            }
        }
    }

    /// Lower corner as (x, y), normalized so lower <= upper on both axes.
    pub fn lower_corner(&self) -> (f64, f64) {
        (
            self.west_bound_longitude.min(self.east_bound_longitude),
            self.south_bound_latitude.min(self.north_bound_latitude),
        )
    }

    /// Upper corner as (x, y), normalized so lower <= upper on both axes.
    pub fn upper_corner(&self) -> (f64, f64) {
        (
            self.west_bound_longitude.max(self.east_bound_longitude),
            self.south_bound_latitude.max(self.north_bound_latitude),
        )
    }
}
