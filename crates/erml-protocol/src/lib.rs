//! EarthResourceML filter and WFS GetFeature document handling.
//!
//! Builds per-feature-type OGC filter documents from caller constraints
//! and interprets WFS response bodies (feature counts, exception reports).

pub mod getfeature;
pub mod mine;
pub mod mineral_occurrence;
pub mod mining_activity;
pub mod ogc;

pub use getfeature::{
    build_get_feature, parse_exception_report, parse_feature_count, ResultType, WfsResponseError,
};
pub use mine::MineFilter;
pub use mineral_occurrence::{MineralOccurrenceFilter, MineralOccurrenceQuery};
pub use mining_activity::{MiningActivityFilter, MiningActivityQuery};
