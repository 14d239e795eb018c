//! Filter documents for er:MiningActivity feature queries.

use serde::Deserialize;
use wfs_common::FilterBoundingBox;

use crate::ogc::{self, non_empty};

/// WFS feature type for mining activity queries.
pub const FEATURE_TYPE: &str = "er:MiningActivity";

const ASSOCIATED_MINE_NAME_PROPERTY: &str =
    "er:associatedMine/er:Mine/er:mineName/er:MineName/er:mineName";
const ACTIVITY_START_PROPERTY: &str = "er:activityDuration/gml:TimePeriod/gml:beginPosition";
const ACTIVITY_END_PROPERTY: &str = "er:activityDuration/gml:TimePeriod/gml:endPosition";
const ORE_PROCESSED_PROPERTY: &str = "er:oreProcessed/gsml:CGI_NumericValue/gsml:principalValue";
const PRODUCED_MATERIAL_PROPERTY: &str =
    "er:producedMaterial/er:Product/er:productName/gsml:CGI_TermValue/gsml:value";
const CUT_OFF_GRADE_PROPERTY: &str = "er:grade/gsml:CGI_NumericValue/gsml:principalValue";
const PRODUCTION_PROPERTY: &str = "er:production/gsml:CGI_NumericValue/gsml:principalValue";

/// Caller-supplied constraints for a mining activity query.
///
/// Every field is independently optional; absent and empty values apply
/// no constraint. Dates are opaque strings compared inclusively against
/// the activity duration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningActivityQuery {
    pub mine_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub ore_processed: Option<String>,
    pub produced_material: Option<String>,
    pub cut_off_grade: Option<String>,
    pub production: Option<String>,
}

/// Filter for er:MiningActivity features.
#[derive(Debug, Clone)]
pub struct MiningActivityFilter<'a> {
    query: &'a MiningActivityQuery,
    bbox: Option<&'a FilterBoundingBox>,
}

impl<'a> MiningActivityFilter<'a> {
    pub fn new(query: &'a MiningActivityQuery, bbox: Option<&'a FilterBoundingBox>) -> Self {
        Self { query, bbox }
    }

    /// Render the ogc:Filter document. Empty when nothing narrows the
    /// query.
    pub fn to_filter_xml(&self) -> String {
        let q = self.query;
        let mut clauses = Vec::new();

        if let Some(name) = non_empty(&q.mine_name) {
            clauses.push(ogc::property_is_equal_to(ASSOCIATED_MINE_NAME_PROPERTY, name));
        }
        if let Some(start) = non_empty(&q.start_date) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(
                ACTIVITY_START_PROPERTY,
                start,
            ));
        }
        if let Some(end) = non_empty(&q.end_date) {
            clauses.push(ogc::property_is_less_than_or_equal_to(ACTIVITY_END_PROPERTY, end));
        }
        if let Some(ore) = non_empty(&q.ore_processed) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(ORE_PROCESSED_PROPERTY, ore));
        }
        if let Some(material) = non_empty(&q.produced_material) {
            clauses.push(ogc::property_is_equal_to(PRODUCED_MATERIAL_PROPERTY, material));
        }
        if let Some(grade) = non_empty(&q.cut_off_grade) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(CUT_OFF_GRADE_PROPERTY, grade));
        }
        if let Some(production) = non_empty(&q.production) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(PRODUCTION_PROPERTY, production));
        }
        if let Some(bbox) = self.bbox {
            clauses.push(ogc::bbox_clause(bbox));
        }

        ogc::filter(&ogc::and(clauses))
    }
}
