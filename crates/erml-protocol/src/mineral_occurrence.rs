//! Filter documents for er:MineralOccurrence feature queries.

use serde::Deserialize;
use wfs_common::FilterBoundingBox;

use crate::ogc::{self, non_empty};

/// WFS feature type for mineral occurrence queries.
pub const FEATURE_TYPE: &str = "er:MineralOccurrence";

const COMMODITY_NAME_PROPERTY: &str = "er:commodityDescription/er:Commodity/er:commodityName";

/// Caller-supplied constraints for a mineral occurrence query.
///
/// Every field is independently optional; absent and empty values apply
/// no constraint. The measure type selects which ore measure kind the
/// amount constraints bind to and applies no clause of its own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MineralOccurrenceQuery {
    pub commodity_name: Option<String>,
    pub measure_type: Option<String>,
    pub min_ore_amount: Option<String>,
    #[serde(rename = "minOreAmountUOM")]
    pub min_ore_amount_uom: Option<String>,
    pub min_commodity_amount: Option<String>,
    #[serde(rename = "minCommodityAmountUOM")]
    pub min_commodity_amount_uom: Option<String>,
}

/// Filter for er:MineralOccurrence features.
#[derive(Debug, Clone)]
pub struct MineralOccurrenceFilter<'a> {
    query: &'a MineralOccurrenceQuery,
    bbox: Option<&'a FilterBoundingBox>,
}

impl<'a> MineralOccurrenceFilter<'a> {
    pub fn new(query: &'a MineralOccurrenceQuery, bbox: Option<&'a FilterBoundingBox>) -> Self {
        Self { query, bbox }
    }

    /// Measure element path selected by the measure type. Resource and
    /// reserve narrow to their specific measure element; anything else
    /// matches any measure kind.
    fn measure_path(&self) -> &'static str {
        let lowered = self.query.measure_type.as_deref().map(str::to_ascii_lowercase);
        match lowered.as_deref() {
            Some("resource") => "er:oreAmount/er:Resource",
            Some("reserve") => "er:oreAmount/er:Reserve",
            _ => "er:oreAmount/er:OreMeasure",
        }
    }

    /// Render the ogc:Filter document. Empty when nothing narrows the
    /// query.
    pub fn to_filter_xml(&self) -> String {
        let q = self.query;
        let measure = self.measure_path();
        let mut clauses = Vec::new();

        if let Some(name) = non_empty(&q.commodity_name) {
            clauses.push(ogc::property_is_equal_to(COMMODITY_NAME_PROPERTY, name));
        }
        if let Some(amount) = non_empty(&q.min_ore_amount) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(
                &format!("{}/er:ore/gsml:CGI_NumericValue/gsml:principalValue", measure),
                amount,
            ));
        }
        if let Some(uom) = non_empty(&q.min_ore_amount_uom) {
            clauses.push(ogc::property_is_equal_to(
                &format!("{}/er:ore/gsml:CGI_NumericValue/gsml:principalValue/@uom", measure),
                uom,
            ));
        }
        if let Some(amount) = non_empty(&q.min_commodity_amount) {
            clauses.push(ogc::property_is_greater_than_or_equal_to(
                &format!(
                    "{}/er:measureDetails/er:CommodityMeasure/er:commodityAmount/gsml:CGI_NumericValue/gsml:principalValue",
                    measure
                ),
                amount,
            ));
        }
        if let Some(uom) = non_empty(&q.min_commodity_amount_uom) {
            clauses.push(ogc::property_is_equal_to(
                &format!(
                    "{}/er:measureDetails/er:CommodityMeasure/er:commodityAmount/gsml:CGI_NumericValue/gsml:principalValue/@uom",
                    measure
                ),
                uom,
            ));
        }
        if let Some(bbox) = self.bbox {
            clauses.push(ogc::bbox_clause(bbox));
        }

        ogc::filter(&ogc::and(clauses))
    }
}
