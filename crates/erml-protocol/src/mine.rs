//! Filter documents for er:Mine feature queries.

use wfs_common::FilterBoundingBox;

use crate::ogc;

/// WFS feature type for mine queries.
pub const FEATURE_TYPE: &str = "er:Mine";

/// Property path of the mine name within EarthResourceML 1.1.
const MINE_NAME_PROPERTY: &str = "er:mineName/er:MineName/er:mineName";

/// Filter for er:Mine features, optionally narrowed by name and bounds.
///
/// An empty name matches every mine. That convention lives here, on the
/// backend side of the contract; callers pass the value through untouched.
#[derive(Debug, Clone)]
pub struct MineFilter<'a> {
    mine_name: &'a str,
    bbox: Option<&'a FilterBoundingBox>,
}

impl<'a> MineFilter<'a> {
    pub fn new(mine_name: &'a str, bbox: Option<&'a FilterBoundingBox>) -> Self {
        Self { mine_name, bbox }
    }

    /// Render the ogc:Filter document. Empty when nothing narrows the
    /// query.
    pub fn to_filter_xml(&self) -> String {
        let mut clauses = Vec::new();
        if !self.mine_name.is_empty() {
            clauses.push(ogc::property_is_equal_to(MINE_NAME_PROPERTY, self.mine_name));
        }
        if let Some(bbox) = self.bbox {
            clauses.push(ogc::bbox_clause(bbox));
        }
        ogc::filter(&ogc::and(clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_matches_all() {
        let filter = MineFilter::new("", None);
        assert_eq!(filter.to_filter_xml(), "");
    }

    #[test]
    fn test_named_mine() {
        let filter = MineFilter::new("Good Hope", None);
        let xml = filter.to_filter_xml();
        assert!(xml.starts_with("<ogc:Filter>"));
        assert!(xml.contains("er:mineName/er:MineName/er:mineName"));
        assert!(xml.contains("<ogc:Literal>Good Hope</ogc:Literal>"));
        assert!(!xml.contains("<ogc:And>"));
    }

    #[test]
    fn test_name_and_bounds_are_anded() {
        let bbox = FilterBoundingBox::new("EPSG:4326", 115.0, 129.0, -35.0, -13.5);
        let filter = MineFilter::new("Good Hope", Some(&bbox));
        let xml = filter.to_filter_xml();
        assert!(xml.contains("<ogc:And>"));
        assert!(xml.contains("<ogc:BBOX>"));
        assert!(xml.contains("<ogc:Literal>Good Hope</ogc:Literal>"));
    }

    #[test]
    fn test_bounds_only() {
        let bbox = FilterBoundingBox::new("EPSG:4326", 115.0, 129.0, -35.0, -13.5);
        let filter = MineFilter::new("", Some(&bbox));
        let xml = filter.to_filter_xml();
        assert!(xml.contains("<ogc:BBOX>"));
        assert!(!xml.contains("<ogc:And>"));
        assert!(!xml.contains("PropertyIsEqualTo"));
    }
}
