//! OGC filter building blocks shared by the per-feature-type builders.
//!
//! Clauses are rendered as single-line fragments and combined with
//! [`and`] before being wrapped by [`filter`].

use quick_xml::escape::escape;
use wfs_common::FilterBoundingBox;

/// Escape a caller-supplied value for use as element text or an
/// attribute value.
pub fn escape_literal(value: &str) -> String {
    escape(value).into_owned()
}

/// Borrow a non-empty optional field; absent and empty values apply no
/// constraint.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// ogc:PropertyIsEqualTo clause.
pub fn property_is_equal_to(property: &str, value: &str) -> String {
    format!(
        "<ogc:PropertyIsEqualTo><ogc:PropertyName>{}</ogc:PropertyName><ogc:Literal>{}</ogc:Literal></ogc:PropertyIsEqualTo>",
        property,
        escape_literal(value)
    )
}

/// ogc:PropertyIsGreaterThanOrEqualTo clause.
pub fn property_is_greater_than_or_equal_to(property: &str, value: &str) -> String {
    format!(
        "<ogc:PropertyIsGreaterThanOrEqualTo><ogc:PropertyName>{}</ogc:PropertyName><ogc:Literal>{}</ogc:Literal></ogc:PropertyIsGreaterThanOrEqualTo>",
        property,
        escape_literal(value)
    )
}

/// ogc:PropertyIsLessThanOrEqualTo clause.
pub fn property_is_less_than_or_equal_to(property: &str, value: &str) -> String {
    format!(
        "<ogc:PropertyIsLessThanOrEqualTo><ogc:PropertyName>{}</ogc:PropertyName><ogc:Literal>{}</ogc:Literal></ogc:PropertyIsLessThanOrEqualTo>",
        property,
        escape_literal(value)
    )
}

/// ogc:BBOX clause against the server's default geometry property.
pub fn bbox_clause(bbox: &FilterBoundingBox) -> String {
    let (lower_x, lower_y) = bbox.lower_corner();
    let (upper_x, upper_y) = bbox.upper_corner();
    format!(
        r#"<ogc:BBOX><gml:Envelope srsName="{}"><gml:lowerCorner>{} {}</gml:lowerCorner><gml:upperCorner>{} {}</gml:upperCorner></gml:Envelope></ogc:BBOX>"#,
        escape_literal(&bbox.crs),
        lower_x,
        lower_y,
        upper_x,
        upper_y
    )
}

/// AND-combine clauses. Zero clauses yields an empty string, a single
/// clause passes through bare, more get an ogc:And wrapper.
pub fn and(mut clauses: Vec<String>) -> String {
    match clauses.len() {
        0 => String::new(),
        1 => clauses.remove(0),
        _ => format!("<ogc:And>{}</ogc:And>", clauses.concat()),
    }
}

/// Wrap a combined clause body in ogc:Filter. An empty body yields an
/// empty string: no filter element at all, match everything.
pub fn filter(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!("<ogc:Filter>{}</ogc:Filter>", body)
    }
}
