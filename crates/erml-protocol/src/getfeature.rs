//! WFS GetFeature documents and response-body interpretation.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Whether a GetFeature query returns members or only the match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Results,
    Hits,
}

impl ResultType {
    fn as_str(self) -> &'static str {
        match self {
            ResultType::Results => "results",
            ResultType::Hits => "hits",
        }
    }
}

/// Errors raised while interpreting a WFS response body.
#[derive(Debug, Error)]
pub enum WfsResponseError {
    #[error("WFS exception report: {0}")]
    ExceptionReport(String),

    #[error("response is not a WFS FeatureCollection")]
    NotAFeatureCollection,

    #[error("FeatureCollection carries no numberOfFeatures attribute")]
    MissingFeatureCount,

    #[error("unreadable numberOfFeatures value: {0}")]
    UnreadableFeatureCount(String),

    #[error("malformed XML in response: {0}")]
    MalformedXml(String),
}

/// Build a WFS 1.1.0 GetFeature document around a rendered filter.
///
/// A max_features of zero leaves the result cap to the server default.
pub fn build_get_feature(
    type_name: &str,
    filter_xml: &str,
    result_type: ResultType,
    max_features: u32,
) -> String {
    let max_attr = if max_features > 0 {
        format!(r#" maxFeatures="{}""#, max_features)
    } else {
        String::new()
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:GetFeature service="WFS" version="1.1.0" resultType="{result_type}"{max_attr}
    xmlns:wfs="http://www.opengis.net/wfs"
    xmlns:ogc="http://www.opengis.net/ogc"
    xmlns:gml="http://www.opengis.net/gml"
    xmlns:er="urn:cgi:xmlns:GGIC:EarthResource:1.1"
    xmlns:gsml="urn:cgi:xmlns:CGI:GeoSciML:2.0">
  <wfs:Query typeName="{type_name}">{filter_xml}</wfs:Query>
</wfs:GetFeature>
"#,
        result_type = result_type.as_str(),
        max_attr = max_attr,
        type_name = type_name,
        filter_xml = filter_xml,
    )
}

/// Extract the text of an OWS/OGC exception report, if the body is one.
///
/// Returns `None` for anything that is not an exception report,
/// including bodies that are not XML at all.
pub fn parse_exception_report(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut is_report = false;
    let mut in_text = false;
    let mut messages: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                let local = name.as_ref();
                if !is_report {
                    // The root element decides whether this is a report.
                    if local == b"ExceptionReport" || local == b"ServiceExceptionReport" {
                        is_report = true;
                    } else {
                        return None;
                    }
                } else if local == b"ExceptionText" || local == b"ServiceException" {
                    in_text = true;
                }
            }
            Ok(Event::Empty(e)) => {
                if !is_report {
                    let name = e.local_name();
                    let local = name.as_ref();
                    if local == b"ExceptionReport" || local == b"ServiceExceptionReport" {
                        is_report = true;
                    } else {
                        return None;
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                let local = name.as_ref();
                if local == b"ExceptionText" || local == b"ServiceException" {
                    in_text = false;
                }
            }
            Ok(Event::Text(t)) if in_text => {
                if let Ok(text) = t.unescape() {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        messages.push(trimmed.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => return None,
            _ => {}
        }
        buf.clear();
    }

    if !is_report {
        return None;
    }
    if messages.is_empty() {
        Some("exception report with no detail".to_string())
    } else {
        Some(messages.join("; "))
    }
}

/// Pull the match count out of a resultType="hits" response.
pub fn parse_feature_count(body: &str) -> Result<u64, WfsResponseError> {
    if let Some(report) = parse_exception_report(body) {
        return Err(WfsResponseError::ExceptionReport(report));
    }

    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() != b"FeatureCollection" {
                    return Err(WfsResponseError::NotAFeatureCollection);
                }
                for attr in e.attributes() {
                    if let Ok(attr) = attr {
                        if attr.key.as_ref() == b"numberOfFeatures" {
                            let value = String::from_utf8_lossy(&attr.value);
                            return value.trim().parse::<u64>().map_err(|_| {
                                WfsResponseError::UnreadableFeatureCount(value.into_owned())
                            });
                        }
                    }
                }
                return Err(WfsResponseError::MissingFeatureCount);
            }
            Ok(Event::Eof) => return Err(WfsResponseError::NotAFeatureCollection),
            Err(e) => return Err(WfsResponseError::MalformedXml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HITS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs"
    numberOfFeatures="21" timeStamp="2012-03-05T01:10:00Z"/>
"#;

    const OWS_EXCEPTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ows:ExceptionReport version="1.0.0" xmlns:ows="http://www.opengis.net/ows">
  <ows:Exception exceptionCode="NoApplicableCode">
    <ows:ExceptionText>Could not parse input filter</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>
"#;

    const SERVICE_EXCEPTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ServiceExceptionReport version="1.2.0">
  <ServiceException code="InvalidFormat">Unsupported output format</ServiceException>
</ServiceExceptionReport>
"#;

    #[test]
    fn test_build_hits_request() {
        let doc = build_get_feature("er:Mine", "<ogc:Filter/>", ResultType::Hits, 21341);
        assert!(doc.contains(r#"resultType="hits""#));
        assert!(doc.contains(r#"maxFeatures="21341""#));
        assert!(doc.contains(r#"<wfs:Query typeName="er:Mine"><ogc:Filter/></wfs:Query>"#));
    }

    #[test]
    fn test_build_omits_cap_when_zero() {
        let doc = build_get_feature("er:Mine", "", ResultType::Results, 0);
        assert!(doc.contains(r#"resultType="results""#));
        assert!(!doc.contains("maxFeatures"));
    }

    #[test]
    fn test_parse_feature_count() {
        assert_eq!(parse_feature_count(HITS_RESPONSE).unwrap(), 21);
    }

    #[test]
    fn test_parse_feature_count_missing_attribute() {
        let body = r#"<wfs:FeatureCollection xmlns:wfs="http://www.opengis.net/wfs"/>"#;
        assert!(matches!(
            parse_feature_count(body),
            Err(WfsResponseError::MissingFeatureCount)
        ));
    }

    #[test]
    fn test_parse_feature_count_unreadable_value() {
        let body = r#"<wfs:FeatureCollection numberOfFeatures="lots"/>"#;
        assert!(matches!(
            parse_feature_count(body),
            Err(WfsResponseError::UnreadableFeatureCount(_))
        ));
    }

    #[test]
    fn test_parse_feature_count_rejects_exception_report() {
        assert!(matches!(
            parse_feature_count(OWS_EXCEPTION),
            Err(WfsResponseError::ExceptionReport(_))
        ));
    }

    #[test]
    fn test_parse_feature_count_rejects_other_bodies() {
        assert!(matches!(
            parse_feature_count("<html>busy</html>"),
            Err(WfsResponseError::NotAFeatureCollection)
        ));
        assert!(matches!(
            parse_feature_count(""),
            Err(WfsResponseError::NotAFeatureCollection)
        ));
    }

    #[test]
    fn test_exception_report_text() {
        let text = parse_exception_report(OWS_EXCEPTION).unwrap();
        assert_eq!(text, "Could not parse input filter");
    }

    #[test]
    fn test_service_exception_report_text() {
        let text = parse_exception_report(SERVICE_EXCEPTION).unwrap();
        assert_eq!(text, "Unsupported output format");
    }

    #[test]
    fn test_prefixed_service_exception_report_text() {
        let body = r#"<ogc:ServiceExceptionReport version="1.2.0" xmlns:ogc="http://www.opengis.net/ogc">
  <ogc:ServiceException code="InvalidParameterValue">Unknown typeName er:Bogus</ogc:ServiceException>
</ogc:ServiceExceptionReport>"#;
        let text = parse_exception_report(body).unwrap();
        assert_eq!(text, "Unknown typeName er:Bogus");
    }

    #[test]
    fn test_exception_report_without_detail() {
        let body = r#"<ows:ExceptionReport xmlns:ows="http://www.opengis.net/ows"/>"#;
        assert_eq!(
            parse_exception_report(body).unwrap(),
            "exception report with no detail"
        );
    }

    #[test]
    fn test_non_reports_yield_none() {
        assert!(parse_exception_report("<gml/>").is_none());
        assert!(parse_exception_report("plain text body").is_none());
        assert!(parse_exception_report("").is_none());
        assert!(parse_exception_report(HITS_RESPONSE).is_none());
    }
}
