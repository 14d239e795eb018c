//! The uniform response envelope returned by every filter operation.

use serde::Serialize;

/// Successful payload: raw geographic markup or a feature count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Features(String),
    Count(u64),
}

/// Outbound shape shared by all filter operations.
///
/// Exactly one of the data payload and the debug message is populated,
/// matching the success flag; the constructors are the only way to build
/// one. The debug message never crosses the wire: failures serialize as
/// `{"success":false}` and the diagnostic goes to the logs.
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ResponseData>,

    #[serde(skip)]
    debug_message: Option<String>,
}

impl FilterResponse {
    pub fn success(data: ResponseData) -> Self {
        Self {
            success: true,
            data: Some(data),
            debug_message: None,
        }
    }

    pub fn failure(debug_message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            debug_message: Some(debug_message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&ResponseData> {
        self.data.as_ref()
    }

    pub fn debug_message(&self) -> Option<&str> {
        self.debug_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_features() {
        let envelope = FilterResponse::success(ResponseData::Features("<gml/>".to_string()));
        assert!(envelope.is_success());
        assert_eq!(
            envelope.data(),
            Some(&ResponseData::Features("<gml/>".to_string()))
        );
        assert!(envelope.debug_message().is_none());

        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"success":true,"data":"<gml/>"}"#);
    }

    #[test]
    fn test_success_with_count() {
        let envelope = FilterResponse::success(ResponseData::Count(21));
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"success":true,"data":21}"#);
    }

    #[test]
    fn test_failure_hides_debug_message_on_the_wire() {
        let envelope = FilterResponse::failure("POST request to http://localhost? failed");
        assert!(!envelope.is_success());
        assert!(envelope.data().is_none());
        assert_eq!(
            envelope.debug_message(),
            Some("POST request to http://localhost? failed")
        );

        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, r#"{"success":false}"#);
    }
}
