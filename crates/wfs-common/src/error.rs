//! Error types for backend filter services.

use thiserror::Error;

/// Result type alias using ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Identifying details of an outbound backend request, retained for
/// diagnostics after the request itself is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTrace {
    pub method: String,
    pub url: String,
}

impl RequestTrace {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

/// Failure raised by a backend filter service.
///
/// Carries whatever detail was available at the failure site: a plain
/// message, a trace of the outbound request, both, or neither. Rendering
/// never fails regardless of which parts are present.
#[derive(Debug, Error)]
#[error("{}", self.summary())]
pub struct ServiceError {
    pub message: Option<String>,
    pub request: Option<RequestTrace>,
}

impl ServiceError {
    /// Failure described only by a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            request: None,
        }
    }

    /// Failure described only by the request that produced it.
    pub fn from_request(request: RequestTrace) -> Self {
        Self {
            message: None,
            request: Some(request),
        }
    }

    /// Failure with both a message and the originating request.
    pub fn new(message: impl Into<String>, request: RequestTrace) -> Self {
        Self {
            message: Some(message.into()),
            request: Some(request),
        }
    }

    /// Failure with no detail at all.
    pub fn unspecified() -> Self {
        Self {
            message: None,
            request: None,
        }
    }

    /// One-line rendering of the failure. A non-empty message wins, then
    /// the request trace, then a fixed fallback line.
    pub fn summary(&self) -> String {
        if let Some(msg) = self.message.as_deref() {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
        if let Some(req) = &self.request {
            return format!("{} request to {} failed", req.method, req.url);
        }
        "backend request failed with no further detail".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefers_message() {
        let err = ServiceError::new(
            "connection refused",
            RequestTrace::new("POST", "http://example.org/wfs"),
        );
        assert_eq!(err.summary(), "connection refused");
    }

    #[test]
    fn test_summary_empty_message_falls_back_to_request() {
        let err = ServiceError {
            message: Some(String::new()),
            request: Some(RequestTrace::new("POST", "http://example.org/wfs")),
        };
        assert_eq!(err.summary(), "POST request to http://example.org/wfs failed");
    }

    #[test]
    fn test_summary_request_only() {
        let err = ServiceError::from_request(RequestTrace::new("GET", "http://localhost?"));
        assert_eq!(err.summary(), "GET request to http://localhost? failed");
    }

    #[test]
    fn test_summary_no_detail() {
        let err = ServiceError::unspecified();
        assert_eq!(err.summary(), "backend request failed with no further detail");
    }

    #[test]
    fn test_display_matches_summary() {
        let err = ServiceError::from_message("upstream returned an exception report");
        assert_eq!(err.to_string(), err.summary());
    }
}
