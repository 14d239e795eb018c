//! Failure-to-diagnostic rendering for dispatch logging.

use wfs_common::ServiceError;

/// Render a backend failure as a one-line diagnostic naming the
/// operation that failed.
///
/// Total over every failure shape: with or without a message, with or
/// without a request trace, the result is a non-empty string, so a
/// failure envelope is always constructible.
pub fn render_failure(operation: &str, error: &ServiceError) -> String {
    format!("{} failed: {}", operation, error.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfs_common::RequestTrace;

    #[test]
    fn test_renders_message() {
        let error = ServiceError::from_message("connection refused");
        assert_eq!(
            render_failure("mine feature query", &error),
            "mine feature query failed: connection refused"
        );
    }

    #[test]
    fn test_renders_request_when_message_absent() {
        let error = ServiceError::from_request(RequestTrace::new("POST", "http://localhost?"));
        assert_eq!(
            render_failure("mine count query", &error),
            "mine count query failed: POST request to http://localhost? failed"
        );
    }

    #[test]
    fn test_renders_fallback_with_no_detail() {
        let error = ServiceError::unspecified();
        assert_eq!(
            render_failure("mining activity count query", &error),
            "mining activity count query failed: backend request failed with no further detail"
        );
    }

    #[test]
    fn test_empty_message_still_renders() {
        let error = ServiceError::from_message("");
        assert_eq!(
            render_failure("mineral occurrence count query", &error),
            "mineral occurrence count query failed: backend request failed with no further detail"
        );
    }
}
