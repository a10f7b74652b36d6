//! Driven port for issuing one request against the dashboard backend.
//!
//! The domain owns the request shape and the failure taxonomy so the client
//! can decide on fallbacks without knowing which HTTP stack sits behind the
//! port.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::define_port_failure;
use crate::domain::caller::IdentityHeaders;

/// HTTP method used for a resource request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
}

/// One fully resolved backend request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRequest {
    /// Method to issue.
    pub method: RequestMethod,
    /// Absolute target URL.
    pub url: Url,
    /// Caller identity headers.
    pub identity: IdentityHeaders,
    /// JSON body for creation requests.
    pub body: Option<Value>,
}

define_port_failure! {
    /// Reasons a backend request produced no usable record.
    pub enum TransportFailure {
        /// The request never produced a response (DNS, refused, reset).
        Transport { message: String } =>
            "backend transport failed: {message}",
        /// The request exceeded a timeout imposed below this layer.
        Timeout { message: String } =>
            "backend request timed out: {message}",
        /// The backend answered with a non-success status.
        Status { status: u16, message: String } =>
            "backend returned status {status}: {message}",
        /// The response body did not decode into the expected record.
        Decode { message: String } =>
            "backend response decode failed: {message}",
        /// The request could not be built (for example, an unencodable header).
        InvalidRequest { message: String } =>
            "backend request invalid: {message}",
    }
}

impl TransportFailure {
    /// HTTP status code when the backend answered.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend reported the record as absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Port for sending one request and returning the raw success body.
///
/// Implementations issue exactly one attempt and map every non-success
/// outcome, including non-2xx statuses, to a [`TransportFailure`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    /// Send `request` and return the response body bytes.
    async fn send(&self, request: &ResourceRequest) -> Result<Vec<u8>, TransportFailure>;
}

#[cfg(test)]
mod tests {
    //! Failure classification coverage.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::transport(TransportFailure::transport("refused"), "transport", None)]
    #[case::timeout(TransportFailure::timeout("30s"), "timeout", None)]
    #[case::status(TransportFailure::status(503_u16, "down"), "status", Some(503))]
    #[case::decode(TransportFailure::decode("eof"), "decode", None)]
    #[case::invalid(TransportFailure::invalid_request("header"), "invalid_request", None)]
    fn failures_expose_class_and_status(
        #[case] failure: TransportFailure,
        #[case] class: &str,
        #[case] status: Option<u16>,
    ) {
        assert_eq!(failure.class(), class);
        assert_eq!(failure.http_status(), status);
    }

    #[test]
    fn only_404_counts_as_not_found() {
        assert!(TransportFailure::status(404_u16, "missing").is_not_found());
        assert!(!TransportFailure::status(500_u16, "boom").is_not_found());
        assert!(!TransportFailure::transport("refused").is_not_found());
    }
}
