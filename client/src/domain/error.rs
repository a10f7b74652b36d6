//! Errors surfaced to callers of the resource client.
//!
//! Transport failures never appear here: they are absorbed by the client and
//! replaced with synthesized records. Only faults the caller or operator must
//! fix are reported.

use thiserror::Error;

/// The client cannot be used as configured.
///
/// Raised before any network activity takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No base URL was supplied.
    #[error("backend base URL is not configured (set DASHBOARD_API_BASE_URL)")]
    MissingBaseUrl,
    /// The supplied base URL cannot address REST resources.
    #[error("backend base URL '{value}' is invalid: {message}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    HttpClient {
        /// Builder error description.
        message: String,
    },
}

/// The caller record carries neither an `id` nor an `email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("caller has neither an id nor an email to identify the request")]
pub struct MissingIdentityError;

/// Errors returned by [`crate::ResourceClient`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Client configuration is unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The caller cannot be identified to the backend.
    #[error(transparent)]
    MissingIdentity(#[from] MissingIdentityError),
}
