//! Reqwest-backed resource transport.
//!
//! This adapter owns transport details only: identity headers, the shared
//! cookie store, HTTP status mapping and body previews for log messages.
//! Decoding and fallbacks happen in the domain client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};

use crate::config::ClientSettings;
use crate::domain::ports::{RequestMethod, ResourceRequest, ResourceTransport, TransportFailure};
use crate::domain::{ClientError, ConfigurationError, ResourceClient};

/// Resource transport issuing one reqwest call per request.
///
/// The wrapped client keeps a cookie store so session cookies set by the
/// backend accompany later requests.
#[derive(Debug, Clone)]
pub struct ReqwestResourceTransport {
    client: Client,
}

impl ReqwestResourceTransport {
    /// Build a transport sending `user_agent` on every request.
    /// ```rust,ignore
    /// let transport = ReqwestResourceTransport::new("dashboard-client/0.1.0");
    /// assert!(transport.is_ok() || transport.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Self::with_cookie_store(user_agent, true)
    }

    /// Build a transport, choosing whether backend cookies are replayed.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_cookie_store(user_agent: &str, cookie_store: bool) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .cookie_store(cookie_store)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResourceTransport for ReqwestResourceTransport {
    async fn send(&self, request: &ResourceRequest) -> Result<Vec<u8>, TransportFailure> {
        let headers = identity_headers(request)?;
        let method = match request.method {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
        };
        let mut builder = self
            .client
            .request(method, request.url.clone())
            .header(ACCEPT, "application/json")
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

impl ResourceClient<ReqwestResourceTransport> {
    /// Build a client from loaded settings.
    ///
    /// An unusable base URL is kept and reported by every operation, so
    /// construction only fails when the HTTP client itself cannot be built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::HttpClient`] when reqwest rejects the
    /// client configuration.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let transport = ReqwestResourceTransport::with_cookie_store(
            settings.user_agent(),
            !settings.disable_cookies,
        )
        .map_err(|error| ConfigurationError::HttpClient {
            message: error.to_string(),
        })?;
        Ok(Self::with_base_url(settings.base_url(), transport))
    }
}

fn identity_headers(request: &ResourceRequest) -> Result<HeaderMap, TransportFailure> {
    let mut headers = HeaderMap::with_capacity(2);
    for (name, raw) in request.identity.pairs() {
        let value = HeaderValue::from_str(raw).map_err(|error| {
            TransportFailure::invalid_request(format!("header {name} is not encodable: {error}"))
        })?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

fn map_transport_error(error: reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::timeout(error.to_string())
    } else {
        TransportFailure::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TransportFailure {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        body_preview
    };
    TransportFailure::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
