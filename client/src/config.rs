//! Client configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::ConfigurationError;

const DEFAULT_USER_AGENT: &str = concat!("dashboard-client/", env!("CARGO_PKG_VERSION"));

/// Settings locating the dashboard backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD_API")]
pub struct ClientSettings {
    /// Base URL the resource paths are appended to.
    pub base_url: Option<String>,
    /// Optional override for the `User-Agent` header.
    pub user_agent: Option<String>,
    /// Drop backend session cookies instead of replaying them.
    #[ortho_config(default = false)]
    pub disable_cookies: bool,
}

impl ClientSettings {
    /// Parse and validate the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingBaseUrl`] when the value is unset
    /// or blank, and [`ConfigurationError::InvalidBaseUrl`] when it is not an
    /// absolute `http`/`https` URL that can carry path segments.
    pub fn base_url(&self) -> Result<Url, ConfigurationError> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigurationError::MissingBaseUrl)?;
        let invalid = |message: String| ConfigurationError::InvalidBaseUrl {
            value: raw.to_owned(),
            message,
        };

        let url = Url::parse(raw).map_err(|error| invalid(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry path segments".to_owned()));
        }
        Ok(url)
    }

    /// Return the configured user agent, falling back to the crate default.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
    }
}
