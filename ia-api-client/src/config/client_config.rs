//! Client configuration, built explicitly or loaded from the environment.
//!
//! # Environment variables
//! - `IA_API_BASE_URL` = backend origin, e.g. `http://localhost:5000` (mandatory)

use crate::error_handler::{Result, must_env, validate_http_endpoint};

/// Environment variable holding the backend origin.
pub const BASE_URL_VAR: &str = "IA_API_BASE_URL";

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// Endpoint paths are fixed; only the origin they are joined to is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Backend origin without a trailing slash (e.g. `"https://infoasst.example.com"`).
    pub base_url: String,
}

impl ApiClientConfig {
    /// Builds a config from an explicit origin.
    ///
    /// # Errors
    /// [`ConfigError::InvalidFormat`](crate::ConfigError::InvalidFormat) if the
    /// origin does not start with `http://` or `https://`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        validate_http_endpoint(BASE_URL_VAR, trimmed)?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Loads the config strictly from the environment.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`](crate::ConfigError::MissingVar) if `IA_API_BASE_URL` is unset
    /// - [`ConfigError::InvalidFormat`](crate::ConfigError::InvalidFormat) if it is not an http(s) URL
    pub fn from_env() -> Result<Self> {
        Self::new(must_env(BASE_URL_VAR)?)
    }

    /// Joins an endpoint path (starting with `/`) to the origin.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
