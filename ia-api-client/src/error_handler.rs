//! Unified error handling for `ia-api-client`.
//!
//! This module exposes a single top-level error type [`ApiClientError`] for the
//! whole library. Request-level failures (non-success status, or an `error`
//! field reported by the backend) collapse into [`ApiClientError::RequestFailed`];
//! the remaining variants cover transport, decoding and configuration.
//!
//! Small helpers for reading/validating environment variables are provided and
//! return the unified [`Result<T>`] alias.

use thiserror::Error;

/// Message used when the backend fails without an `error` text.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Max characters kept from a response body in logs.
const SNIPPET_MAX_CHARS: usize = 240;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, ApiClientError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `ia-api-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The backend answered with a non-success status, or with a success
    /// status and a populated `error` field. Renders as the bare message.
    #[error("{message}")]
    RequestFailed {
        /// Backend-supplied error text, or [`UNKNOWN_ERROR`].
        message: String,
    },

    /// Underlying HTTP transport error (connect, DNS, reset, body read).
    #[error("[IA API Client] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Response body was not JSON, or did not match the expected shape.
    #[error("[IA API Client] decode error on {endpoint}: {source}")]
    Decode {
        /// Endpoint path the body came from (e.g. `/ask`).
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration/validation errors (client construction).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiClientError {
    /// Builds a [`ApiClientError::RequestFailed`] from an optional backend
    /// message, falling back to [`UNKNOWN_ERROR`] when absent or empty.
    pub fn request_failed(message: Option<&str>) -> Self {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => UNKNOWN_ERROR.to_string(),
        };
        ApiClientError::RequestFailed { message }
    }

    /// Caller-facing text for this error.
    pub fn message(&self) -> String {
        match self {
            ApiClientError::RequestFailed { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[IA API Client] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[IA API Client] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable or field name (e.g., `IA_API_BASE_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ApiClientError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ApiClientError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims a response body to a short, single-line snippet for logging.
pub fn make_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= SNIPPET_MAX_CHARS {
        flat
    } else {
        let head: String = flat.chars().take(SNIPPET_MAX_CHARS).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_prefers_backend_message() {
        let err = ApiClientError::request_failed(Some("bad index"));
        assert_eq!(err.to_string(), "bad index");
        assert_eq!(err.message(), "bad index");
    }

    #[test]
    fn request_failed_falls_back_to_unknown() {
        assert_eq!(ApiClientError::request_failed(None).to_string(), UNKNOWN_ERROR);
        assert_eq!(
            ApiClientError::request_failed(Some("")).to_string(),
            UNKNOWN_ERROR
        );
    }

    #[test]
    fn endpoint_scheme_is_checked() {
        assert!(validate_http_endpoint("X", "http://localhost:5000").is_ok());
        assert!(validate_http_endpoint("X", "https://app.example.com").is_ok());
        let err = validate_http_endpoint("X", "localhost:5000").unwrap_err();
        assert!(matches!(
            err,
            ApiClientError::Config(ConfigError::InvalidFormat { var: "X", .. })
        ));
    }

    #[test]
    fn snippet_is_flattened_and_capped() {
        assert_eq!(make_snippet("a\n  b\tc"), "a b c");
        let long = "x".repeat(1000);
        let s = make_snippet(&long);
        assert_eq!(s.chars().count(), SNIPPET_MAX_CHARS + 1);
        assert!(s.ends_with('…'));
    }
}
