//! Error taxonomy for catalog fetches.
//!
//! [`CatalogError`] is the typed, internal classification produced while
//! talking to the endpoint. At the public boundary it is flattened into
//! [`ApiError`], the record the UI layer displays and decides on.

use serde::Serialize;
use thiserror::Error;

/// Message shown for any payload that is not a well-formed product list.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid products data received from server";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body is not JSON, or does not match the product schema.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but `data.products` is missing or breaks an invariant.
    #[error("invalid catalog payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl CatalogError {
    /// Returns `true` for failures worth another attempt after a back-off.
    ///
    /// **Retryable:** status ≥ 500, status 429, and every transport-level
    /// failure (timeout, connection refused, DNS, reset).
    ///
    /// **Terminal:** any other non-2xx status (4xx other than 429, 3xx),
    /// malformed payloads, and a bad base URL.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Http(_) => true,
            CatalogError::Status { status, .. } => *status >= 500 || *status == 429,
            CatalogError::Deserialize { .. }
            | CatalogError::InvalidPayload { .. }
            | CatalogError::InvalidBaseUrl { .. } => false,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            CatalogError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Transport error code, using the names browser HTTP clients report.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            CatalogError::Http(e) if e.is_timeout() => Some("ECONNABORTED"),
            CatalogError::Http(e) if e.is_connect() => Some("ERR_NETWORK"),
            CatalogError::Status { status, .. } if (400..500).contains(status) => {
                Some("ERR_BAD_REQUEST")
            }
            CatalogError::Status { status, .. } if *status >= 500 => Some("ERR_BAD_RESPONSE"),
            _ => None,
        }
    }

    /// Human-readable text for the shopper.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Status { status, .. } => status_message(*status),
            CatalogError::Http(e) if e.is_timeout() => {
                "Request timed out. Please check your connection and try again.".to_string()
            }
            CatalogError::Http(e) if e.is_connect() => {
                "Network error. Please check your internet connection and try again.".to_string()
            }
            CatalogError::Http(_) | CatalogError::InvalidBaseUrl { .. } => {
                "An unexpected error occurred. Please try again.".to_string()
            }
            CatalogError::Deserialize { .. } | CatalogError::InvalidPayload { .. } => {
                INVALID_PAYLOAD_MESSAGE.to_string()
            }
        }
    }
}

/// Maps an HTTP status to the message shown in the catalog error banner.
#[must_use]
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Invalid request. Please check your input.".to_string(),
        401 => "Authentication required. Please log in again.".to_string(),
        403 => "Access denied. You don't have permission to access this resource.".to_string(),
        404 => "Products not found. Please try again later.".to_string(),
        429 => "Too many requests. Please wait a moment and try again.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        502 => "Bad gateway. Please try again later.".to_string(),
        503 => "Service temporarily unavailable. Please try again later.".to_string(),
        other => format!("Request failed with status {other}. Please try again."),
    }
}

/// Whether a failed fetch may succeed if the shopper tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Retryable,
    Terminal,
}

/// A classified catalog failure as surfaced to the UI layer.
///
/// `retryable` stays `true` when automatic retries were exhausted, so the UI
/// can still offer a manual "try again".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub retryable: bool,
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        if self.retryable {
            ErrorKind::Retryable
        } else {
            ErrorKind::Terminal
        }
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl From<&CatalogError> for ApiError {
    fn from(err: &CatalogError) -> Self {
        ApiError {
            message: err.user_message(),
            status: err.status(),
            code: err.code().map(str::to_owned),
            retryable: err.is_retryable(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::from(&err)
    }
}
