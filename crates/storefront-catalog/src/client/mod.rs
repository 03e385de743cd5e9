//! HTTP client for the storefront's `products.json` endpoint.

mod endpoint;

use std::time::Duration;

use reqwest::{Client, Url};
use storefront_core::{AppConfig, Product};

use crate::error::{ApiError, CatalogError};
use crate::retry::retry_with_backoff;
use crate::types::CatalogResponse;

pub use endpoint::products_url;

/// Fetches the product catalog with timeout, classification, and retry.
///
/// Every call re-fetches; there is no caching layer. Retryable failures
/// (5xx, 429, transport errors) are retried with exponential backoff up to
/// `max_attempts` total attempts. Terminal failures (other 4xx, malformed
/// payloads) are returned after the first attempt.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    products_url: Url,
    /// Total attempts per fetch, including the first.
    max_attempts: u32,
    /// Base delay for exponential backoff: `backoff_base_ms * 2^(attempt - 1)`.
    backoff_base_ms: u64,
}

impl CatalogClient {
    /// Creates a client for `{base_url}/products.json`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `base_url` is not an
    /// http(s) URL, or [`CatalogError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout_ms: u64,
        user_agent: &str,
        max_attempts: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, CatalogError> {
        let products_url = products_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            products_url,
            max_attempts: max_attempts.max(1),
            backoff_base_ms,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_ms,
            &config.user_agent,
            config.retry_attempts,
            config.retry_delay_ms,
        )
    }

    #[must_use]
    pub fn products_url(&self) -> &str {
        self.products_url.as_str()
    }

    /// Fetches the catalog and flattens any failure into an [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] of the last attempt. `retryable`
    /// is `true` when the failure was transient, even after the attempt
    /// budget ran out.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        self.try_fetch_catalog().await.map_err(|err| {
            let api_error = ApiError::from(&err);
            tracing::error!(
                url = %self.products_url,
                status = ?api_error.status,
                code = ?api_error.code,
                retryable = api_error.retryable,
                error = %err,
                "error fetching products"
            );
            api_error
        })
    }

    /// Fetches the catalog, keeping the typed [`CatalogError`].
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Status`]: non-2xx status (5xx and 429 retried first).
    /// - [`CatalogError::Http`]: transport failure after all attempts.
    /// - [`CatalogError::Deserialize`] / [`CatalogError::InvalidPayload`]:
    ///   body is not a valid product list (not retried).
    pub async fn try_fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        retry_with_backoff(self.max_attempts, self.backoff_base_ms, || {
            self.fetch_once()
        })
        .await
    }

    async fn fetch_once(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(url = %self.products_url, "making request for product catalog");

        let response = self
            .client
            .get(self.products_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;
        let status = response.status();

        tracing::debug!(
            url = %self.products_url,
            status = status.as_u16(),
            "response received for product catalog"
        );

        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.products_url.to_string(),
            });
        }

        let body = response.text().await?;
        Self::parse_catalog(&body)
    }

    /// Parses and validates a `products.json` body.
    ///
    /// Accepts `{ "data": { "products": [...] } }` where every product holds
    /// the catalog invariants (positive sku, non-negative price, at least
    /// one size).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Deserialize`] if the body is not JSON or a product
    ///   record does not match the schema.
    /// - [`CatalogError::InvalidPayload`] if `data.products` is missing or a
    ///   product breaks an invariant.
    pub fn parse_catalog(body: &str) -> Result<Vec<Product>, CatalogError> {
        let parsed: CatalogResponse =
            serde_json::from_str(body).map_err(|e| CatalogError::Deserialize {
                context: "products.json".to_owned(),
                source: e,
            })?;

        let products = parsed
            .data
            .and_then(|data| data.products)
            .ok_or_else(|| CatalogError::InvalidPayload {
                reason: "response has no data.products list".to_owned(),
            })?;

        for product in &products {
            product
                .validate()
                .map_err(|e| CatalogError::InvalidPayload {
                    reason: e.to_string(),
                })?;
        }

        Ok(products)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
