//! Catalog session state held by the UI layer.
//!
//! [`CatalogState`] is the explicit owner of the fetched catalog, the active
//! size filters, and the last fetch error. It is mutated only through its
//! methods and driven by any [`CatalogSource`].

use std::future::Future;

use storefront_core::{filter_by_sizes, Product};

use crate::client::CatalogClient;
use crate::error::ApiError;

/// Anything that can produce the product catalog.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>>;
}

impl CatalogSource for CatalogClient {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> {
        CatalogClient::fetch_catalog(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    filters: Vec<String>,
    error: Option<ApiError>,
    has_retried: bool,
}

impl CatalogState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full catalog from the last successful fetch.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// `true` while the current error survived a [`CatalogState::retry_fetch`].
    ///
    /// Reset by a successful fetch and by [`CatalogState::clear_error`].
    #[must_use]
    pub fn has_retried(&self) -> bool {
        self.has_retried
    }

    /// Finds a catalog product by sku.
    #[must_use]
    pub fn product(&self, sku: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Fetches a fresh catalog from `source`, replacing the current one.
    ///
    /// On failure the product list is cleared and the error is kept for
    /// display until the next fetch or [`CatalogState::clear_error`]. On
    /// success the retry marker is reset.
    ///
    /// # Errors
    ///
    /// Returns a copy of the [`ApiError`] now stored in the state.
    pub async fn fetch_products<S: CatalogSource>(
        &mut self,
        source: &S,
    ) -> Result<usize, ApiError> {
        self.error = None;
        match source.fetch_catalog().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "product catalog loaded");
                self.products = products;
                self.has_retried = false;
                Ok(self.products.len())
            }
            Err(err) => {
                self.products.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Re-runs the fetch if, and only if, the current error is retryable.
    ///
    /// Returns `None` when there was nothing to retry.
    pub async fn retry_fetch<S: CatalogSource>(
        &mut self,
        source: &S,
    ) -> Option<Result<usize, ApiError>> {
        if !self.error.as_ref().is_some_and(ApiError::is_retryable) {
            return None;
        }
        self.has_retried = true;
        Some(self.fetch_products(source).await)
    }

    pub fn set_filters<I, S>(&mut self, sizes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = sizes.into_iter().map(Into::into).collect();
    }

    /// Catalog products matching the active size filters.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        filter_by_sizes(&self.products, &self.filters)
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.has_retried = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use rust_decimal::Decimal;
    use storefront_core::CurrencyId;

    use super::*;

    /// Replays a fixed sequence of fetch outcomes.
    struct ScriptedSource {
        outcomes: RefCell<VecDeque<Result<Vec<Product>, ApiError>>>,
    }

    impl ScriptedSource {
        fn new(outcomes: Vec<Result<Vec<Product>, ApiError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
            }
        }
    }

    impl CatalogSource for ScriptedSource {
        fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> {
            let next = self
                .outcomes
                .borrow_mut()
                .pop_front()
                .expect("scripted source ran out of outcomes");
            async move { next }
        }
    }

    fn make_product(sku: u64, sizes: &[&str]) -> Product {
        Product {
            id: None,
            sku,
            title: format!("product {sku}"),
            description: None,
            style: None,
            price: Decimal::TEN,
            currency_id: CurrencyId::Usd,
            currency_format: "$".to_string(),
            installments: 0,
            is_free_shipping: false,
            available_sizes: sizes.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn api_error(retryable: bool) -> ApiError {
        ApiError {
            message: "Server error. Please try again later.".to_string(),
            status: Some(if retryable { 500 } else { 404 }),
            code: None,
            retryable,
        }
    }

    #[tokio::test]
    async fn successful_fetch_stores_products() {
        let source = ScriptedSource::new(vec![Ok(vec![
            make_product(1, &["S"]),
            make_product(2, &["M"]),
        ])]);
        let mut state = CatalogState::new();

        let count = state.fetch_products(&source).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(state.products().len(), 2);
        assert!(state.error().is_none());
        assert_eq!(state.product(2).map(|p| p.sku), Some(2));
    }

    #[tokio::test]
    async fn failed_fetch_clears_products_and_keeps_error() {
        let source = ScriptedSource::new(vec![
            Ok(vec![make_product(1, &["S"])]),
            Err(api_error(false)),
        ]);
        let mut state = CatalogState::new();
        state.fetch_products(&source).await.unwrap();

        let err = state.fetch_products(&source).await.unwrap_err();

        assert!(state.products().is_empty());
        assert_eq!(state.error(), Some(&err));
    }

    #[tokio::test]
    async fn retry_fetch_runs_only_for_retryable_errors() {
        let source = ScriptedSource::new(vec![Err(api_error(false))]);
        let mut state = CatalogState::new();
        let _ = state.fetch_products(&source).await;

        assert!(state.retry_fetch(&source).await.is_none());
        assert!(!state.has_retried());
    }

    #[tokio::test]
    async fn retry_fetch_without_error_is_noop() {
        let source = ScriptedSource::new(vec![]);
        let mut state = CatalogState::new();
        assert!(state.retry_fetch(&source).await.is_none());
    }

    #[tokio::test]
    async fn retry_fetch_recovers_after_retryable_error() {
        let source = ScriptedSource::new(vec![
            Err(api_error(true)),
            Ok(vec![make_product(9, &["L"])]),
        ]);
        let mut state = CatalogState::new();
        let _ = state.fetch_products(&source).await;

        let outcome = state.retry_fetch(&source).await;

        assert_eq!(outcome, Some(Ok(1)));
        assert!(!state.has_retried(), "success resets the retry marker");
        assert!(state.error().is_none());
        assert_eq!(state.products().len(), 1);
    }

    #[tokio::test]
    async fn visible_products_apply_filters() {
        let source = ScriptedSource::new(vec![Ok(vec![
            make_product(1, &["S", "M"]),
            make_product(2, &["XL"]),
        ])]);
        let mut state = CatalogState::new();
        state.fetch_products(&source).await.unwrap();

        assert_eq!(state.visible_products().len(), 2, "no filter shows all");

        state.set_filters(["XL"]);
        let visible: Vec<u64> = state.visible_products().iter().map(|p| p.sku).collect();
        assert_eq!(visible, vec![2]);
        assert_eq!(state.filters(), ["XL".to_string()]);

        state.set_filters(Vec::<String>::new());
        assert_eq!(state.visible_products().len(), 2);
    }

    #[tokio::test]
    async fn failed_retry_keeps_retry_marker_until_cleared() {
        let source = ScriptedSource::new(vec![Err(api_error(true)), Err(api_error(true))]);
        let mut state = CatalogState::new();
        let _ = state.fetch_products(&source).await;

        let outcome = state.retry_fetch(&source).await;

        assert!(matches!(outcome, Some(Err(_))));
        assert!(state.has_retried());

        state.clear_error();
        assert!(state.error().is_none());
        assert!(!state.has_retried());
    }

    #[tokio::test]
    async fn later_successful_fetch_resets_retry_marker() {
        let source = ScriptedSource::new(vec![
            Err(api_error(true)),
            Err(api_error(true)),
            Ok(vec![make_product(3, &["M"])]),
        ]);
        let mut state = CatalogState::new();
        let _ = state.fetch_products(&source).await;
        let _ = state.retry_fetch(&source).await;
        assert!(state.has_retried());

        state.fetch_products(&source).await.unwrap();

        assert!(!state.has_retried());
    }

    #[test]
    fn clear_error_resets_error() {
        let mut state = CatalogState {
            error: Some(api_error(true)),
            has_retried: true,
            ..CatalogState::default()
        };
        state.clear_error();
        assert!(state.error().is_none());
        assert!(!state.has_retried());
    }
}
