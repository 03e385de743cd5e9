//! Where the CLI gets its catalog from: the live API or a local fixture.

use std::future::Future;
use std::path::{Path, PathBuf};

use storefront_catalog::{ApiError, CatalogClient, CatalogSource};
use storefront_core::{AppConfig, Product};

#[derive(Debug)]
pub(crate) enum ProductSource {
    Remote(CatalogClient),
    Fixture(PathBuf),
}

impl ProductSource {
    /// Uses `fixture` when given, otherwise a client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot back a client.
    pub(crate) fn new(config: &AppConfig, fixture: Option<PathBuf>) -> anyhow::Result<Self> {
        match fixture {
            Some(path) => Ok(Self::Fixture(path)),
            None => Ok(Self::Remote(CatalogClient::from_config(config)?)),
        }
    }
}

impl CatalogSource for ProductSource {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> {
        async move {
            match self {
                Self::Remote(client) => client.fetch_catalog().await,
                Self::Fixture(path) => read_fixture(path).await,
            }
        }
    }
}

async fn read_fixture(path: &Path) -> Result<Vec<Product>, ApiError> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ApiError {
            message: format!("could not read fixture {}: {e}", path.display()),
            status: None,
            code: None,
            retryable: false,
        })?;
    CatalogClient::parse_catalog(&body).map_err(ApiError::from)
}
