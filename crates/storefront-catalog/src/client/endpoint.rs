//! Catalog endpoint URL construction.

use reqwest::Url;

use crate::error::CatalogError;

const CATALOG_PATH: &str = "products.json";

/// Builds the `products.json` URL under `base_url`.
///
/// The base may carry a path prefix (`https://host/api/`); the catalog path is
/// appended after it with exactly one slash. Only `http` and `https` bases
/// are accepted.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidBaseUrl`] if the result is not a valid
/// http(s) URL.
pub fn products_url(base_url: &str) -> Result<Url, CatalogError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/{CATALOG_PATH}")).map_err(|e| {
        CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        }
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", url.scheme()),
        });
    }

    Ok(url)
}
