//! Response envelope for `GET /products.json`.
//!
//! The endpoint wraps the product list twice:
//!
//! ```json
//! { "data": { "products": [ { "sku": 1, ... } ] } }
//! ```
//!
//! Both levels are modelled as optional so a missing key surfaces as a
//! terminal "invalid payload" instead of a generic deserialization error.

use serde::Deserialize;
use storefront_core::Product;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Option<CatalogData>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}
