//! Size filtering over a fetched catalog.

use crate::products::Product;

/// Size labels offered by the storefront's filter panel, in display order.
pub const SIZE_LABELS: [&str; 7] = ["XS", "S", "M", "ML", "L", "XL", "XXL"];

/// Returns the products offered in at least one of `sizes`.
///
/// An empty `sizes` slice means "no filter" and returns the whole catalog
/// unchanged. Catalog order is preserved.
#[must_use]
pub fn filter_by_sizes<S: AsRef<str>>(products: &[Product], sizes: &[S]) -> Vec<Product> {
    if sizes.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| p.has_any_size(sizes))
        .cloned()
        .collect()
}
