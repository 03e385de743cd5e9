//! In-memory shopping cart.
//!
//! ## Line-item lifecycle
//! ```text
//! absent ──add──► quantity = 1 ──increase/decrease──► quantity = n (n ≥ 1)
//!    ▲                                                      │
//!    └──────────────────── remove (explicit only) ◄─────────┘
//! ```
//!
//! Decreasing a quantity-1 line leaves it at 1; only [`Cart::remove_product`]
//! takes a line out of the cart.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::products::Product;
use crate::total::CartTotal;

/// One product entry in the cart with its own quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a [`Cart`].
    pub quantity: u32,
}

impl CartLineItem {
    #[must_use]
    pub fn sku(&self) -> u64 {
        self.product.sku
    }

    /// Unit price × quantity, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Line items are unique by `sku` (adding the same product increases quantity).
/// - Every quantity is ≥ 1.
/// - `total` is exactly [`CartTotal::from_line_items`] of the current items;
///   fields are private so the only way to change either is through the
///   operations below, each of which recomputes the total.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    products: Vec<CartLineItem>,
    total: CartTotal,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn products(&self) -> &[CartLineItem] {
        &self.products
    }

    /// Snapshot of the derived total.
    #[must_use]
    pub fn total(&self) -> &CartTotal {
        &self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Quantity of `sku` in the cart, or `None` if it has no line.
    #[must_use]
    pub fn quantity_of(&self, sku: u64) -> Option<u32> {
        self.products
            .iter()
            .find(|item| item.sku() == sku)
            .map(|item| item.quantity)
    }

    /// Adds one unit of `product`, merging with an existing line of the same sku.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(item) = self.line_mut(product.sku) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.products.push(CartLineItem {
                product: product.clone(),
                quantity: 1,
            });
        }
        self.update_cart_total();
    }

    /// Removes the line matching `product`'s sku. No-op if absent.
    pub fn remove_product(&mut self, product: &Product) {
        self.products.retain(|item| item.sku() != product.sku);
        self.update_cart_total();
    }

    /// Adds one to the matching line's quantity. No-op if absent.
    pub fn increase_product_quantity(&mut self, product: &Product) {
        if let Some(item) = self.line_mut(product.sku) {
            item.quantity = item.quantity.saturating_add(1);
        }
        self.update_cart_total();
    }

    /// Subtracts one from the matching line's quantity, never going below 1.
    /// No-op if absent.
    pub fn decrease_product_quantity(&mut self, product: &Product) {
        if let Some(item) = self.line_mut(product.sku) {
            item.quantity = item.quantity.saturating_sub(1).max(1);
        }
        self.update_cart_total();
    }

    fn line_mut(&mut self, sku: u64) -> Option<&mut CartLineItem> {
        self.products.iter_mut().find(|item| item.sku() == sku)
    }

    fn update_cart_total(&mut self) {
        self.total = CartTotal::from_line_items(&self.products);
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;
