//! Derived cart totals.
//!
//! [`CartTotal`] is never stored independently of the line items it
//! summarises: [`crate::Cart`] recomputes it with [`CartTotal::from_line_items`]
//! after every mutation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartLineItem;
use crate::format::format_price;
use crate::products::CurrencyId;

/// Subtotal summary shown in the cart footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotal {
    /// Sum of every line item's quantity.
    pub product_quantity: u64,
    /// Most generous installment offer across line items (not a sum).
    pub installments: u32,
    /// Sum of `price * quantity` over line items.
    pub total_price: Decimal,
    pub currency_id: CurrencyId,
    pub currency_format: String,
}

impl Default for CartTotal {
    fn default() -> Self {
        Self {
            product_quantity: 0,
            installments: 0,
            total_price: Decimal::ZERO,
            currency_id: CurrencyId::Usd,
            currency_format: CurrencyId::Usd.symbol().to_string(),
        }
    }
}

impl CartTotal {
    /// Reduces a line-item collection to its total.
    ///
    /// The storefront sells in a single currency, so the result is always
    /// tagged `USD` / `$` regardless of the products' own currency fields.
    /// Sums saturate at [`Decimal::MAX`] and `u64::MAX`.
    #[must_use]
    pub fn from_line_items(items: &[CartLineItem]) -> Self {
        items.iter().fold(Self::default(), |mut total, item| {
            total.product_quantity = total
                .product_quantity
                .saturating_add(u64::from(item.quantity));
            total.total_price = total.total_price.saturating_add(item.line_total());
            total.installments = total.installments.max(item.product.installments);
            total
        })
    }

    /// Formatted subtotal, e.g. `"$ 10.90"`.
    #[must_use]
    pub fn subtotal_label(&self) -> String {
        format!(
            "{} {}",
            self.currency_format,
            format_price(self.total_price, self.currency_id)
        )
    }

    /// The "up to N installments" banner, or `None` when no line item
    /// offers installments.
    #[must_use]
    pub fn installment_banner(&self) -> Option<String> {
        if self.installments == 0 {
            return None;
        }
        let per_installment = self.total_price / Decimal::from(self.installments);
        Some(format!(
            "OR UP TO {} x {} {}",
            self.installments,
            self.currency_format,
            format_price(per_installment, self.currency_id)
        ))
    }

    /// Message shown when the shopper presses checkout.
    #[must_use]
    pub fn checkout_message(&self) -> String {
        if self.product_quantity == 0 {
            "Add some product in the cart!".to_string()
        } else {
            format!("Checkout - Subtotal: {}", self.subtotal_label())
        }
    }
}
