use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies the storefront knows how to format.
///
/// Deserialization is lenient: any unrecognised code falls back to
/// [`CurrencyId::Usd`], the storefront's default currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum CurrencyId {
    #[default]
    Usd,
    Brl,
    Eur,
}

impl CurrencyId {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            CurrencyId::Usd => "USD",
            CurrencyId::Brl => "BRL",
            CurrencyId::Eur => "EUR",
        }
    }

    /// Display symbol used when a product carries no `currencyFormat`.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            CurrencyId::Usd => "$",
            CurrencyId::Brl => "R$",
            CurrencyId::Eur => "€",
        }
    }
}

impl From<String> for CurrencyId {
    fn from(code: String) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "BRL" => CurrencyId::Brl,
            "EUR" => CurrencyId::Eur,
            _ => CurrencyId::Usd,
        }
    }
}

impl From<CurrencyId> for &'static str {
    fn from(currency: CurrencyId) -> Self {
        currency.code()
    }
}

impl std::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn default_currency_format() -> String {
    CurrencyId::Usd.symbol().to_string()
}

/// A catalog item as served by the storefront's `products.json`.
///
/// Products are immutable once fetched; a new fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique identifier; also the cart line-item identity.
    pub sku: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub currency_id: CurrencyId,
    #[serde(default = "default_currency_format")]
    pub currency_format: String,
    /// Number of interest-free installments offered for this product.
    #[serde(default)]
    pub installments: u32,
    #[serde(default)]
    pub is_free_shipping: bool,
    /// Size labels in display order, e.g. `["S", "M", "L"]`.
    pub available_sizes: Vec<String>,
}

/// Highest unit price a catalog entry may carry.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A product record that deserialized but breaks a catalog invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProduct {
    #[error("product sku must be positive")]
    ZeroSku,

    #[error("product {sku} has a negative price")]
    NegativePrice { sku: u64 },

    #[error("product {sku} has a price above 1000000000")]
    PriceTooHigh { sku: u64 },

    #[error("product {sku} lists no available sizes")]
    NoSizes { sku: u64 },
}

impl Product {
    /// Checks the invariants a fetched catalog entry must hold.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidProduct`] violation found.
    pub fn validate(&self) -> Result<(), InvalidProduct> {
        if self.sku == 0 {
            return Err(InvalidProduct::ZeroSku);
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(InvalidProduct::NegativePrice { sku: self.sku });
        }
        if self.price > MAX_PRICE {
            return Err(InvalidProduct::PriceTooHigh { sku: self.sku });
        }
        if self.available_sizes.is_empty() {
            return Err(InvalidProduct::NoSizes { sku: self.sku });
        }
        Ok(())
    }

    /// Returns `true` if the product is offered in any of `sizes`.
    #[must_use]
    pub fn has_any_size<S: AsRef<str>>(&self, sizes: &[S]) -> bool {
        self.available_sizes
            .iter()
            .any(|available| sizes.iter().any(|s| s.as_ref() == available))
    }
}
