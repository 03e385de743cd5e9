use rust_decimal::{Decimal, RoundingStrategy};

use crate::products::CurrencyId;

/// Formats `amount` with two decimal places for display next to a currency
/// symbol. `BRL` amounts use a decimal comma.
#[must_use]
pub fn format_price(amount: Decimal, currency: CurrencyId) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{rounded:.2}");
    match currency {
        CurrencyId::Brl => fixed.replace('.', ","),
        CurrencyId::Usd | CurrencyId::Eur => fixed,
    }
}
