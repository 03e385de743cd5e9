//! `catalog` command: fetch, filter and list products.

use rust_decimal::Decimal;
use storefront_catalog::{ApiError, CatalogSource, CatalogState};
use storefront_core::{format_price, Product};

/// Fetches the catalog into a fresh [`CatalogState`].
///
/// With `retry`, a transient failure gets one more full fetch round.
///
/// # Errors
///
/// Returns the user-facing failure text when the catalog cannot be loaded.
pub(crate) async fn load_catalog<S: CatalogSource>(
    source: &S,
    retry: bool,
) -> anyhow::Result<CatalogState> {
    let mut state = CatalogState::new();
    if let Err(err) = state.fetch_products(source).await {
        if !(retry && err.is_retryable()) {
            anyhow::bail!(failure_text(&err));
        }
        tracing::info!("retrying product fetch");
        if let Some(Err(err)) = state.retry_fetch(source).await {
            anyhow::bail!(failure_text(&err));
        }
    }
    Ok(state)
}

/// The error message, plus a hint when trying again may help.
pub(crate) fn failure_text(err: &ApiError) -> String {
    if err.is_retryable() {
        format!("{} (this looks temporary, try again)", err.message)
    } else {
        err.message.clone()
    }
}

/// Lists catalog products matching `sizes`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or serialized.
pub(crate) async fn run_catalog<S: CatalogSource>(
    source: &S,
    sizes: &[String],
    json: bool,
    retry: bool,
) -> anyhow::Result<()> {
    let mut state = load_catalog(source, retry).await?;
    state.set_filters(sizes.iter().cloned());
    let products = state.visible_products();

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!("{} Product(s) found", products.len());
    if products.is_empty() {
        return Ok(());
    }
    println!("{:<20}{:<12}{:<22}TITLE", "SKU", "PRICE", "SIZES");
    for product in &products {
        println!("{}", product_line(product));
    }
    Ok(())
}

pub(crate) fn product_line(product: &Product) -> String {
    let mut line = format!(
        "{:<20}{:<12}{:<22}{}",
        product.sku,
        price_label(product),
        product.available_sizes.join(","),
        product.title
    );
    if let Some(offer) = installment_offer(product) {
        line.push_str(&format!(" ({offer})"));
    }
    if product.is_free_shipping {
        line.push_str(" [free shipping]");
    }
    line
}

/// `"or 9 x $ 1.21"` for products sold in more than one installment.
pub(crate) fn installment_offer(product: &Product) -> Option<String> {
    if product.installments <= 1 {
        return None;
    }
    let per_installment = product.price / Decimal::from(product.installments);
    Some(format!(
        "or {} x {} {}",
        product.installments,
        product.currency_format,
        format_price(per_installment, product.currency_id)
    ))
}

pub(crate) fn price_label(product: &Product) -> String {
    format!(
        "{} {}",
        product.currency_format,
        format_price(product.price, product.currency_id)
    )
}
