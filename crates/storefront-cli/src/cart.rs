//! `cart` command: build a cart from SKUs and print its total.

use storefront_catalog::{CatalogSource, CatalogState};
use storefront_core::{format_price, Cart, Product};

use crate::catalog::{load_catalog, price_label};

/// Cart edits, applied in field order.
#[derive(Debug, Default)]
pub(crate) struct CartOps {
    pub add: Vec<u64>,
    pub increase: Vec<u64>,
    pub decrease: Vec<u64>,
    pub remove: Vec<u64>,
}

/// Loads the catalog, applies `ops` to an empty cart, and prints it as text
/// or JSON.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or an SKU is not in it.
pub(crate) async fn run_cart<S: CatalogSource>(
    source: &S,
    ops: &CartOps,
    json: bool,
    retry: bool,
) -> anyhow::Result<()> {
    let state = load_catalog(source, retry).await?;
    let cart = build_cart(&state, ops)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cart)?);
    } else {
        print!("{}", render_cart(&cart));
    }
    Ok(())
}

/// Applies `ops` to an empty cart: adds, then increases, then decreases,
/// then removals.
///
/// # Errors
///
/// Returns an error naming the first SKU that is not in the catalog.
pub(crate) fn build_cart(state: &CatalogState, ops: &CartOps) -> anyhow::Result<Cart> {
    let mut cart = Cart::new();
    for &sku in &ops.add {
        cart.add_product(lookup(state, sku)?);
    }
    for &sku in &ops.increase {
        cart.increase_product_quantity(lookup(state, sku)?);
    }
    for &sku in &ops.decrease {
        cart.decrease_product_quantity(lookup(state, sku)?);
    }
    for &sku in &ops.remove {
        cart.remove_product(lookup(state, sku)?);
    }

    tracing::debug!(
        lines = cart.products().len(),
        quantity = cart.total().product_quantity,
        "cart built"
    );
    Ok(cart)
}

fn lookup(state: &CatalogState, sku: u64) -> anyhow::Result<&Product> {
    state
        .product(sku)
        .ok_or_else(|| anyhow::anyhow!("sku {sku} is not in the catalog"))
}

pub(crate) fn render_cart(cart: &Cart) -> String {
    let total = cart.total();
    let mut lines = vec![format!("CART ({})", total.product_quantity)];

    if cart.is_empty() {
        lines.push("Add some products in the cart :)".to_string());
    }
    for item in cart.products() {
        lines.push(format!(
            "{:>4} x {:<20}{:<12}{}",
            item.quantity,
            item.sku(),
            price_label(&item.product),
            item.product.title
        ));
        if item.quantity > 1 {
            lines.push(format!(
                "       line total {} {}",
                item.product.currency_format,
                format_price(item.line_total(), item.product.currency_id)
            ));
        }
    }

    lines.push(format!("SUBTOTAL {}", total.subtotal_label()));
    lines.extend(total.installment_banner());
    lines.push(total.checkout_message());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
