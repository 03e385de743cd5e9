pub mod app_config;
pub mod cart;
pub mod config;
pub mod filter;
pub mod format;
pub mod products;
pub mod total;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartLineItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{filter_by_sizes, SIZE_LABELS};
pub use format::format_price;
pub use products::{CurrencyId, InvalidProduct, Product, MAX_PRICE};
pub use total::CartTotal;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
