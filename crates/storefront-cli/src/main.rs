mod cart;
mod catalog;
mod source;

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use storefront_core::SIZE_LABELS;
use tracing_subscriber::EnvFilter;

use crate::source::ProductSource;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront catalog and price a cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered by size
    Catalog {
        /// Only show products available in this size (repeatable)
        #[arg(long = "size", value_parser = PossibleValuesParser::new(SIZE_LABELS))]
        sizes: Vec<String>,
        /// Read `products.json` from a local file instead of the API
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Print the products as JSON
        #[arg(long)]
        json: bool,
        /// Re-run the fetch once if it fails with a transient error
        #[arg(long)]
        retry: bool,
    },
    /// Build a cart from catalog SKUs and print its total
    Cart {
        /// SKUs to add, in order (a repeated SKU adds one more unit)
        #[arg(long, required = true, num_args = 1..)]
        add: Vec<u64>,
        /// SKUs whose quantity goes up by one (repeatable)
        #[arg(long)]
        increase: Vec<u64>,
        /// SKUs whose quantity goes down by one, never below one (repeatable)
        #[arg(long)]
        decrease: Vec<u64>,
        /// SKUs to drop from the cart (repeatable)
        #[arg(long)]
        remove: Vec<u64>,
        /// Read `products.json` from a local file instead of the API
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Print the cart and its total as JSON
        #[arg(long)]
        json: bool,
        /// Re-run the fetch once if it fails with a transient error
        #[arg(long)]
        retry: bool,
    },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = storefront_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "storefront starting");

    match cli.command {
        Commands::Catalog {
            sizes,
            fixture,
            json,
            retry,
        } => {
            let source = ProductSource::new(&config, fixture)?;
            catalog::run_catalog(&source, &sizes, json, retry).await
        }
        Commands::Cart {
            add,
            increase,
            decrease,
            remove,
            fixture,
            json,
            retry,
        } => {
            let source = ProductSource::new(&config, fixture)?;
            let ops = cart::CartOps {
                add,
                increase,
                decrease,
                remove,
            };
            cart::run_cart(&source, &ops, json, retry).await
        }
    }
}
