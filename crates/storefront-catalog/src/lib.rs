pub mod client;
pub mod error;
mod retry;
pub mod state;
pub mod types;

pub use client::CatalogClient;
pub use error::{ApiError, CatalogError, ErrorKind};
pub use state::{CatalogSource, CatalogState};
