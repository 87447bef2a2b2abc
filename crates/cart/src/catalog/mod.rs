//! Product catalog access.
//!
//! The catalog is the remote authority for product records and stock counts.
//! [`ProductCatalog`] is the seam the cart store depends on; [`HttpCatalog`]
//! is the production implementation over the catalog's JSON API.

mod http;
pub mod types;

pub use http::HttpCatalog;
pub use types::{Product, StockRecord};

use async_trait::async_trait;
use thiserror::Error;

use dragonfruit_core::ProductId;

/// Remote product and stock lookup service.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch a product record by id.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch the available stock for a product.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, CatalogError>;
}

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}
