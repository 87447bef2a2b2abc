//! HTTP catalog client implementation.
//!
//! Uses `reqwest` for HTTP and caches product reads with `moka`
//! (5-minute TTL). Stock reads are never cached.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use dragonfruit_core::ProductId;

use super::{CatalogError, Product, ProductCatalog, StockRecord};

/// Client for the product catalog API.
///
/// Cheaply cloneable; clones share the HTTP connection pool and the
/// product cache.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<ProductId, Product>,
}

impl HttpCatalog {
    /// Create a new catalog client for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(HttpCatalogInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    /// Execute a GET request and decode the JSON response.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url));
        }

        // Get the response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                Err(CatalogError::Parse(e))
            }
        }
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, id: ProductId) {
        self.inner.cache.invalidate(&id).await;
    }

    /// Invalidate all cached products.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        // Check cache
        if let Some(product) = self.inner.cache.get(&id).await {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let product: Product = self.fetch(&format!("products/{id}")).await?;

        // Cache the result
        self.inner.cache.insert(id, product.clone()).await;

        Ok(product)
    }

    /// Get the stock count for a product.
    ///
    /// Not cached - quantity validation always sees the catalog's
    /// current count.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not found or the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    async fn stock(&self, id: ProductId) -> Result<StockRecord, CatalogError> {
        self.fetch(&format!("stock/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn product_body() -> serde_json::Value {
        json!({
            "id": 1,
            "title": "Trail Runner",
            "price": "179.90",
            "imageUrl": "https://cdn.example.com/shoes/1.jpg"
        })
    }

    fn stock_body() -> serde_json::Value {
        json!({ "productId": 1, "amount": 3 })
    }

    #[tokio::test]
    async fn test_fetches_product() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_body()))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let product = catalog.product(ProductId::new(1)).await.expect("product");

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Trail Runner");
        assert_eq!(product.price.to_string(), "$179.90");
    }

    #[tokio::test]
    async fn test_fetches_stock() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stock_body()))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let stock = catalog.stock(ProductId::new(1)).await.expect("stock");

        assert_eq!(stock.product_id, ProductId::new(1));
        assert_eq!(stock.amount, 3);
    }

    #[tokio::test]
    async fn test_product_is_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_body()))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let first = catalog.product(ProductId::new(1)).await.expect("first");
        let second = catalog.product(ProductId::new(1)).await.expect("second");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_invalidate_product_forces_refetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product_body()))
            .expect(2)
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        catalog.product(ProductId::new(1)).await.expect("first");
        catalog.invalidate_product(ProductId::new(1)).await;
        catalog.product(ProductId::new(1)).await.expect("second");
    }

    #[tokio::test]
    async fn test_stock_is_never_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stock_body()))
            .expect(2)
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        catalog.stock(ProductId::new(1)).await.expect("first");
        catalog.stock(ProductId::new(1)).await.expect("second");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let server = MockServer::start().await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog
            .product(ProductId::new(99))
            .await
            .expect_err("should fail");

        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/1"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog
            .stock(ProductId::new(1))
            .await
            .expect_err("should fail");

        assert!(matches!(err, CatalogError::RateLimited(30)));
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog
            .stock(ProductId::new(1))
            .await
            .expect_err("should fail");

        assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stock/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog
            .stock(ProductId::new(1))
            .await
            .expect_err("should fail");

        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
