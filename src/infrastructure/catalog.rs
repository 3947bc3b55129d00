use crate::domain::{FeedError, ProductSummary};
use std::collections::HashSet;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Source of product summaries. Implementations block; callers are expected
/// to run them off the UI thread.
pub trait CatalogClient: Send + Sync {
    fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError>;
}

/// Catalog client issuing a single unauthenticated GET.
pub struct HttpCatalogClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpCatalogClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogClient for HttpCatalogClient {
    fn fetch_products(&self) -> Result<Vec<ProductSummary>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().map_err(|e| FeedError::Network(e.to_string()))?;
        decode_catalog(&body)
    }
}

/// Parses a catalog response body. Order is preserved; a repeated id makes
/// the whole batch malformed.
pub fn decode_catalog(body: &str) -> Result<Vec<ProductSummary>, FeedError> {
    let products: Vec<ProductSummary> =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;

    let mut seen = HashSet::with_capacity(products.len());
    for product in &products {
        if !seen.insert(product.id) {
            return Err(FeedError::Decode(format!("duplicate product id {}", product.id)));
        }
    }
    Ok(products)
}
