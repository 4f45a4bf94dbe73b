use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::models::Product;
use crate::config::Config;

/// Product category shown by the storefront
pub const CATEGORY: &str = "mobile";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] ReqwestError),
    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce the product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP client for the backend product API
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.backend_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL the catalog is fetched from
    pub fn products_url(&self) -> String {
        format!("{}/api/products?category={}", self.base_url, CATEGORY)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    /// Fetch the catalog. The HTTP status is not checked: whatever JSON the
    /// backend sends is used, and a non-array body yields an empty catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/api/products", self.base_url);
        debug!("Fetching catalog from {}", self.products_url());

        let response = self
            .client
            .get(&url)
            .query(&[("category", CATEGORY)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog endpoint answered with status {}", status);
        }

        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body)?;

        Ok(coerce_catalog(payload))
    }
}

/// Turn a parsed payload into the catalog. Arrays keep their order and
/// length; any other JSON value becomes an empty catalog.
pub fn coerce_catalog(payload: Value) -> Vec<Product> {
    match payload {
        Value::Array(items) => items.into_iter().map(Product::from_value).collect(),
        other => {
            debug!(
                "Catalog payload is not an array ({}), showing empty catalog",
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
