use tracing::{info, warn};

use super::client::{CatalogError, CatalogSource};
use super::models::Product;

/// Message shown when the catalog could not be fetched or parsed
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

/// Lifecycle of the catalog fetch. Starts in `Loading` and ends in exactly
/// one of the other two variants.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogPhase {
    #[default]
    Loading,
    Ready(Vec<Product>),
    Failed(String),
}

impl CatalogPhase {
    /// Map a fetch outcome to its terminal phase. The error cause is logged,
    /// the phase only carries the user-facing message.
    pub fn from_result(result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(items) => {
                info!("Catalog loaded with {} products", items.len());
                CatalogPhase::Ready(items)
            }
            Err(e) => {
                warn!("Failed to load catalog: {}", e);
                CatalogPhase::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogPhase::Loading)
    }

    pub fn items(&self) -> Option<&[Product]> {
        match self {
            CatalogPhase::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Run one fetch against `source` and return the resulting terminal phase
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogPhase {
    CatalogPhase::from_result(source.fetch_products().await)
}
