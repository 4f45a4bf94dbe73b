use async_trait::async_trait;
use rohan_store::catalog::{CatalogError, CatalogSource, Product};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory source that counts how often it was asked
#[derive(Clone, Default)]
pub struct CountingSource {
    pub products: Vec<Product>,
    pub calls: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for CountingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

/// Source whose fetch never completes. Records when the fetch starts and
/// when its future is dropped.
#[derive(Clone, Default)]
pub struct HangingSource {
    pub started: Arc<AtomicBool>,
    pub dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogSource for HangingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let _flag = DropFlag(self.dropped.clone());
        self.started.store(true, Ordering::SeqCst);
        std::future::pending::<Result<Vec<Product>, CatalogError>>().await
    }
}

pub fn product(title: &str) -> Product {
    Product {
        title: Some(title.to_string()),
        ..Default::default()
    }
}
