use crate::catalog::CatalogSource;
use dioxus::prelude::*;
use std::sync::Arc;

/// Catalog source handed to the UI at launch
#[derive(Clone)]
pub struct SharedCatalogSource {
    inner: Arc<dyn CatalogSource>,
}

impl PartialEq for SharedCatalogSource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SharedCatalogSource {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.inner.as_ref()
    }
}

/// Hook to access the catalog source from components
pub fn use_catalog_source() -> SharedCatalogSource {
    use_context::<SharedCatalogSource>()
}
