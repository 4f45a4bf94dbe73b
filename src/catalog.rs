mod client;
mod models;
mod phase;

pub use client::{coerce_catalog, CatalogClient, CatalogError, CatalogSource, CATEGORY};
pub use models::{Price, Product};
pub use phase::{load_catalog, CatalogPhase, LOAD_FAILED_MESSAGE};
