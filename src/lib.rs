// Library exports for the storefront binary and integration tests

pub mod catalog;
pub mod config;
pub mod ui;

pub use catalog::{CatalogClient, CatalogPhase, CatalogSource, Product};
pub use config::Config;
