pub mod app;
pub mod catalog_context;
pub mod storefront;

pub use app::*;
pub use catalog_context::{use_catalog_source, SharedCatalogSource};
pub use storefront::*;
