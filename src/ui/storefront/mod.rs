mod app;
mod catalog_view;
mod footer;
mod header;
mod hero;
mod product_card;

pub use app::App;
pub use catalog_view::{CatalogStatus, CatalogView, ProductGrid};
pub use footer::StoreFooter;
pub use header::StoreHeader;
pub use hero::Hero;
pub use product_card::ProductCard;
