use crate::catalog::{load_catalog, CatalogPhase, Product};
use crate::ui::use_catalog_source;
use dioxus::prelude::*;
use tracing::debug;

use super::ProductCard;

/// Catalog section: fetches the products once and shows status or grid
#[component]
pub fn CatalogView() -> Element {
    let source = use_catalog_source();
    let mut phase = use_signal(CatalogPhase::default);

    // One fetch per mounted view. The task is owned by this scope and
    // dropped on unmount, so a late response never writes the signal.
    use_hook(move || {
        debug!("Starting catalog fetch");
        spawn(async move {
            let loaded = load_catalog(source.source()).await;
            phase.set(loaded);
        })
    });

    match phase() {
        CatalogPhase::Loading => rsx! {
            CatalogStatus { message: "Loading products…", is_error: false }
        },
        CatalogPhase::Failed(message) => rsx! {
            CatalogStatus { message, is_error: true }
        },
        CatalogPhase::Ready(products) => rsx! {
            ProductGrid { products }
        },
    }
}

/// Centered status line shown instead of the grid
#[component]
pub fn CatalogStatus(#[props(into)] message: String, is_error: bool) -> Element {
    let tone = if is_error { "text-red-600" } else { "text-gray-500" };

    rsx! {
        div { class: "catalog-status grid place-items-center py-16 {tone}", "{message}" }
    }
}

/// Responsive grid with one card per product, in catalog order
#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    rsx! {
        div { class: "product-grid grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6",
            for (idx, product) in products.into_iter().enumerate() {
                ProductCard { key: "{idx}", product }
            }
        }
    }
}
