use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::{CatalogView, Hero, StoreFooter, StoreHeader};

/// Single storefront page
#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",
            StoreHeader {}
            main { class: "max-w-6xl mx-auto px-4 py-10",
                Hero {}
                section { class: "mt-10", CatalogView {} }
            }
            StoreFooter {}
        }
    }
}
