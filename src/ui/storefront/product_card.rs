use crate::catalog::Product;
use dioxus::prelude::*;

/// Card for a single product. Renders whatever fields are present.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let title = product.title_text();
    let description = product.description_text();
    let price = product.price_label();

    rsx! {
        div { class: "product-card bg-white rounded-2xl shadow-sm border border-gray-100 overflow-hidden hover:shadow-md transition-shadow",
            div { class: "aspect-[4/3] bg-gray-100",
                if let Some(image_url) = product.image() {
                    img {
                        src: "{image_url}",
                        alt: "{title}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    div { class: "w-full h-full grid place-items-center text-gray-400",
                        "No Image"
                    }
                }
            }
            div { class: "p-4",
                h3 { class: "font-semibold text-gray-900 line-clamp-1", title: "{title}", "{title}" }
                p { class: "text-sm text-gray-500 line-clamp-2 mt-1", "{description}" }
                div { class: "flex items-center justify-between mt-4",
                    span { class: "text-blue-600 font-bold", "{price}" }
                    // Cart is not wired up yet, the button has no handler
                    button {
                        r#type: "button",
                        class: "px-3 py-1.5 rounded-lg bg-blue-600 text-white text-sm hover:bg-blue-700",
                        "Add to cart"
                    }
                }
            }
        }
    }
}
