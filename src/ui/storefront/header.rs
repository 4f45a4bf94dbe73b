use dioxus::prelude::*;

const NAV_LINKS: [&str; 4] = ["Home", "Mobiles", "Accessories", "Support"];

/// Sticky header with brand and navigation.
/// Nav links are placeholders, the store is a single page.
#[component]
pub fn StoreHeader() -> Element {
    rsx! {
        header { class: "sticky top-0 z-10 backdrop-blur bg-white/70 border-b border-gray-200",
            div { class: "max-w-6xl mx-auto px-4 py-4 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    div { class: "h-9 w-9 rounded-xl bg-blue-600 grid place-items-center text-white font-bold",
                        "R"
                    }
                    div {
                        h1 { class: "text-xl font-bold text-gray-900", "Rohan Mobile Store" }
                        p { class: "text-xs text-gray-500 -mt-0.5", "Latest phones, great prices" }
                    }
                }
                nav { class: "hidden md:flex items-center gap-6 text-sm text-gray-600",
                    for label in NAV_LINKS {
                        a { class: "hover:text-gray-900", href: "#", "{label}" }
                    }
                }
            }
        }
    }
}
