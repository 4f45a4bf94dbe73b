use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "text-center",
            h2 { class: "text-3xl md:text-4xl font-extrabold tracking-tight text-gray-900",
                "Discover the best mobiles at Rohan"
            }
            p { class: "mt-3 text-gray-600 max-w-2xl mx-auto",
                "Shop our curated selection of smartphones with stunning displays, long battery life, and blazing-fast performance."
            }
        }
    }
}
