use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn StoreFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "border-t border-gray-200 py-8 text-center text-sm text-gray-500",
            "© {year} Rohan Mobile Store. All rights reserved."
        }
    }
}
