//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the embedded dataset is decompressed and loaded.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading pollution records..."
        }
    }
}
