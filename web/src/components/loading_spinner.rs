use dioxus::prelude::*;

/// A spinner component for in-flight fetch states
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
            p { class: "spinner-message", "{message}" }
        }
    }
}
