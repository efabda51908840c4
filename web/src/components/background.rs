use dioxus::prelude::*;

/// Decorative animated backdrop rendered behind the task panel.
#[component]
pub fn Background() -> Element {
    rsx! {
        div { class: "backdrop",
            div { class: "backdrop-glow backdrop-glow-a" }
            div { class: "backdrop-glow backdrop-glow-b" }
            div { class: "backdrop-grid" }
        }
    }
}
