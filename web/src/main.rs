mod api;
mod components;
mod views;

use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

static CSS: Asset = asset!("/assets/main.css");

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: CSS }
        components::Background {}
        main { class: "app-shell",
            views::Tasks {}
        }
        footer { class: "app-footer",
            p { "TaskMaster. Built with Dioxus & axum." }
        }
    }
}
