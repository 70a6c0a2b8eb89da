use dioxus::prelude::*;

use crate::client::component::{LocalLink, Page};

#[component]
pub fn NotFound() -> Element {
    rsx! {
        Title { "Page not found" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            p { class: "text-5xl font-bold", "404" }
            p { class: "opacity-70", "This page does not exist." }
            LocalLink { to: "/", class: "btn btn-outline", "Home" }
        }
    }
}
