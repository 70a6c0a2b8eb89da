use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChartLine, FaDatabase, FaFlask, FaLayerGroup, FaListCheck, FaRuler, FaTrophy, FaUsers},
    Icon,
};

use crate::{
    client::{component::{LocalLink, Page}, constant::SITE_NAME, model::locale::use_locale},
    i18n::Text,
};

#[component]
pub fn Home() -> Element {
    let locale = use_locale();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-10",
            div {
                class: "flex flex-col items-center gap-3 text-center max-w-2xl",
                h1 { class: "text-4xl font-bold", {SITE_NAME} }
                p {
                    class: "text-lg opacity-70",
                    "Find datasets, tasks and machine learning experiments shared by the community."
                }
            }
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4 w-full max-w-5xl",
                SectionCard { to: "/datasets", label: Text::Datasets.get(locale), Icon { width: 32, height: 32, icon: FaDatabase } }
                SectionCard { to: "/tasks", label: Text::Tasks.get(locale), Icon { width: 32, height: 32, icon: FaListCheck } }
                SectionCard { to: "/flows", label: Text::Flows.get(locale), Icon { width: 32, height: 32, icon: FaFlask } }
                SectionCard { to: "/runs", label: Text::Runs.get(locale), Icon { width: 32, height: 32, icon: FaChartLine } }
                SectionCard { to: "/collections", label: Text::Collections.get(locale), Icon { width: 32, height: 32, icon: FaLayerGroup } }
                SectionCard { to: "/benchmarks", label: Text::Benchmarks.get(locale), Icon { width: 32, height: 32, icon: FaTrophy } }
                SectionCard { to: "/measures", label: Text::Measures.get(locale), Icon { width: 32, height: 32, icon: FaRuler } }
                SectionCard { to: "/users", label: Text::Users.get(locale), Icon { width: 32, height: 32, icon: FaUsers } }
            }
        }
    }
}

#[component]
fn SectionCard(to: &'static str, label: &'static str, children: Element) -> Element {
    rsx!(
        LocalLink {
            to,
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body items-center gap-3",
                {children}
                span { class: "text-lg", "{label}" }
            }
        }
    )
}
