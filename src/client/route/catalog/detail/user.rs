use dioxus::prelude::*;

use crate::{
    client::{
        component::{search::hit::field, ErrorPage, LoadingPage, Page},
        model::error::ApiError,
    },
    model::{search::EntityKind, user::UserSummaryDto},
};

use super::use_document;

#[cfg(feature = "web")]
use crate::client::api::catalog::get_user_summary;

#[component]
pub fn UserProfile(id: String) -> Element {
    let document = use_document(EntityKind::User, id.clone());
    let mut summary = use_signal(|| None::<Result<UserSummaryDto, ApiError>>);

    #[cfg(feature = "web")]
    let _fetch_summary = use_resource(use_reactive!(|id| async move {
        summary.set(Some(get_user_summary(&id).await));
    }));

    #[cfg(not(feature = "web"))]
    let _ = &mut summary;

    let page = match &*document.read() {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
        Some(Ok(source)) => {
            let name = [field(source, "first_name"), field(source, "last_name")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            let name = if name.is_empty() { format!("User {}", id) } else { name };
            let affiliation = field(source, "affiliation");
            let country = field(source, "country");
            let image = field(source, "image");

            rsx! {
                Title { "{name}" }
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        div {
                            class: "flex items-center gap-4",
                            if let Some(image) = image {
                                img { class: "w-24 h-24 rounded-full object-cover", src: "{image}", alt: "{name}" }
                            }
                            div {
                                h1 { class: "text-2xl", "{name}" }
                                if let Some(affiliation) = affiliation {
                                    p { class: "opacity-70", "{affiliation}" }
                                }
                                if let Some(country) = country {
                                    p { class: "opacity-70", "{country}" }
                                }
                            }
                        }
                        SummaryTiles { summary: summary() }
                    }
                }
            }
        }
    };

    page
}

/// Upload counts, also shown on the dashboard.
#[component]
pub fn SummaryTiles(summary: Option<Result<UserSummaryDto, ApiError>>) -> Element {
    match summary {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { p { class: "opacity-70", "Upload counts unavailable: {err}" } },
        Some(Ok(counts)) => rsx! {
            div {
                class: "stats stats-vertical sm:stats-horizontal bg-base-200",
                div {
                    class: "stat",
                    div { class: "stat-title", "Datasets" }
                    div { class: "stat-value", "{counts.datasets}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Flows" }
                    div { class: "stat-value", "{counts.flows}" }
                }
                div {
                    class: "stat",
                    div { class: "stat-title", "Runs" }
                    div { class: "stat-value", "{counts.runs}" }
                }
            }
        },
    }
}
