//! Catalog search shared by every listing page.

pub mod facets;
pub mod hit;
pub mod query;
pub mod sort;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use std::collections::HashMap;

use crate::{
    client::{
        component::{
            page::ErrorPage,
            pagination::{Pagination, PaginationData},
            Page,
        },
        constant::DEFAULT_PER_PAGE,
        model::{error::ApiError, locale::use_locale},
    },
    i18n::Text,
    model::search::{EntityKind, SearchRequestDto, SearchResultsDto},
};

pub use facets::{toggle_filter, FacetSidebar};
pub use hit::HitCard;
pub use query::SearchBox;
pub use sort::SortSelect;

#[cfg(feature = "web")]
use crate::client::api::search::search;

/// Builds the request of a search page.
///
/// `fixed_filters` pin a page to a subset of the index (benchmarks are task studies)
/// and take precedence over user selected values of the same field.
pub fn build_request(
    query: &str,
    filters: &HashMap<String, Vec<String>>,
    fixed_filters: &[(String, Vec<String>)],
    sort: Option<String>,
    page: u64,
    per_page: u64,
) -> SearchRequestDto {
    let mut filters = filters.clone();
    for (field, values) in fixed_filters {
        filters.insert(field.clone(), values.clone());
    }

    let query = query.trim();

    SearchRequestDto {
        query: (!query.is_empty()).then(|| query.to_string()),
        filters,
        sort,
        page,
        per_page,
    }
}

#[component]
pub fn SearchPage(
    kind: EntityKind,
    title: Text,
    /// Canonical path hits link below, e.g. `/benchmarks`.
    detail_base: &'static str,
    #[props(default)] fixed_filters: Vec<(String, Vec<String>)>,
) -> Element {
    let locale = use_locale();

    let mut query = use_signal(String::new);
    let mut filters = use_signal(HashMap::<String, Vec<String>>::new);
    let mut sort = use_signal(|| None::<String>);
    let mut page = use_signal(|| 0u64);
    let mut per_page = use_signal(|| DEFAULT_PER_PAGE);

    let mut results = use_signal(|| None::<SearchResultsDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut loading = use_signal(|| true);

    let hidden: Vec<String> = fixed_filters.iter().map(|(field, _)| field.clone()).collect();

    #[cfg(feature = "web")]
    let _search = use_resource(move || {
        let fixed_filters = fixed_filters.clone();
        async move {
            let request = build_request(
                &query(),
                &filters(),
                &fixed_filters,
                sort(),
                page(),
                per_page(),
            );

            loading.set(true);
            match search(kind, &request).await {
                Ok(found) => {
                    results.set(Some(found));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Search of {} failed: {}", kind.slug(), err);
                    error.set(Some(err));
                }
            }
            loading.set(false);
        }
    });

    let title_text = title.get(locale);
    let placeholder = format!("{} {}", Text::Search.get(locale), title_text.to_lowercase());

    rsx! {
        Title { "{title_text}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-4",
                h1 { class: "text-2xl", "{title_text}" }
                SearchBox {
                    placeholder,
                    on_search: move |value: String| {
                        if *query.peek() != value {
                            query.set(value);
                            page.set(0);
                        }
                    },
                }
                if let Some(err) = error() {
                    if results.read().is_none() {
                        ErrorPage { status: err.status, message: err.message }
                    } else {
                        div { role: "alert", class: "alert alert-error", "{err.message}" }
                    }
                }
                if let Some(found) = results() {
                    div {
                        class: "flex flex-col md:flex-row gap-6",
                        FacetSidebar {
                            facets: found
                                .facets
                                .iter()
                                .filter(|facet| !hidden.contains(&facet.field))
                                .cloned()
                                .collect::<Vec<_>>(),
                            filters: filters(),
                            on_toggle: move |(field, value): (String, String)| {
                                toggle_filter(&mut filters.write(), &field, &value);
                                page.set(0);
                            },
                        }
                        div {
                            class: "flex flex-col gap-3 grow",
                            div {
                                class: "flex items-center justify-between gap-2",
                                span {
                                    class: "opacity-70",
                                    "{found.total} {title_text.to_lowercase()}"
                                    if loading() {
                                        span { class: "loading loading-spinner loading-xs ml-2" }
                                    }
                                }
                                SortSelect {
                                    options: found.sort_options.clone(),
                                    selected: Some(found.sort.clone()),
                                    on_change: move |key: String| {
                                        sort.set(Some(key));
                                        page.set(0);
                                    },
                                }
                            }
                            if found.hits.is_empty() {
                                div { class: "text-center py-8 opacity-50", "No results" }
                            }
                            for hit in found.hits.iter().cloned() {
                                HitCard { key: "{hit.id}", kind, hit, detail_base }
                            }
                            if found.total > 0 {
                                Pagination {
                                    data: PaginationData {
                                        page: found.page,
                                        per_page: found.per_page,
                                        total: found.total,
                                        total_pages: found.total_pages,
                                    },
                                    on_page_change: move |target: u64| page.set(target),
                                    on_per_page_change: move |size: u64| {
                                        per_page.set(size);
                                        page.set(0);
                                    },
                                }
                            }
                        }
                    }
                } else if error().is_none() {
                    div {
                        class: "flex justify-center py-12",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_omitted() {
        let request = build_request("   ", &HashMap::new(), &[], None, 0, 20);

        assert_eq!(request.query, None);
        assert_eq!(request.per_page, 20);
    }

    #[test]
    fn fixed_filters_override_selected_values() {
        let mut selected = HashMap::new();
        selected.insert("study_type".to_string(), vec!["run".to_string()]);
        selected.insert("status".to_string(), vec!["active".to_string()]);

        let request = build_request(
            " iris ",
            &selected,
            &[("study_type".to_string(), vec!["task".to_string()])],
            Some("date".to_string()),
            3,
            50,
        );

        assert_eq!(request.query.as_deref(), Some("iris"));
        assert_eq!(request.filters["study_type"], vec!["task"]);
        assert_eq!(request.filters["status"], vec!["active"]);
        assert_eq!(request.sort.as_deref(), Some("date"));
        assert_eq!(request.page, 3);
    }
}
