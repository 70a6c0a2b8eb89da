use dioxus::prelude::*;
use std::collections::HashMap;

use crate::model::search::FacetDto;

/// Adds `value` to the accepted values of `field`, or removes it when already present.
///
/// Fields left without values are dropped so they no longer filter.
pub fn toggle_filter(filters: &mut HashMap<String, Vec<String>>, field: &str, value: &str) {
    let values = filters.entry(field.to_string()).or_default();

    if let Some(position) = values.iter().position(|v| v == value) {
        values.remove(position);
    } else {
        values.push(value.to_string());
    }

    if values.is_empty() {
        filters.remove(field);
    }
}

#[component]
pub fn FacetSidebar(
    facets: Vec<FacetDto>,
    filters: HashMap<String, Vec<String>>,
    on_toggle: EventHandler<(String, String)>,
) -> Element {
    rsx!(
        aside {
            class: "flex flex-col gap-4 w-full md:w-64 shrink-0",
            for facet in facets.into_iter().filter(|facet| !facet.buckets.is_empty()) {
                div {
                    key: "{facet.field}",
                    h3 { class: "font-semibold mb-1", "{facet.label}" }
                    ul {
                        class: "flex flex-col gap-1",
                        for bucket in facet.buckets {
                            {
                                let field = facet.field.clone();
                                let key = bucket.key.clone();
                                let checked = filters
                                    .get(&facet.field)
                                    .is_some_and(|values| values.contains(&bucket.key));
                                rsx! {
                                    li {
                                        label {
                                            class: "flex items-center gap-2 cursor-pointer text-sm",
                                            input {
                                                r#type: "checkbox",
                                                class: "checkbox checkbox-sm",
                                                checked,
                                                onchange: move |_| on_toggle.call((field.clone(), key.clone())),
                                            }
                                            span { class: "grow", "{bucket.key}" }
                                            span { class: "opacity-60", "{bucket.count}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_adds_then_removes_value() {
        let mut filters = HashMap::new();

        toggle_filter(&mut filters, "status", "active");
        toggle_filter(&mut filters, "status", "deactivated");
        assert_eq!(filters["status"], vec!["active", "deactivated"]);

        toggle_filter(&mut filters, "status", "active");
        assert_eq!(filters["status"], vec!["deactivated"]);
    }

    #[test]
    fn removing_last_value_drops_field() {
        let mut filters = HashMap::new();

        toggle_filter(&mut filters, "format", "ARFF");
        toggle_filter(&mut filters, "format", "ARFF");

        assert!(filters.is_empty());
    }
}
