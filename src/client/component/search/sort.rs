use dioxus::prelude::*;

use crate::model::search::SortOptionDto;

#[component]
pub fn SortSelect(
    options: Vec<SortOptionDto>,
    selected: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    rsx!(
        select {
            class: "select select-bordered select-sm",
            aria_label: "Sort by",
            onchange: move |evt| on_change.call(evt.value()),
            for option in options {
                option {
                    value: "{option.key}",
                    selected: selected.as_deref() == Some(option.key.as_str()),
                    "{option.label}"
                }
            }
        }
    )
}
