//! Listing pages. Collections and benchmarks are studies pinned to one study type.

use dioxus::prelude::*;

use crate::{client::component::SearchPage, i18n::Text, model::search::EntityKind};

fn study_type(value: &str) -> Vec<(String, Vec<String>)> {
    vec![("study_type".to_string(), vec![value.to_string()])]
}

#[component]
pub fn DatasetSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::Dataset, title: Text::Datasets, detail_base: "/datasets" }
    }
}

#[component]
pub fn TaskSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::Task, title: Text::Tasks, detail_base: "/tasks" }
    }
}

#[component]
pub fn FlowSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::Flow, title: Text::Flows, detail_base: "/flows" }
    }
}

#[component]
pub fn RunSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::Run, title: Text::Runs, detail_base: "/runs" }
    }
}

#[component]
pub fn CollectionSearch() -> Element {
    rsx! {
        SearchPage {
            kind: EntityKind::Study,
            title: Text::Collections,
            detail_base: "/collections",
            fixed_filters: study_type("run"),
        }
    }
}

#[component]
pub fn BenchmarkSearch() -> Element {
    rsx! {
        SearchPage {
            kind: EntityKind::Study,
            title: Text::Benchmarks,
            detail_base: "/benchmarks",
            fixed_filters: study_type("task"),
        }
    }
}

#[component]
pub fn MeasureSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::Measure, title: Text::Measures, detail_base: "/measures" }
    }
}

#[component]
pub fn UserSearch() -> Element {
    rsx! {
        SearchPage { kind: EntityKind::User, title: Text::Users, detail_base: "/users" }
    }
}
