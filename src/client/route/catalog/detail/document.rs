//! Detail pages that show a document's key fields until they get their own layout.

use dioxus::prelude::*;

use crate::{
    client::component::{
        search::hit::{field, summarize},
        ErrorPage, LoadingPage, Markdown, Page, UnderConstruction,
    },
    model::search::{EntityKind, SearchHitDto},
};

use super::{key_fields, use_document, FieldTable};

const TASK_FIELDS: &[(&str, &str)] = &[
    ("Task type", "tasktype.name"),
    ("Dataset", "source_data.name"),
    ("Target feature", "target_feature"),
    ("Estimation procedure", "estimation_procedure.type"),
    ("Runs", "runs"),
    ("Status", "status"),
];

const FLOW_FIELDS: &[(&str, &str)] = &[
    ("Version", "version"),
    ("Uploader", "uploader"),
    ("Dependencies", "dependencies"),
    ("Runs", "runs"),
    ("Uploaded", "date"),
];

const RUN_FIELDS: &[(&str, &str)] = &[
    ("Flow", "run_flow.name"),
    ("Task", "run_task.task_id"),
    ("Dataset", "run_task.source_data.name"),
    ("Uploader", "uploader"),
    ("Uploaded", "date"),
];

const STUDY_FIELDS: &[(&str, &str)] = &[
    ("Type", "study_type"),
    ("Uploader", "uploader"),
    ("Datasets", "datasets_included"),
    ("Tasks", "tasks_included"),
    ("Flows", "flows_included"),
    ("Runs", "runs_included"),
    ("Created", "date"),
];

const MEASURE_FIELDS: &[(&str, &str)] = &[
    ("Type", "measure_type"),
    ("Minimum", "min"),
    ("Maximum", "max"),
    ("Unit", "unit"),
];

#[component]
fn DocumentPage(kind: EntityKind, id: String, fields: &'static [(&'static str, &'static str)]) -> Element {
    let document = use_document(kind, id.clone());

    let page = match &*document.read() {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
        Some(Ok(source)) => {
            let summary = summarize(
                kind,
                &SearchHitDto {
                    id: id.clone(),
                    score: None,
                    source: source.clone(),
                },
            );
            let rows = key_fields(source, fields);
            let description = field(source, "description");

            rsx! {
                Title { "{summary.title}" }
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-4",
                        h1 { class: "text-2xl", "{summary.title}" }
                        if let Some(subtitle) = summary.subtitle {
                            p { class: "opacity-70", "{subtitle}" }
                        }
                        UnderConstruction {}
                        if let Some(description) = description {
                            Markdown { source: description }
                        }
                        FieldTable { rows }
                    }
                }
            }
        }
    };

    page
}

#[component]
pub fn TaskDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Task, id, fields: TASK_FIELDS } }
}

#[component]
pub fn FlowDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Flow, id, fields: FLOW_FIELDS } }
}

#[component]
pub fn RunDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Run, id, fields: RUN_FIELDS } }
}

#[component]
pub fn CollectionDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Study, id, fields: STUDY_FIELDS } }
}

#[component]
pub fn BenchmarkDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Study, id, fields: STUDY_FIELDS } }
}

#[component]
pub fn MeasureDetail(id: String) -> Element {
    rsx! { DocumentPage { kind: EntityKind::Measure, id, fields: MEASURE_FIELDS } }
}
