pub mod dataset;
pub mod document;
pub mod user;

use dioxus::prelude::*;
use serde_json::Value;

use crate::client::model::error::ApiError;

pub use dataset::DatasetDetail;
pub use document::{
    BenchmarkDetail, CollectionDetail, FlowDetail, MeasureDetail, RunDetail, TaskDetail,
};
pub use user::UserProfile;

#[cfg(feature = "web")]
use crate::client::api::catalog::get_document;

use crate::model::search::EntityKind;

/// Document of the detail page, refetched when the route id changes.
pub fn use_document(kind: EntityKind, id: String) -> Signal<Option<Result<Value, ApiError>>> {
    let mut document = use_signal(|| None);

    #[cfg(feature = "web")]
    let _fetch = use_resource(use_reactive!(|id| async move {
        document.set(None);
        document.set(Some(get_document(kind, &id).await));
    }));

    #[cfg(not(feature = "web"))]
    let _ = (kind, id, &mut document);

    document
}

/// Label and value rows for the fields present in `source`.
pub fn key_fields(source: &Value, fields: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    use crate::client::component::search::hit::field;

    fields
        .iter()
        .filter_map(|(label, path)| field(source, path).map(|value| (*label, value)))
        .collect()
}

#[component]
pub fn FieldTable(rows: Vec<(&'static str, String)>) -> Element {
    rsx!(
        table {
            class: "table table-sm w-full",
            tbody {
                for (label, value) in rows {
                    tr {
                        th { class: "w-48", "{label}" }
                        td { "{value}" }
                    }
                }
            }
        }
    )
}
