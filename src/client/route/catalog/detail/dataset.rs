use dioxus::prelude::*;
use serde_json::Value;

use crate::{
    client::{
        component::{search::hit::field, ErrorPage, LoadingPage, Markdown, Page},
        model::error::ApiError,
    },
    model::search::EntityKind,
};

use super::{key_fields, use_document, FieldTable};

#[cfg(feature = "web")]
use crate::client::api::catalog::{get_dataset_features, get_dataset_qualities};

const DATASET_FIELDS: &[(&str, &str)] = &[
    ("Version", "version"),
    ("Status", "status"),
    ("Format", "format"),
    ("Licence", "licence"),
    ("Uploader", "uploader"),
    ("Uploaded", "date"),
    ("Runs", "runs"),
    ("Likes", "nr_of_likes"),
    ("Downloads", "nr_of_downloads"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRow {
    pub index: String,
    pub name: String,
    pub data_type: String,
    pub missing: String,
    pub is_target: bool,
}

/// Accepts a single object where the API would return a one element list.
fn as_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(item @ Value::Object(_)) => vec![item],
        _ => vec![],
    }
}

/// Feature rows of a `data_features` response.
pub fn parse_features(body: &Value) -> Vec<FeatureRow> {
    as_list(body.pointer("/data_features/feature"))
        .into_iter()
        .map(|feature| FeatureRow {
            index: field(feature, "index").unwrap_or_default(),
            name: field(feature, "name").unwrap_or_default(),
            data_type: field(feature, "data_type").unwrap_or_default(),
            missing: field(feature, "number_of_missing_values").unwrap_or_else(|| "0".to_string()),
            is_target: field(feature, "target").as_deref() == Some("true")
                || field(feature, "is_target").as_deref() == Some("true"),
        })
        .collect()
}

/// `(name, value)` pairs of a `data_qualities` response, qualities without a value skipped.
pub fn parse_qualities(body: &Value) -> Vec<(String, String)> {
    as_list(body.pointer("/data_qualities/quality"))
        .into_iter()
        .filter_map(|quality| Some((field(quality, "name")?, field(quality, "value")?)))
        .collect()
}

#[component]
pub fn DatasetDetail(id: String) -> Element {
    let document = use_document(EntityKind::Dataset, id.clone());
    let mut features = use_signal(|| None::<Result<Vec<FeatureRow>, ApiError>>);
    let mut qualities = use_signal(|| None::<Result<Vec<(String, String)>, ApiError>>);

    #[cfg(feature = "web")]
    let _fetch_sections = use_resource(use_reactive!(|id| async move {
        features.set(None);
        qualities.set(None);
        let feature_body = get_dataset_features(&id).await;
        features.set(Some(feature_body.map(|body| parse_features(&body))));
        let quality_body = get_dataset_qualities(&id).await;
        qualities.set(Some(quality_body.map(|body| parse_qualities(&body))));
    }));

    #[cfg(not(feature = "web"))]
    let _ = (&mut features, &mut qualities);

    let page = match &*document.read() {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
        Some(Ok(source)) => {
            let name = field(source, "name").unwrap_or_else(|| format!("Dataset {}", id));
            let description = field(source, "description");
            let rows = key_fields(source, DATASET_FIELDS);

            rsx! {
                Title { "{name}" }
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-5xl flex flex-col gap-6",
                        h1 { class: "text-2xl", "{name}" }
                        FieldTable { rows }
                        if let Some(description) = description {
                            section {
                                h2 { class: "text-xl mb-2", "Description" }
                                Markdown { source: description }
                            }
                        }
                        section {
                            h2 { class: "text-xl mb-2", "Features" }
                            FeatureSection { features: features() }
                        }
                        section {
                            h2 { class: "text-xl mb-2", "Qualities" }
                            QualitySection { qualities: qualities() }
                        }
                    }
                }
            }
        }
    };

    page
}

#[component]
fn FeatureSection(features: Option<Result<Vec<FeatureRow>, ApiError>>) -> Element {
    match features {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { p { class: "opacity-70", "Features unavailable: {err}" } },
        Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "opacity-70", "No features" } },
        Some(Ok(rows)) => rsx! {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra table-sm w-full",
                    thead {
                        tr {
                            th { "#" }
                            th { "Name" }
                            th { "Type" }
                            th { "Missing values" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.index}",
                                td { "{row.index}" }
                                td {
                                    "{row.name}"
                                    if row.is_target {
                                        span { class: "badge badge-primary badge-sm ml-2", "target" }
                                    }
                                }
                                td { "{row.data_type}" }
                                td { "{row.missing}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn QualitySection(qualities: Option<Result<Vec<(String, String)>, ApiError>>) -> Element {
    match qualities {
        None => rsx! { span { class: "loading loading-spinner" } },
        Some(Err(err)) => rsx! { p { class: "opacity-70", "Qualities unavailable: {err}" } },
        Some(Ok(rows)) if rows.is_empty() => rsx! { p { class: "opacity-70", "No qualities computed yet" } },
        Some(Ok(rows)) => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-x-6",
                for (name, value) in rows {
                    div {
                        key: "{name}",
                        class: "flex justify-between border-b border-base-300 py-1 text-sm",
                        span { "{name}" }
                        span { class: "font-mono", "{value}" }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_feature_list() {
        let body = json!({
            "data_features": { "feature": [
                { "index": "0", "name": "sepallength", "data_type": "numeric", "number_of_missing_values": "0" },
                { "index": "4", "name": "class", "data_type": "nominal", "is_target": "true" }
            ]}
        });

        let rows = parse_features(&body);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "sepallength");
        assert!(!rows[0].is_target);
        assert!(rows[1].is_target);
        assert_eq!(rows[1].missing, "0");
    }

    #[test]
    fn single_feature_object_is_a_one_row_list() {
        let body = json!({ "data_features": { "feature": { "index": 0, "name": "only" } } });

        assert_eq!(parse_features(&body).len(), 1);
    }

    #[test]
    fn qualities_without_value_are_skipped() {
        let body = json!({
            "data_qualities": { "quality": [
                { "name": "NumberOfInstances", "value": "150.0" },
                { "name": "AutoCorrelation", "value": null }
            ]}
        });

        assert_eq!(
            parse_qualities(&body),
            vec![("NumberOfInstances".to_string(), "150.0".to_string())]
        );
    }

    #[test]
    fn unexpected_shape_yields_no_rows() {
        assert!(parse_features(&json!({ "error": "x" })).is_empty());
        assert!(parse_qualities(&json!([])).is_empty());
    }
}
