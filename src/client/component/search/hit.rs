//! Result cards of the catalog search pages.

use dioxus::prelude::*;
use serde_json::Value;

use crate::{
    client::component::LocalLink,
    model::search::{EntityKind, SearchHitDto},
};

/// Reads a dotted path (`source_data.name`) out of a search document as display text.
pub fn field(source: &Value, path: &str) -> Option<String> {
    let value = path
        .split('.')
        .try_fold(source, |value, key| value.get(key))?;

    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// What a result card shows for one hit.
#[derive(Clone, Debug, PartialEq)]
pub struct HitSummary {
    pub title: String,
    pub subtitle: Option<String>,
    pub stats: Vec<(&'static str, String)>,
}

fn stats(source: &Value, fields: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|(label, path)| field(source, path).map(|value| (*label, value)))
        .collect()
}

fn joined(parts: &[Option<String>], separator: &str) -> Option<String> {
    let parts: Vec<&str> = parts.iter().flatten().map(String::as_str).collect();
    (!parts.is_empty()).then(|| parts.join(separator))
}

pub fn summarize(kind: EntityKind, hit: &SearchHitDto) -> HitSummary {
    let source = &hit.source;
    let fallback = || format!("#{}", hit.id);

    match kind {
        EntityKind::Dataset => HitSummary {
            title: field(source, "name").unwrap_or_else(fallback),
            subtitle: joined(
                &[
                    field(source, "version").map(|v| format!("v{}", v)),
                    field(source, "uploader"),
                    field(source, "status"),
                ],
                " · ",
            ),
            stats: stats(
                source,
                &[
                    ("instances", "qualities.NumberOfInstances"),
                    ("features", "qualities.NumberOfFeatures"),
                    ("runs", "runs"),
                    ("likes", "nr_of_likes"),
                    ("downloads", "nr_of_downloads"),
                ],
            ),
        },
        EntityKind::Task => HitSummary {
            title: joined(
                &[
                    field(source, "tasktype.name"),
                    field(source, "source_data.name"),
                ],
                " on ",
            )
            .unwrap_or_else(fallback),
            subtitle: field(source, "estimation_procedure.type"),
            stats: stats(source, &[("runs", "runs")]),
        },
        EntityKind::Flow => HitSummary {
            title: field(source, "name").unwrap_or_else(fallback),
            subtitle: joined(
                &[
                    field(source, "version").map(|v| format!("v{}", v)),
                    field(source, "uploader"),
                ],
                " · ",
            ),
            stats: stats(source, &[("runs", "runs"), ("likes", "nr_of_likes")]),
        },
        EntityKind::Run => HitSummary {
            title: joined(
                &[
                    field(source, "run_flow.name"),
                    field(source, "run_task.source_data.name"),
                ],
                " on ",
            )
            .unwrap_or_else(fallback),
            subtitle: field(source, "uploader"),
            stats: stats(source, &[("task", "run_task.task_id")]),
        },
        EntityKind::Study => HitSummary {
            title: field(source, "name").unwrap_or_else(fallback),
            subtitle: field(source, "uploader"),
            stats: stats(
                source,
                &[
                    ("datasets", "datasets_included"),
                    ("tasks", "tasks_included"),
                    ("flows", "flows_included"),
                    ("runs", "runs_included"),
                ],
            ),
        },
        EntityKind::Measure => HitSummary {
            title: field(source, "name").unwrap_or_else(fallback),
            subtitle: field(source, "measure_type"),
            stats: stats(source, &[("min", "min"), ("max", "max"), ("unit", "unit")]),
        },
        EntityKind::User => HitSummary {
            title: joined(
                &[field(source, "first_name"), field(source, "last_name")],
                " ",
            )
            .unwrap_or_else(fallback),
            subtitle: joined(
                &[field(source, "affiliation"), field(source, "country")],
                ", ",
            ),
            stats: stats(
                source,
                &[
                    ("datasets", "datasets_uploaded"),
                    ("flows", "flows_uploaded"),
                    ("runs", "runs_uploaded"),
                ],
            ),
        },
    }
}

#[component]
pub fn HitCard(kind: EntityKind, hit: SearchHitDto, detail_base: &'static str) -> Element {
    let summary = summarize(kind, &hit);

    rsx!(
        LocalLink {
            to: format!("{}/{}", detail_base, hit.id),
            class: "card bg-base-200 hover:bg-base-300 transition-colors",
            div {
                class: "card-body p-4 gap-1",
                h3 { class: "card-title text-base", "{summary.title}" }
                if let Some(subtitle) = &summary.subtitle {
                    p { class: "text-sm opacity-70", "{subtitle}" }
                }
                if !summary.stats.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2 mt-1",
                        for (label, value) in summary.stats.iter() {
                            span { class: "badge badge-ghost", "{value} {label}" }
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
    use serde_json::json;

    fn hit(source: Value) -> SearchHitDto {
        SearchHitDto {
            id: "61".to_string(),
            score: None,
            source,
        }
    }

    #[test]
    fn reads_nested_and_numeric_fields() {
        let source = json!({ "qualities": { "NumberOfInstances": 150 }, "name": "iris" });

        assert_eq!(field(&source, "qualities.NumberOfInstances").as_deref(), Some("150"));
        assert_eq!(field(&source, "name").as_deref(), Some("iris"));
        assert_eq!(field(&source, "missing.path"), None);
    }

    #[test]
    fn dataset_summary_lists_known_stats_only() {
        let summary = summarize(
            EntityKind::Dataset,
            &hit(json!({
                "name": "iris",
                "version": 1,
                "qualities": { "NumberOfInstances": 150 },
                "runs": 300
            })),
        );

        assert_eq!(summary.title, "iris");
        assert_eq!(summary.subtitle.as_deref(), Some("v1"));
        assert_eq!(
            summary.stats,
            vec![("instances", "150".to_string()), ("runs", "300".to_string())]
        );
    }

    #[test]
    fn task_title_combines_type_and_dataset() {
        let summary = summarize(
            EntityKind::Task,
            &hit(json!({
                "tasktype": { "name": "Supervised Classification" },
                "source_data": { "name": "iris" }
            })),
        );

        assert_eq!(summary.title, "Supervised Classification on iris");
    }

    #[test]
    fn missing_title_falls_back_to_id() {
        let summary = summarize(EntityKind::User, &hit(json!({})));

        assert_eq!(summary.title, "#61");
        assert_eq!(summary.subtitle, None);
    }
}
