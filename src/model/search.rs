use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Kinds of catalog documents served from the search index.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Dataset,
    Task,
    Flow,
    Run,
    Study,
    Measure,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Dataset,
        EntityKind::Task,
        EntityKind::Flow,
        EntityKind::Run,
        EntityKind::Study,
        EntityKind::Measure,
        EntityKind::User,
    ];

    /// Plural path segment used by the API (`/api/search/datasets`, `/api/tasks/{id}`).
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Dataset => "datasets",
            EntityKind::Task => "tasks",
            EntityKind::Flow => "flows",
            EntityKind::Run => "runs",
            EntityKind::Study => "studies",
            EntityKind::Measure => "measures",
            EntityKind::User => "users",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// Search query sent by catalog pages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SearchRequestDto {
    /// Free text query; empty or missing matches everything.
    #[serde(default)]
    pub query: Option<String>,
    /// Facet field -> accepted values. Values of one field are OR-ed, fields are AND-ed.
    #[serde(default)]
    pub filters: HashMap<String, Vec<String>>,
    /// Key of one of the entity's sort options.
    #[serde(default)]
    pub sort: Option<String>,
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SearchHitDto {
    pub id: String,
    pub score: Option<f64>,
    pub source: serde_json::Value,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BucketDto {
    pub key: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FacetDto {
    pub field: String,
    pub label: String,
    pub buckets: Vec<BucketDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SortOptionDto {
    pub key: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SearchResultsDto {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub hits: Vec<SearchHitDto>,
    pub facets: Vec<FacetDto>,
    pub sort_options: Vec<SortOptionDto>,
    /// Sort option applied to these results.
    pub sort: String,
}
