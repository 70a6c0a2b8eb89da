//! Per entity query settings for the catalog indices.

use crate::model::search::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug)]
pub struct FacetConfig {
    /// Keyword field aggregated and filtered on.
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct SortConfig {
    pub key: &'static str,
    pub label: &'static str,
    /// Index field, `_score` for relevance.
    pub field: &'static str,
    pub order: SortOrder,
}

#[derive(Debug)]
pub struct IndexConfig {
    pub index: &'static str,
    /// Multi-match fields with optional `^boost` suffix.
    pub search_fields: &'static [&'static str],
    /// Fields returned in each hit's `_source`.
    pub source_fields: &'static [&'static str],
    pub facets: &'static [FacetConfig],
    pub sort_options: &'static [SortConfig],
    pub default_sort: &'static str,
    /// Term filters applied to every query of this kind.
    pub fixed_filters: &'static [(&'static str, &'static str)],
    /// Field holding the uploader id, for per-user counts.
    pub owner_field: Option<&'static str>,
}

impl IndexConfig {
    pub fn facet(&self, field: &str) -> Option<&FacetConfig> {
        self.facets.iter().find(|facet| facet.field == field)
    }

    pub fn sort_option(&self, key: &str) -> Option<&SortConfig> {
        self.sort_options.iter().find(|sort| sort.key == key)
    }
}

const RELEVANCE: SortConfig = SortConfig {
    key: "relevance",
    label: "Best match",
    field: "_score",
    order: SortOrder::Desc,
};

const NEWEST: SortConfig = SortConfig {
    key: "date",
    label: "Most recent",
    field: "date",
    order: SortOrder::Desc,
};

const MOST_RUNS: SortConfig = SortConfig {
    key: "runs",
    label: "Most runs",
    field: "runs",
    order: SortOrder::Desc,
};

const MOST_LIKES: SortConfig = SortConfig {
    key: "likes",
    label: "Most likes",
    field: "nr_of_likes",
    order: SortOrder::Desc,
};

const MOST_DOWNLOADS: SortConfig = SortConfig {
    key: "downloads",
    label: "Most downloads",
    field: "nr_of_downloads",
    order: SortOrder::Desc,
};

static DATASET: IndexConfig = IndexConfig {
    index: "data",
    search_fields: &["name^3", "tags.tag^2", "description", "uploader"],
    source_fields: &[
        "data_id",
        "name",
        "description",
        "version",
        "status",
        "format",
        "licence",
        "uploader",
        "uploader_id",
        "date",
        "runs",
        "nr_of_likes",
        "nr_of_downloads",
        "qualities.NumberOfInstances",
        "qualities.NumberOfFeatures",
        "qualities.NumberOfClasses",
        "qualities.NumberOfMissingValues",
    ],
    facets: &[
        FacetConfig {
            field: "status",
            label: "Status",
        },
        FacetConfig {
            field: "format",
            label: "Format",
        },
        FacetConfig {
            field: "licence",
            label: "Licence",
        },
        FacetConfig {
            field: "tags.tag",
            label: "Tags",
        },
    ],
    sort_options: &[RELEVANCE, MOST_RUNS, MOST_LIKES, MOST_DOWNLOADS, NEWEST],
    default_sort: "runs",
    fixed_filters: &[],
    owner_field: Some("uploader_id"),
};

static TASK: IndexConfig = IndexConfig {
    index: "task",
    search_fields: &["source_data.name^3", "tasktype.name^2", "tags.tag"],
    source_fields: &[
        "task_id",
        "tasktype",
        "source_data",
        "target_feature",
        "estimation_procedure",
        "evaluation_measures",
        "runs",
        "date",
        "status",
    ],
    facets: &[
        FacetConfig {
            field: "tasktype.name",
            label: "Task type",
        },
        FacetConfig {
            field: "estimation_procedure.type",
            label: "Estimation procedure",
        },
        FacetConfig {
            field: "status",
            label: "Status",
        },
    ],
    sort_options: &[RELEVANCE, MOST_RUNS, NEWEST],
    default_sort: "runs",
    fixed_filters: &[],
    owner_field: None,
};

static FLOW: IndexConfig = IndexConfig {
    index: "flow",
    search_fields: &["name^3", "description", "dependencies", "uploader"],
    source_fields: &[
        "flow_id",
        "name",
        "version",
        "description",
        "dependencies",
        "uploader",
        "uploader_id",
        "date",
        "runs",
        "nr_of_likes",
    ],
    facets: &[FacetConfig {
        field: "tags.tag",
        label: "Tags",
    }],
    sort_options: &[RELEVANCE, MOST_RUNS, MOST_LIKES, NEWEST],
    default_sort: "runs",
    fixed_filters: &[],
    owner_field: Some("uploader_id"),
};

static RUN: IndexConfig = IndexConfig {
    index: "run",
    search_fields: &["run_flow.name^2", "run_task.source_data.name^2", "uploader"],
    source_fields: &[
        "run_id",
        "run_flow",
        "run_task",
        "uploader",
        "uploader_id",
        "date",
        "evaluations",
    ],
    facets: &[FacetConfig {
        field: "run_task.tasktype.name",
        label: "Task type",
    }],
    sort_options: &[NEWEST, RELEVANCE],
    default_sort: "date",
    fixed_filters: &[],
    owner_field: Some("uploader_id"),
};

static STUDY: IndexConfig = IndexConfig {
    index: "study",
    search_fields: &["name^3", "description", "uploader"],
    source_fields: &[
        "study_id",
        "name",
        "description",
        "study_type",
        "uploader",
        "date",
        "datasets_included",
        "tasks_included",
        "flows_included",
        "runs_included",
    ],
    facets: &[FacetConfig {
        field: "study_type",
        label: "Type",
    }],
    sort_options: &[NEWEST, RELEVANCE],
    default_sort: "date",
    fixed_filters: &[("visibility", "public")],
    owner_field: None,
};

static MEASURE: IndexConfig = IndexConfig {
    index: "measure",
    search_fields: &["name^3", "description"],
    source_fields: &["measure_id", "name", "description", "measure_type", "min", "max", "unit"],
    facets: &[FacetConfig {
        field: "measure_type",
        label: "Measure type",
    }],
    sort_options: &[
        SortConfig {
            key: "name",
            label: "Name",
            field: "name.keyword",
            order: SortOrder::Asc,
        },
        RELEVANCE,
    ],
    default_sort: "name",
    fixed_filters: &[],
    owner_field: None,
};

static USER: IndexConfig = IndexConfig {
    index: "user",
    search_fields: &["first_name^2", "last_name^2", "affiliation", "country"],
    source_fields: &[
        "user_id",
        "first_name",
        "last_name",
        "affiliation",
        "country",
        "image",
        "date",
        "datasets_uploaded",
        "flows_uploaded",
        "runs_uploaded",
    ],
    facets: &[FacetConfig {
        field: "country",
        label: "Country",
    }],
    sort_options: &[
        SortConfig {
            key: "datasets",
            label: "Most datasets",
            field: "datasets_uploaded",
            order: SortOrder::Desc,
        },
        RELEVANCE,
        NEWEST,
    ],
    default_sort: "datasets",
    fixed_filters: &[],
    owner_field: None,
};

pub fn index_config(kind: EntityKind) -> &'static IndexConfig {
    match kind {
        EntityKind::Dataset => &DATASET,
        EntityKind::Task => &TASK,
        EntityKind::Flow => &FLOW,
        EntityKind::Run => &RUN,
        EntityKind::Study => &STUDY,
        EntityKind::Measure => &MEASURE,
        EntityKind::User => &USER,
    }
}

/// Whether `index` is one of the catalog indices.
pub fn is_known_index(index: &str) -> bool {
    EntityKind::ALL
        .into_iter()
        .any(|kind| index_config(kind).index == index)
}
