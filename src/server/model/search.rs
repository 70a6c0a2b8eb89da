//! Search request parameters and reshaped search results.

use crate::model::search::{
    BucketDto, EntityKind, FacetDto, SearchHitDto, SearchRequestDto, SearchResultsDto,
    SortOptionDto,
};

/// Upper bound for `per_page`; larger requests are clamped.
pub const MAX_PER_PAGE: u64 = 100;

/// Normalized search request for one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParam {
    pub kind: EntityKind,
    /// Trimmed free text query, `None` when blank.
    pub query: Option<String>,
    /// Facet filters sorted by field name, empty value lists removed.
    pub filters: Vec<(String, Vec<String>)>,
    pub sort: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl SearchParam {
    pub fn from_dto(kind: EntityKind, dto: SearchRequestDto) -> Self {
        let mut filters: Vec<(String, Vec<String>)> = dto
            .filters
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .collect();
        filters.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            kind,
            query: dto
                .query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            filters,
            sort: dto.sort.filter(|s| !s.is_empty()),
            page: dto.page,
            per_page: dto.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub score: Option<f64>,
    pub source: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    pub field: String,
    pub label: String,
    /// `(value, document count)` in the order returned by the index.
    pub buckets: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub hits: Vec<SearchHit>,
    pub facets: Vec<Facet>,
    /// `(key, label)` of every sort option of the entity kind.
    pub sort_options: Vec<(String, String)>,
    /// Key of the sort option the results are ordered by.
    pub sort: String,
}

impl SearchResults {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }

    pub fn into_dto(self) -> SearchResultsDto {
        SearchResultsDto {
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages(),
            hits: self
                .hits
                .into_iter()
                .map(|hit| SearchHitDto {
                    id: hit.id,
                    score: hit.score,
                    source: hit.source,
                })
                .collect(),
            facets: self
                .facets
                .into_iter()
                .map(|facet| FacetDto {
                    field: facet.field,
                    label: facet.label,
                    buckets: facet
                        .buckets
                        .into_iter()
                        .map(|(key, count)| BucketDto { key, count })
                        .collect(),
                })
                .collect(),
            sort_options: self
                .sort_options
                .into_iter()
                .map(|(key, label)| SortOptionDto { key, label })
                .collect(),
            sort: self.sort,
        }
    }
}
