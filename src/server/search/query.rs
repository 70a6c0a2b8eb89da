//! Elasticsearch request bodies and response reshaping.

use serde_json::{json, Map, Value};

use crate::server::{
    error::upstream::{Upstream, UpstreamError},
    model::search::{Facet, SearchHit, SearchParam, SearchResults},
    search::config::{IndexConfig, SortConfig},
};

/// Number of buckets requested per facet.
const FACET_SIZE: u64 = 20;

/// Builds the `_search` body for a validated request.
///
/// Free text goes into a `multi_match` over the boosted search fields (or `match_all`),
/// fixed filters and facet filters become `terms` filters. Values of one facet are
/// OR-ed, different facets are AND-ed.
pub fn build_search_body(config: &IndexConfig, param: &SearchParam, sort: &SortConfig) -> Value {
    let must = match &param.query {
        Some(query) => json!({
            "multi_match": {
                "query": query,
                "fields": config.search_fields,
                "type": "best_fields",
                "operator": "and",
            }
        }),
        None => json!({ "match_all": {} }),
    };

    let mut filter: Vec<Value> = config
        .fixed_filters
        .iter()
        .map(|(field, value)| json!({ "term": { *field: value } }))
        .collect();

    for (field, values) in &param.filters {
        filter.push(json!({ "terms": { field.as_str(): values } }));
    }

    let mut aggs = Map::new();
    for facet in config.facets {
        aggs.insert(
            facet.field.to_string(),
            json!({ "terms": { "field": facet.field, "size": FACET_SIZE } }),
        );
    }

    let mut sort_clauses = vec![json!({ sort.field: { "order": sort.order.as_str() } })];
    if sort.field != "_score" {
        sort_clauses.push(json!({ "_score": { "order": "desc" } }));
    }

    json!({
        "from": param.offset(),
        "size": param.per_page,
        "track_total_hits": true,
        "_source": config.source_fields,
        "query": { "bool": { "must": [must], "filter": filter } },
        "aggs": aggs,
        "sort": sort_clauses,
    })
}

/// Builds a `_count` body matching the documents owned by `owner_id`.
pub fn build_count_body(owner_field: &str, owner_id: i32) -> Value {
    json!({ "query": { "term": { owner_field: owner_id } } })
}

/// Reshapes a `_search` response into search results.
pub fn parse_search_response(
    config: &IndexConfig,
    param: &SearchParam,
    body: Value,
) -> Result<SearchResults, UpstreamError> {
    let invalid = |reason: &str| UpstreamError::InvalidResponse(Upstream::Search, reason.to_string());

    let hits_object = body.get("hits").ok_or_else(|| invalid("missing hits"))?;

    // Older clusters report the total as a bare number.
    let total = match hits_object.get("total") {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(total) => total.get("value").and_then(Value::as_u64).unwrap_or(0),
        None => 0,
    };

    let hits = hits_object
        .get("hits")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing hits.hits"))?
        .iter()
        .map(|hit| SearchHit {
            id: hit
                .get("_id")
                .map(value_to_key)
                .unwrap_or_default(),
            score: hit.get("_score").and_then(Value::as_f64),
            source: hit.get("_source").cloned().unwrap_or(Value::Null),
        })
        .collect();

    let aggregations = body.get("aggregations");
    let facets = config
        .facets
        .iter()
        .map(|facet| Facet {
            field: facet.field.to_string(),
            label: facet.label.to_string(),
            buckets: aggregations
                .and_then(|aggs| aggs.get(facet.field))
                .and_then(|agg| agg.get("buckets"))
                .and_then(Value::as_array)
                .map(|buckets| {
                    buckets
                        .iter()
                        .map(|bucket| {
                            let key = bucket
                                .get("key_as_string")
                                .or_else(|| bucket.get("key"))
                                .map(value_to_key)
                                .unwrap_or_default();
                            let count = bucket.get("doc_count").and_then(Value::as_u64).unwrap_or(0);
                            (key, count)
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    Ok(SearchResults {
        total,
        page: param.page,
        per_page: param.per_page,
        hits,
        facets,
        sort_options: config
            .sort_options
            .iter()
            .map(|sort| (sort.key.to_string(), sort.label.to_string()))
            .collect(),
        sort: param
            .sort
            .clone()
            .unwrap_or_else(|| config.default_sort.to_string()),
    })
}

/// Extracts `count` from a `_count` response.
pub fn parse_count_response(body: &Value) -> Result<u64, UpstreamError> {
    body.get("count").and_then(Value::as_u64).ok_or_else(|| {
        UpstreamError::InvalidResponse(Upstream::Search, "missing count".to_string())
    })
}

fn value_to_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
