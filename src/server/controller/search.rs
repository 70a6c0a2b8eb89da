use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        search::{EntityKind, SearchRequestDto, SearchResultsDto},
    },
    server::{error::AppError, service::search::SearchService, state::AppState},
};

pub static SEARCH_TAG: &str = "search";

/// Searches one kind of catalog entity.
#[utoipa::path(
    post,
    path = "/api/search/{kind}",
    tag = SEARCH_TAG,
    params(
        ("kind" = String, Path, description = "datasets, tasks, flows, runs, studies, measures or users")
    ),
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Search results", body = SearchResultsDto),
        (status = 400, description = "Unknown filter field or sort key", body = ErrorDto),
        (status = 404, description = "Unknown entity kind", body = ErrorDto),
        (status = 502, description = "Search cluster error", body = ErrorDto),
        (status = 503, description = "Search cluster unavailable", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(payload): Json<SearchRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = EntityKind::from_slug(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown entity kind {}", kind)))?;

    let results = SearchService::new(&state.search)
        .search(kind, payload)
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}

/// Forwards a raw query body to a catalog index.
#[utoipa::path(
    post,
    path = "/api/es/{index}",
    tag = SEARCH_TAG,
    params(
        ("index" = String, Path, description = "Catalog index name")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Cluster response, unchanged", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorDto),
        (status = 404, description = "Unknown index", body = ErrorDto),
        (status = 502, description = "Search cluster error", body = ErrorDto),
        (status = 503, description = "Search cluster unavailable", body = ErrorDto)
    ),
)]
pub async fn passthrough(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let response = SearchService::new(&state.search)
        .passthrough(&index, &payload)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}
