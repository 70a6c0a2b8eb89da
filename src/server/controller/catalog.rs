use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, search::EntityKind, user::UserSummaryDto},
    server::{
        error::AppError,
        service::catalog::{CatalogService, DatasetSection},
        state::AppState,
    },
};

pub static CATALOG_TAG: &str = "catalog";

fn catalog_service(state: &AppState) -> CatalogService<'_> {
    CatalogService::new(&state.search, &state.rest)
}

/// Fetches one catalog document.
#[utoipa::path(
    get,
    path = "/api/{kind}/{id}",
    tag = CATALOG_TAG,
    params(
        ("kind" = String, Path, description = "datasets, tasks, flows, runs, studies, measures or users"),
        ("id" = String, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document source with its id", body = serde_json::Value),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Unknown kind or document", body = ErrorDto),
        (status = 502, description = "Search cluster error", body = ErrorDto),
        (status = 503, description = "Search cluster unavailable", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = EntityKind::from_slug(&kind)
        .ok_or_else(|| AppError::NotFound(format!("Unknown entity kind {}", kind)))?;

    let document = catalog_service(&state).get_document(kind, &id).await?;

    Ok((StatusCode::OK, Json(document)))
}

#[utoipa::path(
    get,
    path = "/api/datasets/{id}/features",
    tag = CATALOG_TAG,
    params(
        ("id" = u64, Path, description = "Dataset ID")
    ),
    responses(
        (status = 200, description = "Dataset features from the REST API", body = serde_json::Value),
        (status = 404, description = "Dataset not found", body = ErrorDto),
        (status = 502, description = "REST API error", body = ErrorDto),
        (status = 503, description = "REST API unavailable", body = ErrorDto)
    ),
)]
pub async fn get_dataset_features(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let features = catalog_service(&state)
        .dataset_section(id, DatasetSection::Features)
        .await?;

    Ok((StatusCode::OK, Json(features)))
}

#[utoipa::path(
    get,
    path = "/api/datasets/{id}/qualities",
    tag = CATALOG_TAG,
    params(
        ("id" = u64, Path, description = "Dataset ID")
    ),
    responses(
        (status = 200, description = "Dataset qualities from the REST API", body = serde_json::Value),
        (status = 404, description = "Dataset not found", body = ErrorDto),
        (status = 502, description = "REST API error", body = ErrorDto),
        (status = 503, description = "REST API unavailable", body = ErrorDto)
    ),
)]
pub async fn get_dataset_qualities(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let qualities = catalog_service(&state)
        .dataset_section(id, DatasetSection::Qualities)
        .await?;

    Ok((StatusCode::OK, Json(qualities)))
}

#[utoipa::path(
    get,
    path = "/api/datasets/{id}/statistics",
    tag = CATALOG_TAG,
    params(
        ("id" = u64, Path, description = "Dataset ID")
    ),
    responses(
        (status = 200, description = "Column statistics from the profiling engine", body = serde_json::Value),
        (status = 404, description = "Dataset not found", body = ErrorDto),
        (status = 502, description = "REST API error", body = ErrorDto),
        (status = 503, description = "REST API unavailable", body = ErrorDto)
    ),
)]
pub async fn get_dataset_statistics(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let statistics = catalog_service(&state)
        .dataset_section(id, DatasetSection::Statistics)
        .await?;

    Ok((StatusCode::OK, Json(statistics)))
}

/// Upload counts of a user for profile and dashboard tiles.
#[utoipa::path(
    get,
    path = "/api/users/{id}/summary",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Dataset, flow and run counts", body = UserSummaryDto),
        (status = 502, description = "Search cluster error", body = ErrorDto),
        (status = 503, description = "Search cluster unavailable", body = ErrorDto)
    ),
)]
pub async fn get_user_summary(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let summary = catalog_service(&state).user_summary(id).await?;

    Ok((StatusCode::OK, Json(summary)))
}
