use serde_json::Value;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{search::EntityKind, user::UserSummaryDto},
};

/// Fetches one catalog document, e.g. `/api/datasets/61`.
pub async fn get_document(kind: EntityKind, id: &str) -> Result<Value, ApiError> {
    let url = format!("/api/{}/{}", kind.slug(), id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_dataset_features(id: &str) -> Result<Value, ApiError> {
    let url = format!("/api/datasets/{}/features", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_dataset_qualities(id: &str) -> Result<Value, ApiError> {
    let url = format!("/api/datasets/{}/qualities", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_user_summary(user_id: &str) -> Result<UserSummaryDto, ApiError> {
    let url = format!("/api/users/{}/summary", user_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
