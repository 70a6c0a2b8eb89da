use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::search::{EntityKind, SearchRequestDto, SearchResultsDto},
};

pub async fn search(
    kind: EntityKind,
    request: &SearchRequestDto,
) -> Result<SearchResultsDto, ApiError> {
    let url = format!("/api/search/{}", kind.slug());
    let body = serialize_json(request)?;

    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}
