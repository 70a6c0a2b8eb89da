use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON success body, or the `ErrorDto` of a failed request.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(read_error(status, response).await)
    }
}

/// Parses responses without a body (204 No Content).
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(read_error(status, response).await)
    }
}

async fn read_error(status: u64, response: Response) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PUT request with credentials and JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a PATCH request with credentials and JSON content type
pub fn patch(url: &str) -> Request {
    Request::patch(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

/// Create a DELETE request with credentials
pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Maps a failed `document::eval` exchange.
pub fn browser_error(e: impl std::fmt::Display) -> ApiError {
    ApiError {
        status: 500,
        message: format!("Browser call failed: {}", e),
    }
}
