use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Remote services the backend proxies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Search,
    RestApi,
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Upstream::Search => write!(f, "search cluster"),
            Upstream::RestApi => write!(f, "REST API"),
        }
    }
}

/// Failure talking to the search cluster or the external REST API.
///
/// Calls are never retried; the failure is reported to the caller immediately.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Timeout or connection failure. Results in 503 Service Unavailable.
    #[error("{0} unavailable: {1}")]
    Unavailable(Upstream, String),

    /// The upstream answered 404. Results in 404 Not Found.
    #[error("{0} has no {1}")]
    NotFound(Upstream, String),

    /// Any other non-success status. Results in 502 Bad Gateway.
    #[error("{0} responded with status {1}")]
    BadStatus(Upstream, u16),

    /// Body did not have the expected shape. Results in 502 Bad Gateway.
    #[error("{0} returned an unexpected response: {1}")]
    InvalidResponse(Upstream, String),
}

impl UpstreamError {
    /// Classifies a reqwest failure for the given upstream.
    pub fn from_reqwest(upstream: Upstream, err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return Self::Unavailable(upstream, err.to_string());
        }

        if let Some(status) = err.status() {
            return Self::BadStatus(upstream, status.as_u16());
        }

        Self::InvalidResponse(upstream, err.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unavailable(_, _) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_, _) => StatusCode::NOT_FOUND,
            Self::BadStatus(_, _) | Self::InvalidResponse(_, _) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::NotFound(_, what) => {
                tracing::debug!("{}", self);
                format!("{} not found", what)
            }
            Self::Unavailable(upstream, _) => {
                tracing::error!("{}", self);
                format!("The {} is temporarily unavailable", upstream)
            }
            Self::BadStatus(upstream, _) | Self::InvalidResponse(upstream, _) => {
                tracing::error!("{}", self);
                format!("The {} returned an error", upstream)
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_maps_to_503() {
        let err = UpstreamError::Unavailable(Upstream::Search, "timed out".to_string());

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn bad_status_maps_to_502() {
        let err = UpstreamError::BadStatus(Upstream::RestApi, 500);

        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn not_found_passes_through() {
        let err = UpstreamError::NotFound(Upstream::RestApi, "dataset 61".to_string());

        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
