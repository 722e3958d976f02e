//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stratus_core::{ErrorResponse, StratusError};
use tracing::error;

/// Body of the generic 404 answer.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Body of the generic 500 answer for panics.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error type for Axum.
#[derive(Debug)]
pub enum AppError {
    /// An error raised by the service layer.
    Service(StratusError),
    /// No route matched, including a path id that is not an integer.
    RouteNotFound,
}

impl From<StratusError> for AppError {
    fn from(err: StratusError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(err) => {
                let status =
                    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    error!(error = %err, code = err.error_code(), "Request failed");
                }
                (status, Json(ErrorResponse::from_error(&err))).into_response()
            }
            Self::RouteNotFound => not_found().into_response(),
        }
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// The generic 404 response.
pub fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(NOT_FOUND_MESSAGE)))
}

/// The generic 500 response.
pub fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StratusError::validation("bad"), StatusCode::BAD_REQUEST),
            (StratusError::not_found("User", 1), StatusCode::NOT_FOUND),
            (StratusError::database("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (StratusError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_route_not_found() {
        let response = AppError::RouteNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
