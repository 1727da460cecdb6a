//! JSON error bodies and the mapping from `ApiError` to HTTP status.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

/// `{error: message}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn unauthorized() -> Response {
    json_error(StatusCode::UNAUTHORIZED, "Unauthorized")
}

pub fn invalid_body() -> Response {
    json_error(StatusCode::BAD_REQUEST, "Invalid request body")
}

/// Decode a JSON request body whatever its `Content-Type`.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, Response> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected malformed request body");
        invalid_body()
    })
}

/// Map a failed write to a response.
///
/// Caller errors keep their message and map to 400 (401 for auth). Store and
/// configuration faults are logged and reported as 500 with `fallback`.
pub fn write_failure(err: ApiError, fallback: &str) -> Response {
    match err {
        ApiError::InvalidAgent(message)
        | ApiError::AgentExists(message)
        | ApiError::AgentNotFound(message) => json_error(StatusCode::BAD_REQUEST, message),
        ApiError::Unauthorized(_) => unauthorized(),
        err @ (ApiError::StorageError(_) | ApiError::ConfigError(_) | ApiError::ServerError(_)) => {
            error!(error = %err, "{}", fallback);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, fallback)
        }
    }
}
