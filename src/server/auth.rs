//! `/api/auth`: password login and logout via the session cookie.

use super::response::{json_error, parse_body};
use super::SharedState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn authenticate(
    State(state): State<SharedState>,
    body: Bytes,
) -> Response {
    let request: AuthRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match request.action.as_deref() {
        Some("logout") => (
            [(header::SET_COOKIE, state.auth.clear_session_cookie())],
            Json(json!({ "success": true })),
        )
            .into_response(),
        Some("login") => {
            let Some(password) = request.password.filter(|p| !p.is_empty()) else {
                return json_error(StatusCode::BAD_REQUEST, "Password is required");
            };
            if !state.auth.verify_password(&password) {
                warn!("Rejected admin login with invalid password");
                return json_error(StatusCode::UNAUTHORIZED, "Invalid password");
            }

            let token = state.auth.create_session();
            info!("Admin session issued");
            (
                [(header::SET_COOKIE, state.auth.session_cookie(&token))],
                Json(json!({ "success": true })),
            )
                .into_response()
        }
        _ => json_error(StatusCode::BAD_REQUEST, "Invalid action"),
    }
}
