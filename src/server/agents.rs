//! `/api/agents`: admin CRUD over the registry. Every method requires a session.

use super::response::{json_error, parse_body, unauthorized, write_failure};
use super::SharedState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub assistant_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    #[serde(default)]
    pub name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Session gate shared by all agent routes. Runs before the body is looked at.
fn gate(state: &SharedState, headers: &HeaderMap) -> Result<(), Response> {
    if state.auth.is_authenticated(headers) {
        Ok(())
    } else {
        debug!("Rejected unauthenticated agent API request");
        Err(unauthorized())
    }
}

/// Both fields present and non-empty, or a 400.
fn name_and_assistant(body: &Bytes) -> Result<(String, String), Response> {
    let payload: AgentPayload = parse_body(body)?;
    match (non_empty(payload.name), non_empty(payload.assistant_id)) {
        (Some(name), Some(assistant_id)) => Ok((name, assistant_id)),
        _ => Err(json_error(
            StatusCode::BAD_REQUEST,
            "Name and assistant ID are required",
        )),
    }
}

pub async fn list_agents(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    if let Err(response) = gate(&state, &headers) {
        return response;
    }
    let agents = state.registry.list().await;
    Json(json!({ "agents": agents })).into_response()
}

pub async fn create_agent(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(response) = gate(&state, &headers) {
        return response;
    }
    let (name, assistant_id) = match name_and_assistant(&body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    match state.registry.create(&name, &assistant_id).await {
        Ok(agent) => (StatusCode::CREATED, Json(json!({ "agent": agent }))).into_response(),
        Err(e) => write_failure(e, "Failed to create agent"),
    }
}

pub async fn update_agent(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(response) = gate(&state, &headers) {
        return response;
    }
    let (name, assistant_id) = match name_and_assistant(&body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    match state.registry.update(&name, &assistant_id).await {
        Ok(agent) => Json(json!({ "agent": agent })).into_response(),
        Err(e) => write_failure(e, "Failed to update agent"),
    }
}

pub async fn delete_agent(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Err(response) = gate(&state, &headers) {
        return response;
    }
    let name = match parse_body::<DeletePayload>(&body) {
        Ok(payload) => non_empty(payload.name),
        Err(response) => return response,
    };
    let Some(name) = name else {
        return json_error(StatusCode::BAD_REQUEST, "Agent name is required");
    };

    match state.registry.delete(&name).await {
        Ok(true) => Json(json!({ "success": true })).into_response(),
        Ok(false) => json_error(StatusCode::NOT_FOUND, "Agent not found"),
        Err(e) => write_failure(e, "Failed to delete agent"),
    }
}
