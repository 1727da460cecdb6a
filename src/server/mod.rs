//! HTTP Surface
//!
//! axum router over the registry and authenticator: the admin JSON API under
//! `/api`, and the public pages.

pub mod agents;
pub mod auth;
pub mod pages;
pub mod response;

use crate::agent::AgentRegistry;
use crate::auth::SessionAuthenticator;
use crate::config::WidgetConfig;
use crate::error::ApiError;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Everything a request handler needs.
pub struct AppState {
    pub registry: AgentRegistry,
    pub auth: SessionAuthenticator,
    pub widget: WidgetConfig,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/agent/:name", get(pages::agent_page))
        .route("/healthz", get(health))
        .route(
            "/api/agents",
            get(agents::list_agents)
                .post(agents::create_agent)
                .put(agents::update_agent)
                .delete(agents::delete_agent),
        )
        .route("/api/auth", post(auth::authenticate))
        .fallback(pages::not_found)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> Result<(), ApiError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| ApiError::ServerError(format!("Listener has no local address: {}", e)))?;
    info!(%addr, "Serving voice agent directory");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ApiError::ServerError(e.to_string()))
}
