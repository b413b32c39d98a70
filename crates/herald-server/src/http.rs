//! HTTP surface for the proxy's connect events.
//!
//! The proxy posts one request per "player connected to server X" event
//! and delivers the returned payload to the player. Handlers never error
//! for well-formed bodies: degraded state (directory not yet loaded,
//! phrase cache empty) produces a degraded but valid greeting.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::message::Span;
use crate::server::AppState;

/// One connect event as reported by the proxy.
#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    /// Name of the connecting player
    pub player: String,
    /// Server the player connected to
    pub server: String,
    /// Full roster of currently registered servers, in proxy order
    #[serde(default)]
    pub roster: Vec<String>,
}

/// Composed greeting payload.
#[derive(Debug, Serialize)]
pub struct GreetResponse {
    /// Plain-text rendering of the greeting
    pub text: String,
    /// Decorated spans for proxies that render click/hover regions
    pub spans: Vec<Span>,
}

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    /// Phrases currently cached
    pub phrases: usize,
    /// Server records currently loaded
    pub servers: usize,
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/greet", post(handle_greet))
        .route("/healthz", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_greet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GreetRequest>,
) -> Json<GreetResponse> {
    let today = Local::now().date_naive();
    let message = state
        .greeter()
        .compose(&request.player, &request.server, &request.roster, today);

    Json(GreetResponse {
        text: message.render(),
        spans: message.spans().to_vec(),
    })
}

async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_seconds: state.uptime_seconds(),
        phrases: state.phrases().len(),
        servers: state.directory().len(),
    })
}

/// Start the HTTP server.
///
/// # Errors
///
/// Returns `ServerError` if the listener fails to bind or the server
/// terminates with an error.
pub async fn start_server(bind_addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::BindFailed {
            addr: bind_addr,
            source,
        })?;

    tracing::info!("greeter listening on {}", bind_addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)?;

    Ok(())
}
