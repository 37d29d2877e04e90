//! # actbot-server
//!
//! REST webhook layer over [`llm_adapter::LlmAdapter`]: status endpoints, the
//! `/webhooks/{channel}/webhook` conversation endpoint, and `/model/parse`.
//! Pipeline failures never surface as HTTP errors; they arrive as reply text.

pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use llm_adapter::LlmAdapter;
use tower_http::cors::{Any, CorsLayer};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shared state: the dispatch pipeline, registered before the server starts.
#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<LlmAdapter>,
}

/// Server address config loaded from HOST / PORT env variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5005);
        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Builds the axum Router with all routes and middleware.
/// Used by [`serve`] and available for integration testing.
pub fn build_router(adapter: Arc<LlmAdapter>) -> Router {
    let state = AppState { adapter };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/status", get(routes::status))
        .route("/webhooks/{channel}/webhook", post(routes::webhook))
        .route("/model/parse", post(routes::parse))
        .layer(cors)
        .with_state(state)
}

/// Binds the address and serves until shutdown.
pub async fn serve(config: &ServerConfig, adapter: Arc<LlmAdapter>) -> anyhow::Result<()> {
    let app = build_router(adapter);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "REST webhook server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
