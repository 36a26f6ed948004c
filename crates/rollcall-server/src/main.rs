//! Rollcall HTTP API Server
//!
//! Provides REST API endpoints for name-list template management,
//! attendance comparison, and image-based name extraction.

use axum::{Router, extract::DefaultBodyLimit, response::Json, routing::get};
use rollcall_store::{SqliteStore, TemplateStore};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod models;
mod routes;
mod vision;

use config::ServerConfig;
use error::Result;
use vision::VisionClient;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TemplateStore>,
    pub vision: Arc<VisionClient>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "rollcall_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!(
        "Starting Rollcall Server on {}:{}",
        config.host, config.port
    );

    // Primary store; operation-time failures are absorbed by the
    // TemplateStore fallback, so only a misconfigured URL is fatal here.
    let primary = Arc::new(SqliteStore::new(&config.database_url).await?);

    let store = Arc::new(
        TemplateStore::open(
            primary,
            &config.templates_file,
            Duration::from_secs(config.primary_timeout_seconds),
        )
        .await?,
    );

    let vision = Arc::new(VisionClient::new(
        config.vision_api_url.clone(),
        config.vision_api_key.clone(),
    ));

    // Create application state
    let state = AppState { store, vision };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", api_routes())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(10 * 1024 * 1024)), // 10MB for base64 images
        )
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", routes::templates::router())
        .nest("/compare", routes::compare::router())
        .nest("/recognize-image", routes::recognize::router())
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "rollcall-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": time::OffsetDateTime::now_utc()
    })))
}
