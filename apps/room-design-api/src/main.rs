//! Room Design API Server
//!
//! Provides REST endpoints for:
//! - Rooms and the furniture catalog
//! - Single and multi-item fitness checks (bounds, collisions, walking space)
//! - Saved designs

use anyhow::Result;
use axum::{
    routing::{delete, get, post},
    Router,
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;
mod models;
mod state;
mod store;

use config::Args;
use state::AppState;

/// Build the full router over shared state
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration for web and mobile clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        // Health check
        .route("/health", get(handlers::health))
        // Rooms
        .route("/rooms", get(handlers::list_rooms).post(handlers::create_room))
        .route("/rooms/:id", get(handlers::get_room))
        // Furniture catalog
        .route(
            "/furniture",
            get(handlers::list_furniture).post(handlers::create_furniture),
        )
        // Fitness checks
        .route("/check-fitness", post(handlers::check_fitness))
        .route(
            "/check-multiple-fitness",
            post(handlers::check_multiple_fitness),
        )
        // Saved designs
        .route("/save-design", post(handlers::save_design))
        .route("/saved-designs", get(handlers::list_saved_designs))
        .route("/saved-designs/:id", delete(handlers::delete_saved_design))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("room_design_api={}", level).parse()?)
                .add_directive(format!("placement_core={}", level).parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing Room Design API...");
    let state = AppState::connect(&args.database_url(), args.max_connections).await?;

    if !args.skip_seed {
        state.seed_sample_furniture().await?;
    }

    let app = build_router(Arc::new(state));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting Room Design API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
