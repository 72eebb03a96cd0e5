mod catalog;
mod config;
mod errors;
mod interests;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::StaticCareerCatalog;
use crate::config::Config;
use crate::interests::InMemoryInterestStore;
use crate::recommendation::engine::RecommendationEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // Career catalog: JSON file if configured, built-in seed otherwise
    let catalog = match &config.career_catalog_path {
        Some(path) => StaticCareerCatalog::from_json_file(path)?,
        None => StaticCareerCatalog::seeded(),
    };
    if catalog.is_empty() {
        tracing::warn!("Career catalog is empty; recommendations will be unavailable");
    }
    info!("Career catalog ready ({} careers)", catalog.len());

    // Keyword table is built here, once, and shared by every request
    let engine = RecommendationEngine::with_limit(config.recommendation_limit);
    info!(
        "Recommendation engine initialized ({} interests, top {})",
        engine.keyword_table().len(),
        engine.limit()
    );

    let state = AppState {
        recommender: Arc::new(engine),
        catalog: Arc::new(catalog),
        interests: Arc::new(InMemoryInterestStore::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
