mod analysis;
mod config;
mod errors;
mod jobmatch;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::scanner::HeuristicScanner;
use crate::config::Config;
use crate::jobmatch::matcher::JobMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (everything has a default, so this only fails
    // on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumetric API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the ATS scanner. HeuristicScanner is the only backend today;
    // the trait seam lets a remote backend slot in without handler changes.
    let scanner = Arc::new(HeuristicScanner::new()?);
    info!("ATS scanner initialized (backend: {})", HeuristicScanner::BACKEND);

    // Initialize the job matcher; requirement regexes compile once here
    let job_matcher = Arc::new(JobMatcher::new()?);
    info!("Job matcher initialized");

    // Build app state
    let state = AppState {
        scanner,
        job_matcher,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
