pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as ats;
use crate::jobmatch::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS analysis API
        .route("/api/v1/ats/extract-text", post(ats::handle_extract_text))
        .route("/api/v1/ats/scan", post(ats::handle_scan))
        // Job match API
        .route(
            "/api/v1/jobs/requirements",
            post(jobs::handle_extract_requirements),
        )
        .route("/api/v1/jobs/match", post(jobs::handle_match))
        .with_state(state)
}
