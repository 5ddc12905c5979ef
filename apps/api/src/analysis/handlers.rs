//! Axum route handlers for the ATS analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::AtsScanResult;
use crate::analysis::extractor::flatten_resume;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub result: AtsScanResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/extract-text
///
/// Returns the flattened plain-text document for a resume. Useful for
/// previewing exactly what the scorers and the match calculator see.
pub async fn handle_extract_text(
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractTextResponse>, AppError> {
    Ok(Json(ExtractTextResponse {
        text: flatten_resume(&request.resume),
    }))
}

/// POST /api/v1/ats/scan
///
/// Runs the full metric battery against a resume and returns the scan report.
/// A resume with no scannable content is rejected before scoring.
pub async fn handle_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    if flatten_resume(&request.resume).trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "resume has no content to scan".to_string(),
        ));
    }

    let result = state.scanner.scan(&request.resume).await?;

    Ok(Json(ScanResponse { result }))
}
