//! Axum route handlers for the job-match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::extractor::flatten_resume;
use crate::errors::AppError;
use crate::jobmatch::matcher::JobMatchResult;
use crate::jobmatch::requirements::RequirementExtraction;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequirementsRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractRequirementsResponse {
    pub extraction: RequirementExtraction,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub jd_text: String,
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub result: JobMatchResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/requirements
///
/// Previews requirement extraction for a job description, reporting which
/// extraction mode produced the list.
pub async fn handle_extract_requirements(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequirementsRequest>,
) -> Result<Json<ExtractRequirementsResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let extraction = state.job_matcher.extract(&request.jd_text);

    Ok(Json(ExtractRequirementsResponse { extraction }))
}

/// POST /api/v1/jobs/match
///
/// Extracts requirements from the job description and scores the resume's
/// coverage of them.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let resume_text = flatten_resume(&request.resume);
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "resume has no content to match against".to_string(),
        ));
    }

    let result = state
        .job_matcher
        .match_resume(&request.jd_text, &resume_text);

    Ok(Json(MatchResponse { result }))
}
