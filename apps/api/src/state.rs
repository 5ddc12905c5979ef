use std::sync::Arc;

use crate::analysis::scanner::AtsScanner;
use crate::jobmatch::matcher::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable ATS scanner. Default: HeuristicScanner.
    pub scanner: Arc<dyn AtsScanner>,
    /// Requirement extraction + match scoring. Regexes compile once at startup.
    pub job_matcher: Arc<JobMatcher>,
}
