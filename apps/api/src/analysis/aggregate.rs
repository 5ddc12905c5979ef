//! Scan-report assembly: overall score, list normalization, keyword ordering.
//!
//! Everything here is synchronous and deterministic given its inputs; the
//! async boundary lives in the scanner trait, not in aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::rules::MetricName;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    pub name: MetricName,
    pub score: u8,
}

/// Ephemeral result of one ATS scan. Never persisted; fully recomputed on
/// every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScanResult {
    pub score: u8,
    pub metrics: Vec<MetricScore>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Packages metric scores and the caller-supplied feedback lists into a scan
/// result: lists are trimmed, deduplicated, and capitalized; keywords found
/// in the flattened text sort first.
pub fn aggregate_scan(
    metrics: Vec<MetricScore>,
    strengths: Vec<String>,
    improvements: Vec<String>,
    keywords: Vec<String>,
    resume_text: &str,
) -> AtsScanResult {
    AtsScanResult {
        score: overall_score(&metrics),
        metrics,
        strengths: normalize_list(strengths),
        improvements: normalize_list(improvements),
        keywords: order_keywords(normalize_list(keywords), resume_text),
        generated_at: Utc::now(),
    }
}

/// Overall score: unweighted integer mean of the metric scores, rounded.
pub fn overall_score(metrics: &[MetricScore]) -> u8 {
    if metrics.is_empty() {
        return 0;
    }
    let sum: u32 = metrics.iter().map(|m| u32::from(m.score)).sum();
    (f64::from(sum) / metrics.len() as f64).round() as u8
}

/// Trims and deduplicates with case-sensitive set semantics (first occurrence
/// wins, order preserved), then capitalizes the first letter of each survivor.
pub fn normalize_list(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let trimmed = item.trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.clone()) {
            out.push(capitalize_first(&trimmed));
        }
    }
    out
}

/// Keywords present in the flattened text sort ahead of the rest; relative
/// order is otherwise preserved.
pub fn order_keywords(mut keywords: Vec<String>, resume_text: &str) -> Vec<String> {
    let text_lower = resume_text.to_lowercase();
    keywords.sort_by_key(|keyword| !text_lower.contains(&keyword.to_lowercase()));
    keywords
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
