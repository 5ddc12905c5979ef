//! Match calculation: requirement containment against flattened resume text.
//!
//! Containment is a case-insensitive substring check. No stemming and no
//! synonym handling; the false negatives that produces are part of the
//! contract callers already depend on.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::requirements::{RequirementExtraction, RequirementExtractor};

/// Ephemeral result of matching a resume against one job description.
/// Fully recomputed on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchResult {
    pub score: u8,
    pub matches: usize,
    pub total: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Requirement extraction plus match scoring behind one constructor, so the
/// regexes compile once and live in `AppState`.
pub struct JobMatcher {
    extractor: RequirementExtractor,
}

impl JobMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: RequirementExtractor::new()?,
        })
    }

    pub fn extract(&self, jd_text: &str) -> RequirementExtraction {
        self.extractor.extract(jd_text)
    }

    pub fn match_resume(&self, jd_text: &str, resume_text: &str) -> JobMatchResult {
        let extraction = self.extractor.extract(jd_text);
        compute_match_report(&extraction.requirements, resume_text)
    }
}

/// Scores how much of the requirement list the resume text covers.
/// Percentage = matched / total × 100, rounded; an empty requirement list
/// scores zero.
pub fn compute_match_report(requirements: &[String], resume_text: &str) -> JobMatchResult {
    let text_lower = resume_text.to_lowercase();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in requirements {
        if text_lower.contains(&requirement.to_lowercase()) {
            matched.push(requirement.clone());
        } else {
            missing.push(requirement.clone());
        }
    }

    let total = requirements.len();
    let score = if total == 0 {
        0
    } else {
        ((matched.len() as f64 / total as f64) * 100.0).round() as u8
    };

    let recommendations = build_recommendations(&missing, total);

    JobMatchResult {
        score,
        matches: matched.len(),
        total,
        matched,
        missing,
        recommendations,
        generated_at: Utc::now(),
    }
}

/// One suggestion per missing requirement, or a combined suggestion naming
/// the first three when more than three are missing. A generic suggestion is
/// appended whenever coverage is incomplete, which also guarantees at least
/// two recommendations.
fn build_recommendations(missing: &[String], total: usize) -> Vec<String> {
    if missing.is_empty() {
        return Vec::new();
    }

    let mut recommendations = Vec::new();

    if missing.len() > 3 {
        let top: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!(
            "Address the biggest gaps first: {}.",
            top.join(", ")
        ));
    } else {
        for requirement in missing {
            recommendations.push(format!(
                "Add evidence of \"{requirement}\" to your experience or skills."
            ));
        }
    }

    // More than half missing suggests the whole framing is off; otherwise the
    // gaps are narrow enough that targeted project bullets cover them.
    if missing.len() * 2 > total {
        recommendations
            .push("Customize your summary to mirror the job description's language.".to_string());
    } else {
        recommendations
            .push("Highlight relevant projects that demonstrate the missing skills.".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_requirements_scores_67() {
        let requirements = reqs(&["React", "Node.js", "Leadership"]);
        let report = compute_match_report(
            &requirements,
            "SKILLS\nTechnical: React, Node.js, PostgreSQL",
        );
        // 2/3 = 66.67, rounds to 67
        assert_eq!(report.score, 67);
        assert_eq!(report.matches, 2);
        assert_eq!(report.total, 3);
        assert_eq!(report.matched, vec!["React", "Node.js"]);
        assert_eq!(report.missing, vec!["Leadership"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = compute_match_report(&reqs(&["react"]), "Shipped a REACT frontend");
        assert_eq!(report.score, 100);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_full_match_has_no_recommendations() {
        let report = compute_match_report(&reqs(&["Rust"]), "Rust services");
        assert_eq!(report.score, 100);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_empty_requirement_list_scores_zero() {
        let report = compute_match_report(&[], "any text");
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_single_miss_still_yields_two_recommendations() {
        let report = compute_match_report(
            &reqs(&["React", "Node.js", "Leadership"]),
            "React and Node.js daily",
        );
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.recommendations[0].contains("Leadership"));
        assert!(report.recommendations[1].contains("Highlight relevant projects"));
    }

    #[test]
    fn test_many_misses_collapse_into_combined_suggestion() {
        let requirements = reqs(&["Go", "Kafka", "Terraform", "GraphQL", "Redis"]);
        let report = compute_match_report(&requirements, "unrelated text");
        assert_eq!(report.score, 0);
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.recommendations[0].contains("Go, Kafka, Terraform"));
        assert!(!report.recommendations[0].contains("GraphQL"));
        assert!(report.recommendations[1].contains("Customize your summary"));
    }

    #[test]
    fn test_mostly_missing_suggests_summary_rewrite() {
        let report = compute_match_report(&reqs(&["Go", "Kafka"]), "some Go experience");
        // 1 of 2 missing is exactly half, so the targeted suggestion applies.
        assert!(report.recommendations[1].contains("Highlight relevant projects"));
    }
}
