//! ATS scanner: a pluggable backend trait plus the default heuristic backend.
//!
//! `AppState` holds an `Arc<dyn AtsScanner>`, so backends swap without
//! touching the endpoint, handler, or caller code. The heuristic backend is
//! pure Rust: fast, deterministic, no network calls.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::resume::Resume;

use super::aggregate::{aggregate_scan, AtsScanResult, MetricScore};
use super::extractor::flatten_resume;
use super::metrics::default_metrics;
use super::rules::{evaluate_metric, MetricSpec, ScoreContext};

/// The scanner trait. Implement this to add a scan backend.
#[async_trait]
pub trait AtsScanner: Send + Sync {
    async fn scan(&self, resume: &Resume) -> Result<AtsScanResult, AppError>;
}

/// Default backend: the rule-based metric battery.
pub struct HeuristicScanner {
    metrics: Vec<MetricSpec>,
}

impl HeuristicScanner {
    pub const BACKEND: &'static str = "heuristic";

    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            metrics: default_metrics()?,
        })
    }
}

#[async_trait]
impl AtsScanner for HeuristicScanner {
    async fn scan(&self, resume: &Resume) -> Result<AtsScanResult, AppError> {
        Ok(compute_scan(&self.metrics, resume))
    }
}

/// Runs every metric over the flattened text and assembles the scan report.
///
/// Pipeline:
/// 1. Flatten the resume (or take its precomputed rendering)
/// 2. Evaluate each metric's rules, collecting scores and feedback
/// 3. Surface the resume's own skill inventory as the keyword list
/// 4. Aggregate: overall mean, dedup, capitalization, keyword ordering
pub fn compute_scan(metrics: &[MetricSpec], resume: &Resume) -> AtsScanResult {
    let text = flatten_resume(resume);
    let ctx = ScoreContext::new(resume, &text);

    let mut scores = Vec::with_capacity(metrics.len());
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for spec in metrics {
        let eval = evaluate_metric(spec, &ctx);
        scores.push(MetricScore {
            name: eval.name,
            score: eval.score,
        });
        strengths.extend(eval.strengths.iter().map(|s| s.to_string()));
        improvements.extend(eval.improvements.iter().map(|s| s.to_string()));
    }

    let keywords: Vec<String> = resume
        .skills
        .technical
        .iter()
        .chain(resume.skills.soft.iter())
        .cloned()
        .collect();

    aggregate_scan(scores, strengths, improvements, keywords, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, PersonalInfo, SkillSet};

    fn strong_resume() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                title: "Staff Engineer".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "London".to_string(),
                ..PersonalInfo::default()
            },
            summary: "Staff engineer who designed and delivered large-scale data platforms."
                .to_string(),
            experience: vec![ExperienceEntry {
                position: "Staff Engineer".to_string(),
                company: "Analytical Engines Ltd".to_string(),
                start_date: "2019".to_string(),
                description: "Led a team of six; improved pipeline throughput and reduced \
                              infrastructure cost by 30% while serving 2 million users."
                    .to_string(),
                ..ExperienceEntry::default()
            }],
            skills: SkillSet {
                technical: vec![
                    "Rust".to_string(),
                    "PostgreSQL".to_string(),
                    "Kafka".to_string(),
                    "Kubernetes".to_string(),
                    "Terraform".to_string(),
                    "GraphQL".to_string(),
                ],
                soft: vec![
                    "Leadership".to_string(),
                    "Mentoring".to_string(),
                    "Communication".to_string(),
                    "Planning".to_string(),
                ],
            },
            ..Resume::default()
        }
    }

    #[tokio::test]
    async fn test_heuristic_scanner_reports_four_metrics_in_range() {
        let scanner = HeuristicScanner::new().unwrap();
        let result = scanner.scan(&strong_resume()).await.unwrap();
        assert_eq!(result.metrics.len(), 4);
        for metric in &result.metrics {
            assert!(metric.score <= 100, "{:?} scored {}", metric.name, metric.score);
        }
        assert!(result.score <= 100);
    }

    #[test]
    fn test_overall_equals_rounded_mean_of_metrics() {
        let metrics = default_metrics().unwrap();
        let result = compute_scan(&metrics, &strong_resume());
        let sum: u32 = result.metrics.iter().map(|m| u32::from(m.score)).sum();
        let expected = (f64::from(sum) / result.metrics.len() as f64).round() as u8;
        assert_eq!(result.score, expected);
    }

    #[test]
    fn test_strong_resume_surfaces_strengths_and_keywords() {
        let metrics = default_metrics().unwrap();
        let result = compute_scan(&metrics, &strong_resume());
        assert!(!result.strengths.is_empty());
        // All skills appear in the flattened text, so order is preserved.
        assert_eq!(result.keywords.first().map(String::as_str), Some("Rust"));
        assert_eq!(result.keywords.len(), 10);
    }

    #[test]
    fn test_sparse_resume_surfaces_improvements() {
        let metrics = default_metrics().unwrap();
        let resume = Resume {
            summary: "Engineer.".to_string(),
            ..Resume::default()
        };
        let result = compute_scan(&metrics, &resume);
        assert!(!result.improvements.is_empty());
        assert!(result.keywords.is_empty());
    }
}
