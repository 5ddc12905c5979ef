//! Scoring policy engine.
//!
//! Each metric is a baseline plus a list of `ScoreRule`s evaluated against a
//! `ScoreContext`. New rules are added to the metric definitions in
//! `analysis::metrics` without touching any scorer call site. Rules also
//! carry the feedback strings they contribute to the scan report.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Context
// ────────────────────────────────────────────────────────────────────────────

/// Everything a rule may inspect: the structured resume and its flattened
/// text. The lowercased text is computed once, since most checks are
/// case-insensitive substring probes.
pub struct ScoreContext<'a> {
    pub resume: &'a Resume,
    pub text: &'a str,
    pub text_lower: String,
}

impl<'a> ScoreContext<'a> {
    pub fn new(resume: &'a Resume, text: &'a str) -> Self {
        Self {
            resume,
            text,
            text_lower: text.to_lowercase(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// Condition half of a scoring rule.
#[derive(Debug)]
pub enum RuleCheck {
    /// More than `more_than` non-empty personal-info fields.
    PersonalFieldsPopulated { more_than: usize },
    /// Summary longer than `min_chars` characters.
    SummaryLongerThan { min_chars: usize },
    HasExperience,
    HasEducation,
    HasSkills,
    /// Any experience description longer than `min_chars` characters.
    ExperienceDetailLongerThan { min_chars: usize },
    /// A non-empty flattened text form exists.
    TextPresent,
    /// Every header appears in the text, case-insensitive.
    HeadersPresent { headers: &'static [&'static str] },
    /// None of the needles appear in the text (a proxy for "no tables").
    ArtifactsAbsent { needles: &'static [&'static str] },
    MinTechnicalSkills { min: usize },
    MinSoftSkills { min: usize },
    /// Case-insensitive substring probe per verb; hits once per distinct verb.
    VerbMentions { verbs: &'static [&'static str] },
    /// The pattern matches the lowercased text.
    PatternPresent { pattern: Regex },
}

impl RuleCheck {
    /// Number of times the check hits. Zero means the rule failed; only
    /// `VerbMentions` can hit more than once.
    fn hits(&self, ctx: &ScoreContext<'_>) -> u32 {
        match self {
            RuleCheck::PersonalFieldsPopulated { more_than } => u32::from(
                ctx.resume.personal_info.populated_field_count() > *more_than,
            ),
            RuleCheck::SummaryLongerThan { min_chars } => {
                u32::from(ctx.resume.summary.chars().count() > *min_chars)
            }
            RuleCheck::HasExperience => u32::from(!ctx.resume.experience.is_empty()),
            RuleCheck::HasEducation => u32::from(!ctx.resume.education.is_empty()),
            RuleCheck::HasSkills => u32::from(!ctx.resume.skills.is_empty()),
            RuleCheck::ExperienceDetailLongerThan { min_chars } => u32::from(
                ctx.resume
                    .experience
                    .iter()
                    .any(|entry| entry.description.chars().count() > *min_chars),
            ),
            RuleCheck::TextPresent => u32::from(!ctx.text.trim().is_empty()),
            RuleCheck::HeadersPresent { headers } => u32::from(
                headers
                    .iter()
                    .all(|header| ctx.text_lower.contains(header)),
            ),
            RuleCheck::ArtifactsAbsent { needles } => u32::from(
                !needles
                    .iter()
                    .any(|needle| ctx.text.contains(needle)),
            ),
            RuleCheck::MinTechnicalSkills { min } => {
                u32::from(ctx.resume.skills.technical.len() >= *min)
            }
            RuleCheck::MinSoftSkills { min } => u32::from(ctx.resume.skills.soft.len() >= *min),
            RuleCheck::VerbMentions { verbs } => verbs
                .iter()
                .filter(|verb| ctx.text_lower.contains(*verb))
                .count() as u32,
            RuleCheck::PatternPresent { pattern } => u32::from(pattern.is_match(&ctx.text_lower)),
        }
    }
}

/// A single scoring rule: the check, the points it awards, and the feedback
/// it contributes to the scan report on pass or fail.
#[derive(Debug)]
pub struct ScoreRule {
    pub check: RuleCheck,
    /// Points added on a hit. For `VerbMentions`, points per matched verb.
    pub points: u8,
    pub strength: Option<&'static str>,
    pub improvement: Option<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Metrics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    ContentQuality,
    AtsCompatibility,
    KeywordDensity,
    ImpactStrength,
}

/// A metric definition: fixed baseline plus its rule list.
#[derive(Debug)]
pub struct MetricSpec {
    pub name: MetricName,
    pub baseline: u8,
    pub rules: Vec<ScoreRule>,
}

/// Score and feedback produced by evaluating one metric.
#[derive(Debug)]
pub struct MetricEvaluation {
    pub name: MetricName,
    pub score: u8,
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
}

/// Evaluates every rule in the metric definition against the context. The
/// result is the baseline plus awarded points, capped at 100.
pub fn evaluate_metric(spec: &MetricSpec, ctx: &ScoreContext<'_>) -> MetricEvaluation {
    let mut total = u32::from(spec.baseline);
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    for rule in &spec.rules {
        let hits = rule.check.hits(ctx);
        if hits > 0 {
            total += hits * u32::from(rule.points);
            if let Some(strength) = rule.strength {
                strengths.push(strength);
            }
        } else if let Some(improvement) = rule.improvement {
            improvements.push(improvement);
        }
    }

    MetricEvaluation {
        name: spec.name,
        score: total.min(100) as u8,
        strengths,
        improvements,
    }
}
