//! The four metric definitions: fixed baselines, thresholds, verb lists, and
//! the numeric-impact pattern. Changing scoring policy means editing these
//! tables, not the engine or its callers.

use anyhow::Result;
use regex::Regex;

use super::rules::{MetricName, MetricSpec, RuleCheck, ScoreRule};

/// Action verbs ATS keyword filters commonly reward.
pub const INDUSTRY_VERBS: &[&str] = &[
    "managed",
    "developed",
    "led",
    "designed",
    "implemented",
    "created",
];

/// Verbs that signal a measured outcome rather than an activity.
pub const IMPACT_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "improved",
    "reduced",
    "achieved",
    "delivered",
];

/// Percentages, dollar amounts, and scale words that mark quantified impact.
/// Matched against lowercased text.
const NUMERIC_IMPACT_PATTERN: &str =
    r"\d+(\.\d+)?%|\$\d+|\d+(\.\d+)?\s*million|\d+k\b|\d+\+?\s*users";

/// Headers an ATS parser expects to find in the flattened text.
const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "summary"];

/// Characters that suggest table-style formatting ATS parsers choke on.
const FORMATTING_ARTIFACTS: &[&str] = &["|", "==="];

/// Builds the default metric set. The only fallible step is compiling the
/// numeric-impact pattern.
pub fn default_metrics() -> Result<Vec<MetricSpec>> {
    Ok(vec![
        content_quality(),
        ats_compatibility(),
        keyword_density(),
        impact_strength()?,
    ])
}

fn content_quality() -> MetricSpec {
    MetricSpec {
        name: MetricName::ContentQuality,
        baseline: 70,
        rules: vec![
            ScoreRule {
                check: RuleCheck::PersonalFieldsPopulated { more_than: 3 },
                points: 5,
                strength: None,
                improvement: Some("Fill in more contact details: phone, location, and LinkedIn"),
            },
            ScoreRule {
                check: RuleCheck::SummaryLongerThan { min_chars: 50 },
                points: 5,
                strength: Some("Professional summary is detailed"),
                improvement: Some("Expand your summary to a few full sentences"),
            },
            ScoreRule {
                check: RuleCheck::HasExperience,
                points: 5,
                strength: None,
                improvement: Some("Add at least one work experience entry"),
            },
            ScoreRule {
                check: RuleCheck::HasEducation,
                points: 5,
                strength: None,
                improvement: Some("Add your education history"),
            },
            ScoreRule {
                check: RuleCheck::HasSkills,
                points: 5,
                strength: None,
                improvement: Some("List your technical and soft skills"),
            },
            ScoreRule {
                check: RuleCheck::ExperienceDetailLongerThan { min_chars: 100 },
                points: 5,
                strength: Some("Experience entries are well described"),
                improvement: Some("Describe what you did in each role in more detail"),
            },
        ],
    }
}

fn ats_compatibility() -> MetricSpec {
    MetricSpec {
        name: MetricName::AtsCompatibility,
        baseline: 75,
        rules: vec![
            ScoreRule {
                check: RuleCheck::TextPresent,
                points: 10,
                strength: None,
                improvement: Some("Add resume content so ATS software has text to parse"),
            },
            ScoreRule {
                check: RuleCheck::HeadersPresent {
                    headers: SECTION_HEADERS,
                },
                points: 5,
                strength: Some("Standard section headers are easy for ATS software to parse"),
                improvement: Some(
                    "Use standard section headers: Summary, Experience, Education, Skills",
                ),
            },
            ScoreRule {
                check: RuleCheck::ArtifactsAbsent {
                    needles: FORMATTING_ARTIFACTS,
                },
                points: 5,
                strength: Some("No table-style formatting that confuses ATS parsers"),
                improvement: Some("Remove table-style separators from the resume text"),
            },
        ],
    }
}

fn keyword_density() -> MetricSpec {
    MetricSpec {
        name: MetricName::KeywordDensity,
        baseline: 65,
        rules: vec![
            ScoreRule {
                check: RuleCheck::MinTechnicalSkills { min: 6 },
                points: 10,
                strength: Some("Broad technical skill coverage"),
                improvement: Some("List at least six technical skills"),
            },
            ScoreRule {
                check: RuleCheck::MinSoftSkills { min: 4 },
                points: 5,
                strength: None,
                improvement: Some("Add a few soft skills such as leadership or communication"),
            },
            ScoreRule {
                check: RuleCheck::VerbMentions {
                    verbs: INDUSTRY_VERBS,
                },
                points: 3,
                strength: Some("Uses action verbs recruiters search for"),
                improvement: Some("Start bullet points with action verbs like \"led\" or \"developed\""),
            },
        ],
    }
}

fn impact_strength() -> Result<MetricSpec> {
    Ok(MetricSpec {
        name: MetricName::ImpactStrength,
        baseline: 60,
        rules: vec![
            ScoreRule {
                check: RuleCheck::PatternPresent {
                    pattern: Regex::new(NUMERIC_IMPACT_PATTERN)?,
                },
                points: 15,
                strength: Some("Includes quantified results"),
                improvement: Some("Quantify results with numbers, percentages, or dollar amounts"),
            },
            ScoreRule {
                check: RuleCheck::VerbMentions { verbs: IMPACT_VERBS },
                points: 4,
                strength: Some("Impact verbs highlight outcomes"),
                improvement: Some("Describe outcomes with verbs like \"increased\" or \"reduced\""),
            },
        ],
    })
}
