//! Requirement extraction from free-text job descriptions.
//!
//! Two modes. Line mode splits on bullet delimiters and sentence boundaries,
//! then keeps lines that read like hiring criteria. When too few lines
//! survive, keyword mode falls back to capitalized and symbol tokens
//! ("React", "C#") with a stop-word filter.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a requirement list was produced. Surfaced to callers for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Delimiter-split lines that passed the requirement filters.
    Lines,
    /// Capitalized/symbol token fallback.
    Keywords,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementExtraction {
    pub requirements: Vec<String>,
    pub mode: ExtractionMode,
}

/// Fewer surviving lines than this triggers keyword mode.
const FALLBACK_THRESHOLD: usize = 3;
/// Caps on returned requirements per mode.
const LINE_LIMIT: usize = 15;
const KEYWORD_LIMIT: usize = 10;
/// Candidate lines at or below this length are noise, not requirements.
const MIN_LINE_CHARS: usize = 10;
/// Shortest keyword token kept. Two keeps symbol tokens like "C#" alive.
const MIN_TOKEN_CHARS: usize = 2;

/// Tokens too generic to be requirements in keyword mode.
const STOP_WORDS: &[&str] = &[
    "the", "and", "with", "for", "you", "your", "we", "our", "are", "will", "this", "that",
    "have", "from", "work", "team", "role", "job", "who", "what", "must", "about", "join",
];

pub struct RequirementExtractor {
    splitter: Regex,
    indicator: Regex,
    benefits: Regex,
    label_prefix: Regex,
    token: Regex,
}

impl RequirementExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Bullet characters plus sentence boundaries. A bare '.' is not a
            // delimiter; it would shred tokens like "Node.js".
            splitter: Regex::new(r"[\n•\-*\\/●]|\.\s|\.$")?,
            indicator: Regex::new(
                r"(?i)experience|skills?|degree|knowledge|proficien|familiar|ability|years|expertise|certif|qualif|bachelor|master",
            )?,
            benefits: Regex::new(
                r"(?i)we offer|benefit|salary|insurance|vacation|perks|401k|equity|compensation",
            )?,
            label_prefix: Regex::new(r"^[A-Za-z][A-Za-z ]{0,30}:\s*")?,
            token: Regex::new(r"[A-Z][A-Za-z0-9+#.]+|[A-Za-z]+[+#]+")?,
        })
    }

    /// Extracts requirements from a job description, falling back to keyword
    /// mode when fewer than `FALLBACK_THRESHOLD` lines survive the filters.
    pub fn extract(&self, jd_text: &str) -> RequirementExtraction {
        let lines = self.filter_requirement_lines(jd_text);

        if lines.len() < FALLBACK_THRESHOLD {
            return RequirementExtraction {
                requirements: self.extract_keywords(jd_text),
                mode: ExtractionMode::Keywords,
            };
        }

        let requirements = lines
            .into_iter()
            .map(|line| self.label_prefix.replace(&line, "").to_string())
            .take(LINE_LIMIT)
            .collect();

        RequirementExtraction {
            requirements,
            mode: ExtractionMode::Lines,
        }
    }

    /// Splits on delimiters and keeps the lines that read like requirements:
    /// long enough, matching the indicator terms, and not benefits copy.
    pub fn filter_requirement_lines(&self, jd_text: &str) -> Vec<String> {
        self.splitter
            .split(jd_text)
            .map(str::trim)
            .filter(|line| line.chars().count() > MIN_LINE_CHARS)
            .filter(|line| self.indicator.is_match(line))
            .filter(|line| !self.benefits.is_match(line))
            .map(str::to_string)
            .collect()
    }

    /// Keyword fallback: capitalized words and symbol tokens, deduplicated
    /// case-insensitively, with stop-words and short tokens dropped.
    pub fn extract_keywords(&self, jd_text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for mat in self.token.find_iter(jd_text) {
            let token = mat.as_str().trim_end_matches('.');
            if token.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            let lower = token.to_lowercase();
            if STOP_WORDS.contains(&lower.as_str()) {
                continue;
            }
            if seen.insert(lower) {
                keywords.push(token.to_string());
            }
            if keywords.len() == KEYWORD_LIMIT {
                break;
            }
        }

        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> RequirementExtractor {
        RequirementExtractor::new().unwrap()
    }

    #[test]
    fn test_benefits_sentence_is_discarded_requirement_kept() {
        let lines = extractor().filter_requirement_lines(
            "Requirements: 5+ years experience with React. We offer competitive benefits.",
        );
        assert_eq!(lines, vec!["Requirements: 5+ years experience with React"]);
    }

    #[test]
    fn test_clean_input_passes_through_unchanged_in_order() {
        let jd = "Experience with distributed systems\n\
                  Strong knowledge of PostgreSQL\n\
                  Bachelor degree in computer science\n\
                  Familiarity with container orchestration";
        let extraction = extractor().extract(jd);
        assert_eq!(extraction.mode, ExtractionMode::Lines);
        assert_eq!(
            extraction.requirements,
            vec![
                "Experience with distributed systems",
                "Strong knowledge of PostgreSQL",
                "Bachelor degree in computer science",
                "Familiarity with container orchestration",
            ]
        );
    }

    #[test]
    fn test_label_prefixes_are_stripped_in_line_mode() {
        let jd = "Required: 4+ years experience building APIs\n\
                  Preferred: knowledge of stream processing\n\
                  Education: bachelor degree or equivalent experience";
        let extraction = extractor().extract(jd);
        assert_eq!(extraction.mode, ExtractionMode::Lines);
        assert_eq!(
            extraction.requirements,
            vec![
                "4+ years experience building APIs",
                "knowledge of stream processing",
                "bachelor degree or equivalent experience",
            ]
        );
    }

    #[test]
    fn test_too_few_lines_falls_back_to_keyword_mode() {
        let extraction = extractor().extract("Build cool things with React and TypeScript");
        assert_eq!(extraction.mode, ExtractionMode::Keywords);
        assert_eq!(extraction.requirements, vec!["Build", "React", "TypeScript"]);
    }

    #[test]
    fn test_keyword_mode_keeps_symbol_tokens_and_drops_stop_words() {
        let keywords = extractor().extract_keywords("The team uses C# and F# daily. Join us!");
        assert!(keywords.contains(&"C#".to_string()));
        assert!(keywords.contains(&"F#".to_string()));
        assert!(!keywords.contains(&"The".to_string()));
        assert!(!keywords.contains(&"Join".to_string()));
    }

    #[test]
    fn test_keyword_mode_caps_at_ten_unique_tokens() {
        let jd = "Alpha Bravo Charlie Delta Echo Foxtrot Golf Hotel India Juliett Kilo Lima";
        let keywords = extractor().extract_keywords(jd);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "Alpha");
    }

    #[test]
    fn test_keyword_mode_dedups_case_insensitively() {
        let keywords = extractor().extract_keywords("React react REACT");
        assert_eq!(keywords, vec!["React"]);
    }

    #[test]
    fn test_short_lines_are_noise() {
        let lines = extractor().filter_requirement_lines("skills\nexperience\n");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_line_mode_caps_at_fifteen() {
        let jd = (0..20)
            .map(|i| format!("Experience with system number {i} required"))
            .collect::<Vec<_>>()
            .join("\n");
        let extraction = extractor().extract(&jd);
        assert_eq!(extraction.mode, ExtractionMode::Lines);
        assert_eq!(extraction.requirements.len(), 15);
    }
}
