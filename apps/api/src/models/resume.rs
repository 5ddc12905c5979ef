use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact and identity fields shown at the top of a resume.
/// Absent fields deserialize to empty strings; scoring treats them as blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

impl PersonalInfo {
    /// Number of non-empty fields. The content-quality scorer rewards
    /// resumes with more than three populated contact fields.
    pub fn populated_field_count(&self) -> usize {
        [
            &self.full_name,
            &self.title,
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.website,
        ]
        .iter()
        .filter(|field| !field.trim().is_empty())
        .count()
    }
}

/// One job held by the candidate. Owned exclusively by the parent resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Skills split the way recruiters read them: tools vs. behaviors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: None,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// The full resume record as submitted by a client. Entry order is
/// presentation order; nothing here is persisted server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub certifications: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    /// Precomputed plain-text rendering. When present and non-empty the
    /// extractor returns it unchanged instead of re-flattening.
    pub plain_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_field_count_ignores_whitespace() {
        let info = PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            email: "   ".to_string(),
            phone: String::new(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.populated_field_count(), 2);
    }

    #[test]
    fn test_missing_entry_id_gets_generated() {
        let json = r#"{"company": "Acme", "position": "Engineer"}"#;
        let entry: ExperienceEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.id.is_nil());
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_resume_deserializes_from_empty_object() {
        let resume: Resume = serde_json::from_str("{}").unwrap();
        assert!(resume.experience.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.plain_text.is_none());
    }

    #[test]
    fn test_skill_set_is_empty_requires_both_lists_empty() {
        let skills = SkillSet {
            technical: vec!["Rust".to_string()],
            soft: vec![],
        };
        assert!(!skills.is_empty());
        assert!(SkillSet::default().is_empty());
    }
}
