//! Text extraction: flattens a structured resume into the single plain-text
//! document all keyword and metric matching runs against.

use crate::models::resume::{Resume, SkillSet};

/// Flattens a resume into one plain-text document with uppercase section
/// headers. Blank fields are omitted entirely. A resume that already carries
/// a non-empty precomputed rendering is returned unchanged.
pub fn flatten_resume(resume: &Resume) -> String {
    if let Some(text) = resume.plain_text.as_deref() {
        if !text.trim().is_empty() {
            return text.to_string();
        }
    }

    let mut sections: Vec<String> = Vec::new();

    let identity: Vec<&str> = [
        &resume.personal_info.full_name,
        &resume.personal_info.title,
        &resume.personal_info.email,
        &resume.personal_info.phone,
        &resume.personal_info.location,
        &resume.personal_info.linkedin,
        &resume.personal_info.website,
    ]
    .into_iter()
    .map(|field| field.trim())
    .filter(|field| !field.is_empty())
    .collect();
    if !identity.is_empty() {
        sections.push(identity.join("\n"));
    }

    if !resume.summary.trim().is_empty() {
        sections.push(format!("SUMMARY\n{}", resume.summary.trim()));
    }

    let experience: Vec<String> = resume
        .experience
        .iter()
        .map(|entry| {
            let mut lines: Vec<String> = Vec::new();
            push_nonempty(&mut lines, &entry.position);
            push_nonempty(&mut lines, &entry.company);
            push_nonempty(&mut lines, &date_range(&entry.start_date, &entry.end_date));
            push_nonempty(&mut lines, &entry.description);
            lines.join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect();
    if !experience.is_empty() {
        sections.push(format!("EXPERIENCE\n{}", experience.join("\n\n")));
    }

    let education: Vec<String> = resume
        .education
        .iter()
        .map(|entry| {
            let mut lines: Vec<String> = Vec::new();
            let degree = match (entry.degree.trim(), entry.field.trim()) {
                ("", field) => field.to_string(),
                (degree, "") => degree.to_string(),
                (degree, field) => format!("{degree} in {field}"),
            };
            push_nonempty(&mut lines, &degree);
            push_nonempty(&mut lines, &entry.institution);
            push_nonempty(&mut lines, &date_range(&entry.start_date, &entry.end_date));
            lines.join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect();
    if !education.is_empty() {
        sections.push(format!("EDUCATION\n{}", education.join("\n\n")));
    }

    if !resume.skills.is_empty() {
        sections.push(format!("SKILLS\n{}", skill_lines(&resume.skills)));
    }

    let projects: Vec<String> = resume
        .projects
        .iter()
        .map(|entry| {
            let mut lines: Vec<String> = Vec::new();
            push_nonempty(&mut lines, &entry.title);
            push_nonempty(&mut lines, &entry.description);
            let technologies = entry
                .technologies
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !technologies.is_empty() {
                lines.push(format!("Technologies: {technologies}"));
            }
            if let Some(link) = entry.link.as_deref() {
                push_nonempty(&mut lines, link);
            }
            lines.join("\n")
        })
        .filter(|block| !block.is_empty())
        .collect();
    if !projects.is_empty() {
        sections.push(format!("PROJECTS\n{}", projects.join("\n\n")));
    }

    sections.join("\n\n")
}

fn push_nonempty(lines: &mut Vec<String>, value: &str) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

/// "start - end", "start - Present" for current entries, or empty when
/// neither date is set.
fn date_range(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => String::new(),
        (start, "") => format!("{start} - Present"),
        ("", end) => end.to_string(),
        (start, end) => format!("{start} - {end}"),
    }
}

fn skill_lines(skills: &SkillSet) -> String {
    let mut lines: Vec<String> = Vec::new();
    let technical = join_nonempty(&skills.technical);
    if !technical.is_empty() {
        lines.push(format!("Technical: {technical}"));
    }
    let soft = join_nonempty(&skills.soft);
    if !soft.is_empty() {
        lines.push(format!("Soft: {soft}"));
    }
    lines.join("\n")
}

fn join_nonempty(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
