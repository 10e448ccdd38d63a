//! Text rendering for matched intents
//!
//! Replies carry light markup (`**bold**`, `> quote`, `*Label:*`, `----`)
//! that the front end decides how to display.

use crate::resume::{ConfidenceEntry, Project, Skills};

pub const FALLBACK_RESPONSE: &str =
    "I can tell you about my skills, projects or experience. What would you like to know?";

pub const GREETING: &str =
    "Hi, I am here to tell you all about my skills and projects. What would you like to know?";

const NO_CONFIDENCE_DATA: &str = "No confidence data available.";
const PROJECTS_INTRO: &str = "Here are some of my projects: \n\n";
const PROJECT_DIVIDER: &str = "----";

/// Human-readable name for a 1..=5 rating.
pub fn rating_label(rating: i64) -> &'static str {
    match rating {
        1 => "Beginner",
        2 => "Novice",
        3 => "Intermediate",
        4 => "Advanced",
        5 => "Expert",
        _ => "Unknown",
    }
}

pub fn format_skills(skills: &Skills) -> String {
    format!(
        "Here are my technical skills: \nLanguages: {}\nTools: {}\nDomains: {}",
        skills.languages.join(", "),
        skills.tools.join(", "),
        skills.domains.join(", ")
    )
}

pub fn format_projects(projects: &[Project]) -> String {
    let mut response = String::from(PROJECTS_INTRO);

    for project in projects {
        response.push_str(&format!("**{}**\n", project.title));
        response.push_str(&format!("> {}\n", project.summary));
        response.push_str(&format!("*Tech:* {}\n", project.tech.join(", ")));
        response.push_str(&format!("*Link:* {}", project.links.github));
        response.push_str(&format!("\n{}\n\n", PROJECT_DIVIDER));
    }

    response
}

pub fn format_confidence_entry(entry: &ConfidenceEntry) -> String {
    format!(
        "{}: {}/5 ({})",
        entry.skill,
        entry.rating,
        rating_label(entry.rating)
    )
}

pub fn format_confidence(entries: &[ConfidenceEntry]) -> String {
    if entries.is_empty() {
        return NO_CONFIDENCE_DATA.to_string();
    }

    entries
        .iter()
        .map(format_confidence_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Asks the user to name a skill, listing every rated one.
pub fn format_confidence_prompt(entries: &[ConfidenceEntry]) -> String {
    let available = entries
        .iter()
        .map(|entry| entry.skill.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I can provide confidence ratings for specific skills. Available: {}. \
         Ask for one like 'confidence in Python' or 'confidence all'.",
        available
    )
}
