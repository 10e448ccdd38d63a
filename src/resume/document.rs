//! Resume document structures and loading

use crate::error::{Result, ResumeChatError};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

const BUNDLED_RESUME: &str = include_str!("../../data/resume.json");

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Structured resume backing every chat response.
///
/// Every collection defaults to empty, whether absent or `null`, so partially
/// filled documents load without error and the matcher simply has less to say.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: About,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: Vec<ConfidenceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default, deserialize_with = "null_as_default")]
    pub short: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
}

/// Self-assessed proficiency for a single skill. Ratings are meant to be
/// 1..=5 but anything else still loads and renders as "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceEntry {
    pub skill: String,
    pub rating: i64,
}

impl ConfidenceEntry {
    pub fn new(skill: impl Into<String>, rating: i64) -> Self {
        Self {
            skill: skill.into(),
            rating,
        }
    }
}

impl Skills {
    /// Languages, tools and domains in document order.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.languages
            .iter()
            .chain(self.tools.iter())
            .chain(self.domains.iter())
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.all().any(|skill| skill.to_lowercase() == name)
    }
}

impl ResumeDocument {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ResumeChatError::ResumeLoad(format!("Failed to parse resume JSON: {}", e)))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResumeChatError::InvalidInput(format!(
                "Resume file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(|e| match e {
            ResumeChatError::ResumeLoad(msg) => {
                ResumeChatError::ResumeLoad(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// The sample resume compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_RESUME)
    }

    /// Load from `path` when given, otherwise fall back to the bundled resume.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Confidence entries whose skill is not listed under languages, tools or
    /// domains. Allowed, but usually a typo in the document.
    pub fn unlisted_confidence_skills(&self) -> Vec<&str> {
        self.confidence
            .iter()
            .filter(|entry| !self.skills.contains_ignore_case(&entry.skill))
            .map(|entry| entry.skill.as_str())
            .collect()
    }

    pub fn confidence_for(&self, skill: &str) -> Option<&ConfidenceEntry> {
        let skill = skill.to_lowercase();
        self.confidence
            .iter()
            .find(|entry| entry.skill.to_lowercase() == skill)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.all().count()
    }
}
