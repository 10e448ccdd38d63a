//! Intent classification over a resume document
//!
//! Rules are evaluated top to bottom and the first hit wins:
//!
//! 1. skills, unless the input also carries a confidence signal
//! 2. projects
//! 3. about
//! 4. confidence (all / named rating / known skill / prompt)
//! 5. unknown

use crate::intent::formatter::{
    format_confidence, format_confidence_prompt, format_projects, format_skills,
    FALLBACK_RESPONSE,
};
use crate::intent::keywords::{
    sort_longest_first, sort_longest_first_by, WordPattern, ABOUT_KEYWORDS, ALL_KEYWORDS,
    CONFIDENCE_SIGNALS, PROJECT_KEYWORDS, SKILL_KEYWORDS,
};
use crate::resume::ResumeDocument;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of request a message expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "skills")]
    Skills,
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "about")]
    About,
    #[serde(rename = "confidence")]
    Confidence,
    /// Only reported alongside `Confidence` when no skill could be identified.
    #[serde(rename = "skill level")]
    SkillLevel,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Skills => "skills",
            Intent::Projects => "projects",
            Intent::About => "about",
            Intent::Confidence => "confidence",
            Intent::SkillLevel => "skill level",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Either one intent or several reported together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntentTag {
    Single(Intent),
    Composite(Vec<Intent>),
}

impl IntentTag {
    /// First intent carried by the tag.
    pub fn primary(&self) -> Option<Intent> {
        match self {
            IntentTag::Single(intent) => Some(*intent),
            IntentTag::Composite(intents) => intents.first().copied(),
        }
    }

    pub fn contains(&self, intent: Intent) -> bool {
        match self {
            IntentTag::Single(single) => *single == intent,
            IntentTag::Composite(intents) => intents.contains(&intent),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, IntentTag::Composite(_))
    }
}

impl From<Intent> for IntentTag {
    fn from(intent: Intent) -> Self {
        IntentTag::Single(intent)
    }
}

impl fmt::Display for IntentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentTag::Single(intent) => write!(f, "{}", intent),
            IntentTag::Composite(intents) => {
                let labels: Vec<&str> = intents.iter().map(|i| i.label()).collect();
                write!(f, "[{}]", labels.join(", "))
            }
        }
    }
}

/// Outcome of matching one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    pub intent: IntentTag,
    pub response: String,
}

impl IntentResult {
    fn new(intent: impl Into<IntentTag>, response: String) -> Self {
        Self {
            intent: intent.into(),
            response,
        }
    }
}

/// Precompiled whole-word patterns for every skill name in a document.
#[derive(Debug, Clone, Default)]
pub struct SkillIndex {
    /// Confidence skill names, longest first, with their position in
    /// `ResumeDocument::confidence`.
    rated: Vec<(WordPattern, usize)>,
    /// Languages, tools and domains, longest first.
    known: Vec<WordPattern>,
}

impl SkillIndex {
    pub fn build(resume: &ResumeDocument) -> Self {
        let mut rated: Vec<(WordPattern, usize)> = resume
            .confidence
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| compile(&entry.skill).map(|pattern| (pattern, idx)))
            .collect();
        sort_longest_first_by(&mut rated, |(pattern, _)| pattern);

        let mut known: Vec<WordPattern> = resume.skills.all().filter_map(|s| compile(s)).collect();
        sort_longest_first(&mut known);

        Self { rated, known }
    }

    fn find_rated(&self, input: &str) -> Option<usize> {
        self.rated
            .iter()
            .find(|(pattern, _)| pattern.is_match(input))
            .map(|(_, idx)| *idx)
    }

    fn find_known(&self, input: &str) -> Option<&str> {
        self.known
            .iter()
            .find(|pattern| pattern.is_match(input))
            .map(|pattern| pattern.phrase())
    }

    pub fn rated_count(&self) -> usize {
        self.rated.len()
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }
}

fn compile(skill: &str) -> Option<WordPattern> {
    match WordPattern::new(skill) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!("Skipping skill '{}' for matching: {}", skill, e);
            None
        }
    }
}

/// Owns a resume and its skill index so repeated questions skip pattern
/// compilation. Answers are identical to [`match_intent`].
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    resume: ResumeDocument,
    index: SkillIndex,
}

impl IntentMatcher {
    pub fn new(resume: ResumeDocument) -> Self {
        let index = SkillIndex::build(&resume);
        Self { resume, index }
    }

    pub fn resume(&self) -> &ResumeDocument {
        &self.resume
    }

    pub fn index(&self) -> &SkillIndex {
        &self.index
    }

    pub fn respond(&self, input: &str) -> IntentResult {
        let result = classify(input, &self.resume, &self.index);
        debug!(
            "Matched intent {} for input of {} chars",
            result.intent,
            input.chars().count()
        );
        result
    }
}

/// Classify `input` against `resume` and render the reply. Never fails.
pub fn match_intent(input: &str, resume: &ResumeDocument) -> IntentResult {
    classify(input, resume, &SkillIndex::build(resume))
}

fn classify(input: &str, resume: &ResumeDocument, index: &SkillIndex) -> IntentResult {
    let input = input.to_lowercase();
    let wants_confidence = CONFIDENCE_SIGNALS.matches(&input);

    if SKILL_KEYWORDS.matches(&input) && !wants_confidence {
        return IntentResult::new(Intent::Skills, format_skills(&resume.skills));
    }

    if PROJECT_KEYWORDS.matches(&input) {
        return IntentResult::new(Intent::Projects, format_projects(&resume.projects));
    }

    if ABOUT_KEYWORDS.matches(&input) {
        return IntentResult::new(Intent::About, resume.about.short.clone());
    }

    if wants_confidence {
        return confidence_reply(&input, resume, index);
    }

    IntentResult::new(Intent::Unknown, FALLBACK_RESPONSE.to_string())
}

fn confidence_reply(input: &str, resume: &ResumeDocument, index: &SkillIndex) -> IntentResult {
    if ALL_KEYWORDS.matches(input) {
        return IntentResult::new(Intent::Confidence, format_confidence(&resume.confidence));
    }

    if let Some(idx) = index.find_rated(input) {
        let entry = std::slice::from_ref(&resume.confidence[idx]);
        return IntentResult::new(Intent::Confidence, format_confidence(entry));
    }

    // Only the best known-skill hit is considered; if it has no rating we prompt.
    if let Some(entry) = index.find_known(input).and_then(|name| resume.confidence_for(name)) {
        return IntentResult::new(
            Intent::Confidence,
            format_confidence(std::slice::from_ref(entry)),
        );
    }

    IntentResult::new(
        IntentTag::Composite(vec![Intent::Confidence, Intent::SkillLevel]),
        format_confidence_prompt(&resume.confidence),
    )
}
