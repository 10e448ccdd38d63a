//! Keyword families and whole-word phrase matching

use aho_corasick::AhoCorasick;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that count as part of a word when checking phrase boundaries.
const WORD_CLASS: &str = "0-9A-Za-z_";

/// A named family of trigger phrases, matched as plain substrings of the
/// already-lowercased input.
pub struct KeywordSet {
    name: &'static str,
    phrases: &'static [&'static str],
    matcher: AhoCorasick,
}

impl KeywordSet {
    fn new(name: &'static str, phrases: &'static [&'static str]) -> Self {
        // Phrases are static literals, so a build failure is a programming error.
        let matcher = AhoCorasick::new(phrases).expect("Invalid keyword set");
        Self {
            name,
            phrases,
            matcher,
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }
}

/// Phrases asking how good the person is at something. Their presence also
/// vetoes the skills listing, since "skill level" contains "skill".
pub static CONFIDENCE_SIGNALS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::new(
        "confidence",
        &[
            "skill level",
            "level",
            "confidence",
            "confident",
            "proficiency",
            "proficient",
            "how good",
            "rate",
        ],
    )
});

pub static SKILL_KEYWORDS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::new("skills", &["skill", "skills", "technology", "tools"])
});

pub static PROJECT_KEYWORDS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::new("projects", &["project", "portfolio", "work"])
});

pub static ABOUT_KEYWORDS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::new("about", &["about", "who are you", "tell me"])
});

pub static ALL_KEYWORDS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::new("all", &["all", "everything", "all skills"])
});

/// A lowercased phrase that only matches when both of its ends sit at the
/// start/end of the haystack or next to a non-word character, so `c` does not
/// match inside `docker`.
#[derive(Debug, Clone)]
pub struct WordPattern {
    phrase: String,
    regex: Regex,
}

impl WordPattern {
    pub fn new(phrase: &str) -> Result<Self, regex::Error> {
        let phrase = phrase.trim().to_lowercase();
        let pattern = format!(
            "(?:^|[^{class}]){phrase}(?:[^{class}]|$)",
            class = WORD_CLASS,
            phrase = regex::escape(&phrase)
        );
        let regex = Regex::new(&pattern)?;
        Ok(Self { phrase, regex })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// `haystack` is expected to be lowercased already.
    pub fn is_match(&self, haystack: &str) -> bool {
        !self.phrase.is_empty() && self.regex.is_match(haystack)
    }

    fn len(&self) -> usize {
        self.phrase.chars().count()
    }
}

/// One-off whole-word check of `phrase` inside a lowercased `haystack`.
#[cfg(test)]
fn contains_whole_word(haystack: &str, phrase: &str) -> bool {
    WordPattern::new(phrase)
        .map(|pattern| pattern.is_match(haystack))
        .unwrap_or(false)
}

/// Stable sort so that longer phrases are tried first ("c++" before "c").
pub fn sort_longest_first(patterns: &mut [WordPattern]) {
    sort_longest_first_by(patterns, |pattern| pattern);
}

/// Same ordering as [`sort_longest_first`] for items carrying a pattern.
pub fn sort_longest_first_by<T>(items: &mut [T], pattern: impl Fn(&T) -> &WordPattern) {
    items.sort_by(|a, b| pattern(b).len().cmp(&pattern(a).len()));
}
