//! Intent matching and reply formatting

pub mod formatter;
pub mod keywords;
pub mod matcher;

pub use matcher::{match_intent, Intent, IntentMatcher, IntentResult, IntentTag};
