//! Resume chat library

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod intent;
pub mod output;
pub mod resume;

pub use config::Config;
pub use error::{Result, ResumeChatError};
pub use intent::{match_intent, Intent, IntentMatcher, IntentResult, IntentTag};
pub use resume::ResumeDocument;
