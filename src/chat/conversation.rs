//! In-memory conversation with simulated reply latency

use crate::error::Result;
use crate::intent::{IntentMatcher, IntentResult};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only message log for one chat session.
///
/// A send is split into [`submit`](Conversation::submit), which records the
/// user message and computes the reply, and
/// [`deliver`](Conversation::deliver), which records the reply. Front ends
/// show a typing indicator in between; [`send`](Conversation::send) does both
/// with the configured delay.
pub struct Conversation {
    matcher: Arc<IntentMatcher>,
    messages: Vec<Message>,
    responding: bool,
    latency: Duration,
}

impl Conversation {
    pub fn new(matcher: Arc<IntentMatcher>, greeting: &str, latency: Duration) -> Self {
        Self {
            matcher,
            messages: vec![Message::new(Sender::Bot, greeting)],
            responding: false,
            latency,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_responding(&self) -> bool {
        self.responding
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Records `input` and returns the pending reply. Blank input is ignored.
    pub fn submit(&mut self, input: &str) -> Option<IntentResult> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::new(Sender::User, input));
        self.responding = true;
        Some(self.matcher.respond(input))
    }

    pub fn deliver(&mut self, result: IntentResult) -> &Message {
        self.responding = false;
        self.messages.push(Message::new(Sender::Bot, result.response));
        &self.messages[self.messages.len() - 1]
    }

    pub async fn send(&mut self, input: &str) -> Option<&Message> {
        let result = self.submit(input)?;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Some(self.deliver(result))
    }

    pub fn last_bot_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.sender == Sender::Bot)
    }

    /// Number of user turns so far.
    pub fn turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.sender == Sender::User)
            .count()
    }

    pub fn transcript_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }

    pub fn save_transcript(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.transcript_json()?)?;
        info!(
            "Saved transcript with {} messages to {}",
            self.messages.len(),
            path.display()
        );
        Ok(())
    }
}
