//! Output formatters for chat replies

use crate::config::OutputFormat;
use crate::error::Result;
use crate::intent::IntentResult;
use colored::{Color, Colorize};
use regex::Regex;
use std::sync::LazyLock;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("Invalid URL regex"));

const DIVIDER_TOKEN: &str = "----";
const RULE_WIDTH: usize = 40;

/// Trait for turning a matched reply into displayable text
pub trait ReplyFormatter {
    fn format_reply(&self, result: &IntentResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter that interprets the reply markup
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter emitting the full intent result
pub struct JsonFormatter {
    pretty: bool,
}

/// Passes the reply text through untouched
pub struct PlainFormatter;

/// Picks the formatter for a requested output format
pub struct ReplyRenderer {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    plain_formatter: PlainFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render reply markup line by line: `**title**`, `> quote`,
    /// `*Label:* value`, `----` dividers, and bare links.
    pub fn render_markup(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_line(&self, line: &str) -> String {
        if line.trim() == DIVIDER_TOKEN {
            return self.dim(&"─".repeat(RULE_WIDTH));
        }

        if let Some(title) = line
            .strip_prefix("**")
            .and_then(|rest| rest.strip_suffix("**"))
        {
            return if self.use_colors {
                title.color(Color::Cyan).bold().to_string()
            } else {
                title.to_string()
            };
        }

        if let Some(quote) = line.strip_prefix("> ") {
            let body = if self.use_colors {
                quote.italic().to_string()
            } else {
                quote.to_string()
            };
            return format!("{} {}", self.dim("│"), body);
        }

        if let Some((label, value)) = split_label(line) {
            let label = if self.use_colors {
                label.bold().to_string()
            } else {
                label.to_string()
            };
            return format!("{}{}", label, self.highlight_links(value));
        }

        self.highlight_links(line)
    }

    fn highlight_links(&self, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        URL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                caps[0].color(Color::Blue).underline().to_string()
            })
            .to_string()
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Split `*Tech:* Rust, Go` into (`Tech:`, ` Rust, Go`).
fn split_label(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('*')?;
    let end = rest.find(":*")?;
    let label = &rest[..end + 1];
    if label.len() <= 1 || label.contains('*') {
        return None;
    }
    Some((label, &rest[end + 2..]))
}

impl ReplyFormatter for ConsoleFormatter {
    fn format_reply(&self, result: &IntentResult) -> Result<String> {
        Ok(self.render_markup(&result.response))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReplyFormatter for JsonFormatter {
    fn format_reply(&self, result: &IntentResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReplyFormatter for PlainFormatter {
    fn format_reply(&self, result: &IntentResult) -> Result<String> {
        Ok(result.response.clone())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Plain
    }
}

impl ReplyRenderer {
    pub fn new(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            plain_formatter: PlainFormatter,
        }
    }

    pub fn render(&self, result: &IntentResult, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_reply(result),
            OutputFormat::Json => self.json_formatter.format_reply(result),
            OutputFormat::Plain => self.plain_formatter.format_reply(result),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReplyRenderer {
    fn default() -> Self {
        Self::new(true, true)
    }
}
