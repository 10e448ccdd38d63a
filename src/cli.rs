//! CLI interface for the resume chat

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-chat")]
#[command(about = "Chat with a resume: ask about skills, projects and proficiency")]
#[command(long_about = "Answer free-text questions about a structured JSON resume using keyword intent matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Path to resume file (JSON)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Reply immediately instead of simulating typing
        #[arg(long)]
        no_delay: bool,

        /// Save the transcript as JSON when the session ends
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Ask a single question and print the reply
    Ask {
        /// The question to ask
        question: String,

        /// Path to resume file (JSON)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Output format: console, json, plain
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize the loaded resume
    Resume {
        /// Path to resume file (JSON)
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "plain" | "text" | "txt" => Ok(crate::config::OutputFormat::Plain),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, plain",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// True when the user asked to leave the chat loop.
pub fn is_exit_command(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "exit" | "quit" | ":q" | "/exit"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_command() {
        let cli = Cli::parse_from(["resume-chat", "ask", "what are your skills", "-o", "json"]);
        match cli.command {
            Commands::Ask {
                question, output, ..
            } => {
                assert_eq!(question, "what are your skills");
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected ask command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("text"), Ok(OutputFormat::Plain));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("me.json"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("me.JSON"), &["json"]).is_ok());
        assert!(validate_file_extension(Path::new("me.yaml"), &["json"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["json"]).is_err());
    }

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("  QUIT \n"));
        assert!(!is_exit_command("tell me about your work"));
    }
}
