//! Resume chat: answer questions about a resume from the terminal

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use log::{error, info, warn};
use resume_chat::chat::Conversation;
use resume_chat::cli::{self, Cli, Commands, ConfigAction};
use resume_chat::config::{Config, OutputFormat};
use resume_chat::error::{Result, ResumeChatError};
use resume_chat::intent::IntentMatcher;
use resume_chat::output::ReplyRenderer;
use resume_chat::resume::ResumeDocument;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Chat {
            resume,
            no_delay,
            save,
        } => {
            let resume = load_resume(resume, &config)?;
            let matcher = Arc::new(IntentMatcher::new(resume));
            chat_session(matcher, &config, no_delay, save).await?;
        }

        Commands::Ask {
            question,
            resume,
            output,
        } => {
            let format = match output {
                Some(output) => {
                    cli::parse_output_format(&output).map_err(ResumeChatError::InvalidInput)?
                }
                None => config.output.format,
            };

            let resume = load_resume(resume, &config)?;
            let matcher = IntentMatcher::new(resume);
            let result = matcher.respond(&question);

            let renderer = ReplyRenderer::new(config.output.color_output, config.output.pretty_json);
            println!("{}", renderer.render(&result, &format)?);
        }

        Commands::Resume { resume } => {
            let resume = load_resume(resume, &config)?;
            print_resume_summary(&resume);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                match config.resume_path() {
                    Some(path) => println!("Resume: {}", path.display()),
                    None => println!("Resume: (bundled sample)"),
                }
                println!("Greeting: {}", config.chat.greeting);
                println!("Response Delay: {}ms", config.chat.response_delay_ms);
                println!("Prompt: {:?}", config.chat.prompt);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Colors: {}", config.output.color_output);
                println!("  Pretty JSON: {}", config.output.pretty_json);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// CLI path wins over the configured one; neither means the bundled resume.
fn load_resume(cli_path: Option<PathBuf>, config: &Config) -> Result<ResumeDocument> {
    let path = cli_path.or_else(|| config.resume.path.clone());

    match &path {
        Some(path) => {
            cli::validate_file_extension(path, &["json"])
                .map_err(|e| ResumeChatError::InvalidInput(format!("Resume file: {}", e)))?;
            info!("Loading resume from {}", path.display());
        }
        None => info!("Using bundled sample resume"),
    }

    let resume = ResumeDocument::load(path.as_deref())?;
    for skill in resume.unlisted_confidence_skills() {
        warn!(
            "Confidence rating for '{}' has no matching language, tool or domain",
            skill
        );
    }

    Ok(resume)
}

async fn chat_session(
    matcher: Arc<IntentMatcher>,
    config: &Config,
    no_delay: bool,
    save: Option<PathBuf>,
) -> anyhow::Result<()> {
    let delay = if no_delay {
        Duration::ZERO
    } else {
        config.response_delay()
    };
    let mut conversation = Conversation::new(matcher, &config.chat.greeting, delay);
    let renderer = ReplyRenderer::new(config.output.color_output, config.output.pretty_json);
    let use_colors = config.output.color_output;

    println!("💬 Resume chat (type 'exit' to leave)\n");
    print_bot(&renderer.console().render_markup(&config.chat.greeting), use_colors);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", config.chat.prompt);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            println!();
            break;
        };

        if cli::is_exit_command(&line) {
            break;
        }

        let Some(pending) = conversation.submit(&line) else {
            continue;
        };

        if !conversation.latency().is_zero() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("typing...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            tokio::time::sleep(conversation.latency()).await;
            spinner.finish_and_clear();
        }

        let rendered = renderer.render(&pending, &OutputFormat::Console)?;
        conversation.deliver(pending);
        print_bot(&rendered, use_colors);
    }

    info!("Chat ended after {} questions", conversation.turns());

    if let Some(path) = save {
        conversation
            .save_transcript(&path)
            .with_context(|| format!("Failed to save transcript to {}", path.display()))?;
        println!("📝 Transcript saved to {}", path.display());
    }

    Ok(())
}

fn print_bot(text: &str, use_colors: bool) {
    let label = if use_colors {
        "bot>".green().bold().to_string()
    } else {
        "bot>".to_string()
    };
    println!("{} {}\n", label, text);
}

fn print_resume_summary(resume: &ResumeDocument) {
    println!("📄 Resume Summary\n");
    println!("About: {}", truncate_text(&resume.about.short, 120));
    println!("\n🧰 Skills ({}):", resume.skill_count());
    println!("  • Languages: {}", resume.skills.languages.join(", "));
    println!("  • Tools: {}", resume.skills.tools.join(", "));
    println!("  • Domains: {}", resume.skills.domains.join(", "));

    println!("\n📁 Projects ({}):", resume.projects.len());
    for project in &resume.projects {
        println!("  • {} ({})", project.title, project.tech.join(", "));
    }

    println!("\n📈 Confidence Ratings ({}):", resume.confidence.len());
    for entry in &resume.confidence {
        println!(
            "  • {}",
            resume_chat::intent::formatter::format_confidence_entry(entry)
        );
    }

    let unlisted = resume.unlisted_confidence_skills();
    if !unlisted.is_empty() {
        println!("\n⚠️  Rated but not listed as skills: {}", unlisted.join(", "));
    }
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    // Cut at the last word boundary to avoid splitting words
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}
