//! SpamLens CLI - Submit messages and browse their classification
//!
//! Terminal counterpart of the web form: a text box, a send action,
//! and the list of the most recent results.

mod api;
mod config;
mod form;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use spamlens::Label;

use api::{MessageResponse, SpamLensClient};
use config::Config;
use form::{Submission, SubmitForm, RECENT_LIMIT};

const QUIT_COMMAND: &str = "/quit";

#[derive(Parser)]
#[command(name = "spamlens")]
#[command(about = "SpamLens CLI - Send messages and see how they are classified", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one message and show the refreshed list
    Send {
        /// Message text
        text: String,
    },

    /// List recent messages
    List {
        /// Max messages to show
        #[arg(short, long, default_value_t = RECENT_LIMIT)]
        limit: usize,
    },

    /// Interactive form: type messages, see results as they come back
    Chat,

    /// Show backend status
    Status,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Persist the API base URL
    SetUrl {
        /// e.g. http://localhost:5002
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Send { text } => cmd_send(text).await,
        Commands::List { limit } => cmd_list(limit).await,
        Commands::Chat => cmd_chat().await,
        Commands::Status => cmd_status().await,
        Commands::Config { action } => cmd_config(action),
    }
}

fn client() -> Result<SpamLensClient> {
    let config = Config::load()?;
    Ok(SpamLensClient::new(&config.effective_base_url()))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_send(text: String) -> Result<()> {
    let client = client()?;
    let mut form = SubmitForm::new();
    form.set_text(text);

    match form.submit(&client).await? {
        Submission::Skipped => {
            println!("{}", "Nothing to send - message is empty.".yellow());
        }
        Submission::Stored {
            message,
            refresh_error,
        } => show_stored(&message, refresh_error.as_deref(), form.messages()),
    }

    Ok(())
}

async fn cmd_list(limit: usize) -> Result<()> {
    let client = client()?;
    let mut messages = client.get_messages().await?;
    messages.truncate(limit);
    print_list(&messages);
    Ok(())
}

async fn cmd_chat() -> Result<()> {
    let client = client()?;
    let mut form = SubmitForm::new();

    println!(
        "{} {} {}",
        "SMS Spam Demo".bold(),
        format!("({})", client.base_url()).dimmed(),
        format!("- type {} to exit", QUIT_COMMAND).dimmed()
    );

    match form.load(&client).await {
        Ok(()) => print_list(form.messages()),
        Err(e) => println!("{} Could not load messages: {:#}", "✗".red(), e),
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Message")
            .with_initial_text(form.text())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if input.trim() == QUIT_COMMAND {
            break;
        }

        form.set_text(input);

        match form.submit(&client).await {
            Ok(Submission::Skipped) => {}
            Ok(Submission::Stored {
                message,
                refresh_error,
            }) => show_stored(&message, refresh_error.as_deref(), form.messages()),
            Err(e) => {
                println!("{} {:#}", "✗".red(), e);
                println!("{}", "Your text was kept - press Enter to retry.".dimmed());
            }
        }
    }

    Ok(())
}

async fn cmd_status() -> Result<()> {
    let client = client()?;
    print!("Checking {} ... ", client.base_url());

    match client.status().await {
        Ok(status) => println!("{} {}", "OK".green(), status.status.dimmed()),
        Err(e) => {
            println!("{}", "Failed".red());
            return Err(e);
        }
    }

    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(ConfigAction::SetUrl { url }) = action {
        config.set_base_url(&url);
        config.save()?;
        println!("{} Base URL set to {}", "✓".green(), config.base_url);
        return Ok(());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    if std::env::var(config::API_BASE_ENV).is_ok() {
        println!(
            "  Effective URL: {} {}",
            config.effective_base_url().cyan(),
            format!("(from {})", config::API_BASE_ENV).dimmed()
        );
    }

    Ok(())
}

// ============================================
// Output
// ============================================

fn label_badge(label: i32) -> colored::ColoredString {
    match Label::from_code_lossy(label) {
        Label::Spam => "SPAM".red().bold(),
        Label::Ham => "HAM".green().bold(),
        Label::Unknown => "UNKNOWN".yellow().bold(),
    }
}

fn show_stored(message: &MessageResponse, refresh_error: Option<&str>, list: &[MessageResponse]) {
    print_result(message);
    println!();
    match refresh_error {
        None => print_list(list),
        Some(e) => println!("{} Could not refresh messages: {}", "!".yellow(), e),
    }
}

fn print_result(message: &MessageResponse) {
    println!(
        "{} Classified as {} ({:.2}){}",
        "✓".green(),
        label_badge(message.label),
        message.prob,
        if message.anomaly {
            " - anomaly".magenta().to_string()
        } else {
            String::new()
        }
    );
}

fn print_list(messages: &[MessageResponse]) {
    if messages.is_empty() {
        println!("No messages yet.");
        return;
    }

    println!("{}", "Last messages:".bold());
    for m in messages {
        println!(
            "  {} — {} {}",
            label_badge(m.label),
            truncate_string(&m.text, 60),
            format!("({:.2})", m.prob).dimmed()
        );
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}
