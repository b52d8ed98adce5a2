//! Grok-Search command line entry point
//!
//! Resolves settings, runs one search and prints the answer.

use anyhow::{Context, Result};
use clap::Parser;
use grok_search::{config, GrokError, SearchClient, Settings};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Ask Grok a question with live web search enabled
#[derive(Parser, Debug)]
#[command(name = "grok-search", version, about)]
struct Args {
    /// Query to search for
    #[arg(default_value = "latest developments in artificial intelligence")]
    query: String,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print the answer
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Grok-Search v{}", grok_search::VERSION);

    let settings = load_settings(args.config)?;
    let client = SearchClient::new(settings).context("failed to initialize HTTP client")?;

    info!("Search query: {}", args.query);

    match client.search(&args.query, !args.quiet).await {
        Ok(answer) => {
            if !args.quiet {
                println!("\nSearch result:");
                println!("{}", "=".repeat(50));
            }
            println!("{}", answer);
            Ok(())
        }
        Err(e) => {
            error!("Search failed: {}", e);
            Err(e.into())
        }
    }
}

/// Load settings from file, falling back to the environment or a prompt
fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let path = explicit.unwrap_or_else(config::resolve_path);

    let (mut settings, found) = match Settings::load_from_file(&path) {
        Ok(settings) => {
            info!("Loaded settings from: {}", path.display());
            (settings, true)
        }
        Err(GrokError::ConfigNotFound { .. }) => {
            warn!("Configuration file {} does not exist", path.display());
            (Settings::default(), false)
        }
        Err(e) => return Err(e.into()),
    };
    settings.merge_env();

    // A present but placeholder key is left for the search to reject
    if !found && settings.api_key.is_empty() {
        let api_key = prompt_api_key()?;
        settings = Settings::from_parameters(
            api_key,
            Some(settings.base_url),
            Some(settings.model),
        );
    }

    Ok(settings)
}

/// Read an API key from standard input
fn prompt_api_key() -> Result<String> {
    print!("Enter your xAI API key: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read API key from stdin")?;

    Ok(line.trim().to_string())
}
