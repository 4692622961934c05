//! Storyloom CLI: the main entry point.
//!
//! Commands:
//! - `chapter`   Build the context for one chapter
//! - `global`    Build the story-wide context (full or summary)
//! - `estimate`  Estimate the token size of a text
//! - `config`    Show or initialize configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "storyloom",
    about = "Storyloom: token-budgeted story context for LLM writing assistants",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the context for one chapter
    Chapter {
        /// Chapter id
        id: String,

        /// Story snapshot to read (defaults to the configured path)
        #[arg(short, long)]
        story: Option<PathBuf>,

        /// JSON file with an array of extra user-selected items
        #[arg(long)]
        select: Option<PathBuf>,

        /// Print the budgeted result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Build the story-wide context
    Global {
        /// Compact one-line-per-category summary
        #[arg(long)]
        summary: bool,

        /// Story snapshot to read (defaults to the configured path)
        #[arg(short, long)]
        story: Option<PathBuf>,

        /// Print the budgeted result as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Estimate the token size of a text (reads stdin when omitted)
    Estimate {
        text: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the context payload
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Chapter {
            id,
            story,
            select,
            json,
        } => commands::chapter::run(&id, story, select, json).await?,
        Commands::Global {
            summary,
            story,
            json,
        } => commands::global::run(summary, story, json).await?,
        Commands::Estimate { text } => commands::estimate::run(text)?,
        Commands::Config { init } => commands::config_cmd::run(init)?,
    }

    Ok(())
}
