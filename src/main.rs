//! Main entry point for the lingo-toolkit CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lingo_toolkit::cli::{self, commands::Commands};

/// Lingo Toolkit - translate text with Gemini and generate random strings
#[derive(Parser, Debug)]
#[command(name = "lingo-toolkit", version, about, long_about = None)]
struct Args {
    /// Gemini API key (optional, defaults to GEMINI_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Config file (TOML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lingo_toolkit={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate {
            text,
            target_lang,
            json,
        }) => {
            cli::commands::handle_translate(text, target_lang, json, args.api_key, args.config)
                .await?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages();
        }
        Some(Commands::Generate {
            length,
            no_numbers,
            no_symbols,
            count,
        }) => {
            cli::commands::handle_generate(length, no_numbers, no_symbols, count)?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
