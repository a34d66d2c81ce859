//! Main entry point for the formal translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formal_translator::cli::commands::{self, Commands, ConfigArgs};

/// Formal Translator - Spanish to formal English with provider fallback
#[derive(Parser, Debug)]
#[command(name = "formal-translator", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging on stderr; stdout carries translations
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("formal_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate { text, file }) => {
            let config = args.config.resolve()?;
            commands::handle_translate(text, file, config).await?;
        }
        Some(Commands::Formalize { text, file }) => {
            commands::handle_formalize(text, file)?;
        }
        Some(Commands::Server { host, port }) => {
            let config = args.config.resolve()?;
            commands::handle_server(host, port, config).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
