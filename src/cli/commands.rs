//! CLI command definitions and handlers

use anyhow::Context;
use clap::{Args, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::core::config::TranslatorConfig;

/// Commands for the formal translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate Spanish text into formal English
    Translate {
        /// Text to translate (reads stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Apply only the formal rewriting to English text
    Formalize {
        /// Text to rewrite (reads stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Start HTTP API server
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Provider overrides shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// JSON configuration file (defaults to $TRANSLATOR_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// LibreTranslate endpoint
    #[arg(long, global = true)]
    pub libretranslate_url: Option<String>,

    /// LibreTranslate API key
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// MyMemory endpoint
    #[arg(long, global = true)]
    pub mymemory_url: Option<String>,

    /// Per-provider timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,
}

impl ConfigArgs {
    /// Resolve configuration: defaults, file, environment, then these flags
    pub fn resolve(&self) -> anyhow::Result<TranslatorConfig> {
        let config = match &self.config {
            Some(path) => TranslatorConfig::from_file(path)?.apply_env()?,
            None => TranslatorConfig::from_sources()?,
        };

        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line flags on a configuration
    pub fn apply(&self, mut config: TranslatorConfig) -> TranslatorConfig {
        if let Some(url) = &self.libretranslate_url {
            config.libretranslate_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.libretranslate_api_key = Some(key.clone());
        }
        if let Some(url) = &self.mymemory_url {
            config.mymemory_url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }
}

/// Take text from the argument, a file, or stdin, in that order
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Handle translate command
pub async fn handle_translate(
    text: Option<String>,
    file: Option<PathBuf>,
    config: TranslatorConfig,
) -> anyhow::Result<()> {
    use crate::core::client::FallbackTranslator;
    use crate::core::models::TranslationRequest;
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::{Duration, Instant};
    use tracing::info;

    let input = read_input(text, file)?;
    let request = TranslationRequest::new(&input)?;

    let translator = FallbackTranslator::new(config)?;
    let start_time = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Translating...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = translator.translate(&request).await;

    spinner.finish_and_clear();
    info!("Translation from {} took {:?}", result.source, start_time.elapsed());

    if result.source.is_stub() {
        eprintln!("⚠️  All providers failed; showing demo-mode output");
    }

    println!("{}", result.text);

    Ok(())
}

/// Handle formalize command
pub fn handle_formalize(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<()> {
    use crate::core::formalizer::formalize;

    let input = read_input(text, file)?;
    println!("{}", formalize(input.trim_end_matches('\n')));

    Ok(())
}

/// Handle server command
pub async fn handle_server(host: String, port: u16, config: TranslatorConfig) -> anyhow::Result<()> {
    use crate::core::client::FallbackTranslator;
    use crate::server::api::run_server;
    use tracing::info;

    let translator = FallbackTranslator::new(config)?;

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Provider chain: {}", translator.provider_names().join(" -> "));
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(host, port, translator).await?;

    Ok(())
}
