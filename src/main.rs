// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, LogLevel};
use crate::translation::{BatchTranslator, TranslationRequest, TranslationService};

mod adapters;
mod app_config;
mod errors;
mod translation;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a single text
    Text {
        /// Text to translate
        text: String,

        /// Target language code (e.g. 'en', 'fr', 'es')
        #[arg(short, long)]
        target: String,

        /// Source language code; omit to auto-detect
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Translate many texts in one paced batch
    Batch {
        /// Texts to translate
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// File with one text per line (used when no TEXT args are given)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target language code
        #[arg(short, long)]
        target: String,

        /// Source language code; omit to auto-detect
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Detect the language of a text
    Detect {
        /// Text to analyze
        text: String,
    },

    /// List the supported languages
    Languages,

    /// Show cache statistics for the service
    Stats,
}

/// tuneme-translate - translation service CLI for the TuneMe platform
///
/// Translates platform content through a live provider when credentials are
/// configured, or a deterministic offline backend otherwise. Results are
/// cached in Redis when a cache URL is configured.
#[derive(Parser, Debug)]
#[command(name = "tuneme-translate")]
#[command(version = "1.0.0")]
#[command(about = "Cache-backed batch translation service")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&level));
    }

    // Load or create configuration
    let config = if Path::new(&cli.config_path).exists() {
        Config::from_file(&cli.config_path)
            .context(format!("Failed to load config file: {}", cli.config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            cli.config_path
        );
        let config = Config::default();
        config
            .save_to_file(&cli.config_path)
            .context(format!("Failed to write default config to: {}", cli.config_path))?;
        config
    };

    // If log level was not set via command line, take it from the config
    if cli.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    let service = TranslationService::from_config(&config).await;

    match cli.command {
        Commands::Text { text, target, source } => {
            let request = TranslationRequest::new(text, target, source.as_deref());
            let result = service.translate_text(&request).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Batch {
            texts,
            input,
            target,
            source,
        } => {
            let texts = if texts.is_empty() {
                let path = input
                    .context("Provide texts as arguments or a file via --input")?;
                std::fs::read_to_string(&path)
                    .context(format!("Failed to read batch input file: {:?}", path))?
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.to_string())
                    .collect()
            } else {
                texts
            };

            let translator = BatchTranslator::new(service);
            let outcome = translator
                .translate_batch(&texts, &target, source.as_deref())
                .await?;

            let output = serde_json::json!({
                "translations": outcome.translations,
                "batch_id": outcome.batch_id,
                "processing_time_seconds": outcome.processing_time.as_secs_f64(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Detect { text } => {
            let detection = service.detect_language(&text).await;
            println!("{}", serde_json::to_string_pretty(&detection)?);
        }

        Commands::Languages => {
            let languages = service.supported_languages().await;
            let mut entries: Vec<_> = languages.into_iter().collect();
            entries.sort();
            let output: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(code, name)| (code, serde_json::Value::String(name)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Stats => {
            let stats = service.stats().await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
