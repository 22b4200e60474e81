//! Wordle Clone - CLI
//!
//! Terminal Wordle clone with TUI and line modes.

use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_clone::{
    commands::run_simple,
    config::Config,
    core::ScoringRule,
    game::Game,
    interactive::run_tui,
    provider::{DEFAULT_DICTIONARY_URL, DEFAULT_WORD_URL, RetryPolicy},
    runtime::Runtime,
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Random-word service URL (must return a JSON array of words)
    #[arg(long, global = true, default_value = DEFAULT_WORD_URL)]
    word_url: String,

    /// Dictionary service URL prefix; the lower-case word is appended
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    /// Play offline: pick targets from and validate guesses against this file
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Scoring of repeated letters
    #[arg(short, long, global = true, value_enum, default_value_t = ScoringRule::Simple)]
    scoring: ScoringRule,

    /// Per-request HTTP timeout in milliseconds
    #[arg(long, global = true, default_value = "10000")]
    timeout_ms: u64,

    /// Candidate words to try before giving up (0 = never give up)
    #[arg(long, global = true, default_value = "50")]
    max_fetch_attempts: u32,

    /// Initial delay between candidate words in milliseconds, doubled per miss
    #[arg(long, global = true, default_value = "0")]
    backoff_ms: u64,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            word_url: self.word_url.clone(),
            dictionary_url: self.dictionary_url.clone(),
            word_list: self.word_list.clone(),
            scoring: self.scoring,
            request_timeout: Duration::from_millis(self.timeout_ms),
            retry: RetryPolicy {
                max_attempts: self.max_fetch_attempts,
                base_delay: Duration::from_millis(self.backoff_ms),
                ..RetryPolicy::default()
            },
        }
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so without a log file its logs are dropped.
fn init_logging(level: &str, log_file: Option<&PathBuf>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    init_logging(&cli.log_level, cli.log_file.as_ref(), tui)?;

    let config = cli.config();
    let provider = config.build_provider()?;
    tracing::info!(scoring = ?config.scoring, "starting");

    let runtime = Runtime::new(Game::new(config.scoring), Arc::new(provider), config.retry);

    match command {
        Commands::Play => run_tui(runtime).await,
        Commands::Simple => run_simple(runtime).await,
    }
}
