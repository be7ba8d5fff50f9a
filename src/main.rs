//! Lambda Bakery - Entry Point
//!
//! Parses arguments, sets up logging on stderr and writes the demo
//! transcript to stdout.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use lambda_bakery::{DemoSettings, driver};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Demonstrates single-method capabilities and closures.
#[derive(Parser, Debug)]
#[command(name = "lambda-bakery")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random samples to print.
    #[arg(short, long, default_value_t = 10)]
    samples: usize,

    /// Seed for the random samples (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Text to decorate.
    #[arg(short, long, default_value = "HELLO")]
    greeting: String,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }

    /// Builds demo settings, keeping defaults for anything not on the command line.
    fn settings(&self) -> DemoSettings {
        DemoSettings {
            samples: self.samples,
            seed: self.seed,
            greeting: self.greeting.clone(),
            ..DemoSettings::default()
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lambda_bakery={level}")));

    // Logs go to stderr; stdout carries the transcript
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(true)
                .with_target(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    let settings = args.settings();
    let summary = driver::run(&mut io::stdout().lock(), &settings)
        .context("failed to run demo")?;

    info!(
        samples = summary.samples.len(),
        converted_sum = summary.converted_sum,
        "demo finished"
    );

    Ok(())
}
