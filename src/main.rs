//! Bot email filter
//!
//! Reads candidate emails, one per line, and drops known bot addresses.

use anyhow::{Context, Result};
use bot_email_denylist::{EmailFilter, FilterConfig, FilterStats, OutputMode};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bot-email-denylist")]
#[command(author, version, about = "Filter bot and placeholder emails out of identity lists")]
struct Args {
    /// Path to configuration file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input file, one email per line (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output mode, overrides the config file
    #[arg(short, long, value_enum)]
    mode: Option<OutputMode>,

    /// Print run statistics as JSON to stderr
    #[arg(long)]
    stats: bool,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(json: bool, level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries the filtered emails
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(args: &Args) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.output = mode;
    }
    Ok(config)
}

/// Run the filter over the input and output named by `args`.
fn run_filter(args: &Args, config: FilterConfig) -> Result<FilterStats> {
    let filter = EmailFilter::new(config);

    let reader: Box<dyn io::BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn io::Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    filter.run(reader, writer)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, &args.log_level);

    let config = resolve_config(&args)?;
    info!(output = ?config.output, "Starting bot email filter");

    let stats = run_filter(&args, config)?;

    if args.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
