use clap::Parser;
use pdfscout::{
    config::{parse_worker_count, CliOverrides},
    search, SearchConfig, SearchError,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod reporter;

use reporter::ConsoleReporter;

type Result<T> = std::result::Result<T, SearchError>;

/// Search a directory tree of PDF files for text
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Terms to search for (case-insensitive)
    terms: Vec<String>,

    /// Root directory to search in
    #[arg(short = 'd', long)]
    root: Option<PathBuf>,

    /// Maximum number of files searched at once (default: 8)
    #[arg(short = 'j', long, allow_negative_numbers = true)]
    workers: Option<i64>,

    /// Require every term to appear in a file
    #[arg(short = 'a', long)]
    all: bool,

    /// Patterns to ignore (glob format)
    #[arg(short, long)]
    ignore: Vec<String>,

    /// Copy matching PDFs into this folder
    #[arg(long)]
    save: Option<PathBuf>,

    /// Show only statistics, not per-file results
    #[arg(short, long)]
    stats: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Additional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let max_workers = cli.workers.map(parse_worker_count).transpose()?;

    let file_config = SearchConfig::load_from(cli.config.as_deref())
        .map_err(|e| SearchError::config_error(e.to_string()))?;

    let config = file_config.merge_with_cli(CliOverrides {
        terms: cli.terms,
        root_path: cli.root,
        match_all: cli.all,
        ignore_patterns: cli.ignore,
        max_workers,
        save_dir: cli.save,
        stats_only: cli.stats,
        log_level: cli.log_level,
    });

    init_logging(&config.log_level);
    debug!("Effective configuration: {:?}", config);

    let mut reporter = ConsoleReporter::new(config.stats_only, !cli.no_progress);
    search(&config, &mut reporter)?;
    Ok(())
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
