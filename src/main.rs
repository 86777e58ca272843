// SPDX-License-Identifier: PMPL-1.0-or-later

//! language-stats: print the built-in language catalog by popularity rank

use anyhow::Result;
use clap::Parser;
use language_stats::demo;
use language_stats::report::{self, ReportOutputFormat};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "language-stats")]
#[command(version)]
#[command(about = "Print programming languages sorted by popularity rank")]
#[command(long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportOutputFormat,

    /// Write report to file (or into directory) instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep insertion order instead of sorting by rank
    #[arg(long)]
    unsorted: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut catalog = demo::demo_catalog();
    if cli.unsorted {
        debug!("leaving catalog in insertion order");
    } else {
        catalog.sort_by_rank();
    }

    match cli.output {
        Some(path) => {
            report::save_report(&catalog, cli.format, path)?;
        }
        None => report::print_report(&catalog, cli.format)?,
    }

    Ok(())
}
