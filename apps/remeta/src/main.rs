use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use remeta_core::{process, FileReport, RewriteOptions};
use std::path::PathBuf;
use tracing::info;

mod logging;

#[derive(Parser)]
#[command(name = "remeta")]
#[command(about = "Relocate description meta tags in generated HTML help files", long_about = None)]
#[command(version)]
struct Cli {
    /// HTML files to rewrite in place
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Only relocate the description: skip charset normalization and do
    /// not rewrite files that needed no edit
    #[arg(long)]
    description_only: bool,

    /// Suppress the per-file summary on stdout
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    logging::initialize();
    let cli = Cli::parse();

    let options = if cli.description_only {
        RewriteOptions::description_only()
    } else {
        RewriteOptions::default()
    };

    info!(
        file_count = cli.paths.len(),
        description_only = cli.description_only,
        "Starting rewrite batch"
    );

    let reports = process(&cli.paths, options).context("rewrite batch failed")?;

    if !cli.quiet {
        print_summary(&reports);
    }
    Ok(())
}

fn print_summary(reports: &[FileReport]) {
    for report in reports {
        // Pad before colorizing: width specs count ANSI escape bytes, so
        // padding a ColoredString misaligns the column
        let status = match (report.relocated, report.charset_normalized) {
            (true, _) => format!("{:>9}", "relocated").green(),
            (false, true) => format!("{:>9}", "charset").cyan(),
            (false, false) => format!("{:>9}", "unchanged").dimmed(),
        };
        println!("{}  {}", status, report.path.display());
    }

    let updated = reports
        .iter()
        .filter(|r| r.relocated || r.charset_normalized)
        .count();
    println!(
        "{} {} of {} files updated",
        "✓".green(),
        updated,
        reports.len()
    );
}
