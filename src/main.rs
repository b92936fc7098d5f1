//! FilmSleuth — movie rating analyser.
//!
//! Thin binary entry point. All logic lives in the `filmsleuth-core`
//! and `filmsleuth-cli` crates.

use anyhow::Context;
use clap::Parser;
use filmsleuth_cli::RunRequest;
use filmsleuth_core::AnalysisConfig;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version)]
/// Analyses a pipe-delimited movie list (title|director|year|rating).
struct Args {
    /// Movie file to analyse. Prompts interactively when omitted.
    input: Option<PathBuf>,
    #[arg(short, long)]
    /// Also write the report to this file.
    export: Option<PathBuf>,
    #[arg(short, long)]
    /// Number of movies in the "Top N" ranking.
    top: Option<usize>,
    #[arg(short, long)]
    /// JSON file overriding limits and thresholds.
    config: Option<PathBuf>,
    #[arg(short, long)]
    /// Log debug output (skipped lines, load details).
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    tracing::info!("FilmSleuth starting");

    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(top) = args.top {
        config.top_count = top;
    }

    let mut stdout = io::stdout().lock();
    match args.input {
        Some(input) => {
            let request = RunRequest {
                input,
                export: args.export,
            };
            filmsleuth_cli::run(&request, &config, &mut stdout)?;
        }
        None => {
            let mut stdin = io::stdin().lock();
            if filmsleuth_cli::run_interactive(&mut stdin, &mut stdout, &config)
                .context("interactive session failed")?
                .is_none()
            {
                tracing::info!("User quit before analysing");
            }
        }
    }

    Ok(())
}
