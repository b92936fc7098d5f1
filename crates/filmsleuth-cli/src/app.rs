/// Run-once application flow: load → report → optional export.
///
/// User-facing messages go to the injected writer. Per-line warnings are
/// logged by the core loader through `tracing`; this module only prints the
/// summary counts.
use crate::prompt::{prompt_for_request, PromptOutcome, RunRequest};
use anyhow::{bail, Context, Result};
use filmsleuth_core::{loader, AnalysisConfig, Report};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// How an export attempt ended. Export failures never fail the run.
#[derive(Debug)]
pub enum ExportStatus {
    Written(PathBuf),
    Failed { path: PathBuf, message: String },
}

/// Everything a caller may want to inspect after a successful run.
#[derive(Debug)]
pub struct RunOutcome {
    pub loaded: usize,
    pub rejected: usize,
    pub capacity_reached: bool,
    pub report: Report,
    pub export: Option<ExportStatus>,
}

/// Analyse one file and print the report to `out`.
///
/// Fails if the file cannot be read or yields no valid movies.
pub fn run<W: Write>(
    request: &RunRequest,
    config: &AnalysisConfig,
    out: &mut W,
) -> Result<RunOutcome> {
    let input = request.input.display().to_string();

    let session = loader::load_path(&request.input, config)
        .context("Failed to load movies. Please check your file and try again.")?;
    if !session.is_success() {
        bail!(
            "Failed to load movies: no valid entries in '{input}' ({} invalid). \
             Please check your file and try again.",
            session.rejected_count()
        );
    }

    writeln!(out, "Successfully loaded {} movies from '{input}'", session.len())?;
    if session.capacity_reached() {
        writeln!(
            out,
            "Maximum movies ({}) reached. Remaining lines were not read.",
            config.max_records
        )?;
    }
    if session.rejected_count() > 0 {
        writeln!(out, "Skipped {} invalid entries", session.rejected_count())?;
    }

    let report = Report::build(&session, config);
    writeln!(out)?;
    report.render(out).context("writing report")?;

    let export = match &request.export {
        Some(path) => Some(export_report(&report, path, out)?),
        None => None,
    };

    writeln!(out, "\nAnalysis complete!")?;
    info!(
        "Run finished: {} loaded, {} rejected",
        session.len(),
        session.rejected_count()
    );

    Ok(RunOutcome {
        loaded: session.len(),
        rejected: session.rejected_count(),
        capacity_reached: session.capacity_reached(),
        report,
        export,
    })
}

/// Write the report to `path` and tell the user how it went.
///
/// A failed export becomes [`ExportStatus::Failed`]; only errors writing the
/// message to `out` are returned.
fn export_report<W: Write>(
    report: &Report,
    path: &Path,
    out: &mut W,
) -> Result<ExportStatus> {
    match report.export(path) {
        Ok(()) => {
            writeln!(out, "\nAnalysis exported to '{}'", path.display())?;
            Ok(ExportStatus::Written(path.to_path_buf()))
        }
        Err(e) => {
            error!("Export failed: {e}");
            writeln!(out, "\nError exporting analysis: {e}")?;
            Ok(ExportStatus::Failed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    }
}

/// Prompt for a request, then run it. Returns `None` if the user quit.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &AnalysisConfig,
) -> Result<Option<RunOutcome>> {
    match prompt_for_request(input, out).context("reading answers")? {
        PromptOutcome::Quit => Ok(None),
        PromptOutcome::Run(request) => run(&request, config, out).map(Some),
    }
}
