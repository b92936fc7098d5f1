/// FilmSleuth CLI — terminal frontend for the analysis core.
///
/// Owns everything that talks to a human: the interactive prompt and the
/// progress/summary messages around a run. All I/O goes through injected
/// readers and writers so the whole flow is testable without a terminal.
pub mod app;
pub mod prompt;

pub use app::{run, run_interactive, ExportStatus, RunOutcome};
pub use prompt::{prompt_for_request, PromptOutcome, RunRequest};
