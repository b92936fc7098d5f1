/// FilmSleuth Core — loading, validation, analysis and reporting.
///
/// This crate contains all business logic with no terminal I/O.
/// Frontends (the interactive CLI, tests, other tools) drive it through
/// a handful of calls:
///
/// ```
/// use filmsleuth_core::{loader, AnalysisConfig, Report};
/// use std::io::Cursor;
///
/// let config = AnalysisConfig::default();
/// let text = "A|Bob|2000|8.5\nB|Ann|1995|8.5\nC|Cid|2010|9.0\n";
/// let session = loader::load_reader(Cursor::new(text), &config).unwrap();
///
/// let titles: Vec<&str> = session.rank(10).iter().map(|r| r.title()).collect();
/// assert_eq!(titles, ["C", "B", "A"]);
///
/// let mut out = Vec::<u8>::new();
/// Report::build(&session, &config).render(&mut out).unwrap();
/// ```
///
/// # Modules
///
/// - [`model`] — Validated `Record`, the load `Session`, display helpers.
/// - [`loader`] — Line-by-line parsing with per-line error collection.
/// - [`analysis`] — Ranking, statistics, director and decade aggregation.
/// - [`report`] — Sink-agnostic text rendering and file export.
/// - [`config`] — Limits and thresholds, optionally from JSON.
/// - [`error`] — Typed errors for every failure path.
pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;

pub use config::AnalysisConfig;
pub use error::{ConfigError, ExportError, LineError, SourceError, ValidationError};
pub use model::{Record, RejectedLine, Session};
pub use report::Report;
