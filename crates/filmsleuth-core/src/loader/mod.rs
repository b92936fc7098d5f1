/// Loader — reads a movie list into a [`Session`].
///
/// The input is newline-delimited `title|director|year|rating` text.
/// Loading tolerates bad lines: each one is logged, recorded as a
/// [`RejectedLine`] and skipped. Only failures to read the source itself
/// (missing file, directory, permissions, invalid UTF-8) abort the load.
pub mod parse;

use crate::config::AnalysisConfig;
use crate::error::SourceError;
use crate::model::{RejectedLine, Session};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

pub use parse::{is_skippable, parse_line};

/// Name used in errors and logs for sources that have no path.
const STREAM_SOURCE_NAME: &str = "<input>";

/// Load a movie file from disk.
///
/// Returns `Err` if the file cannot be opened or read to the end; no
/// partial session is returned in that case. A returned session may still
/// be empty; check [`Session::is_success`].
pub fn load_path(path: &Path, config: &AnalysisConfig) -> Result<Session, SourceError> {
    let metadata =
        std::fs::metadata(path).map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    if !metadata.is_file() {
        return Err(SourceError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    info!("Loading movies from {}", path.display());

    let session = load_lines(BufReader::new(file), config)
        .map_err(|e| SourceError::from_io(path.to_path_buf(), e))?;
    log_summary(&session, &path.display().to_string());
    Ok(session)
}

/// Load a movie list from any buffered reader (stdin, in-memory text, ...).
pub fn load_reader<R: BufRead>(
    reader: R,
    config: &AnalysisConfig,
) -> Result<Session, SourceError> {
    let session = load_lines(reader, config).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => SourceError::Decode {
            source_name: STREAM_SOURCE_NAME.to_string(),
        },
        _ => SourceError::Io {
            source_name: STREAM_SOURCE_NAME.to_string(),
            source: e,
        },
    })?;
    log_summary(&session, STREAM_SOURCE_NAME);
    Ok(session)
}

/// Core line loop shared by both entry points.
fn load_lines<R: BufRead>(reader: R, config: &AnalysisConfig) -> io::Result<Session> {
    let mut session = Session::default();
    let mut lines = reader.lines().enumerate();

    loop {
        if session.records.len() >= config.max_records {
            warn!(
                "Maximum movies ({}) reached. Stopping processing.",
                config.max_records
            );
            session.capacity_reached = true;
            break;
        }

        let Some((index, line)) = lines.next() else {
            break;
        };
        let line = line?;
        let line_number = index + 1;

        if is_skippable(&line) {
            debug!("Skipping blank or comment line {line_number}");
            continue;
        }

        session.lines_attempted += 1;
        match parse_line(&line) {
            Ok(record) => session.records.push(record),
            Err(error) => {
                warn!("Invalid entry at line {line_number}: {error}");
                session.rejected.push(RejectedLine { line_number, error });
            }
        }
    }

    Ok(session)
}

fn log_summary(session: &Session, source_name: &str) {
    info!(
        "Loaded {} movies from {} ({} lines attempted, {} rejected)",
        session.len(),
        source_name,
        session.lines_attempted(),
        session.rejected_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineError;
    use std::io::Cursor;

    fn load_str(text: &str) -> Session {
        load_reader(Cursor::new(text), &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn loads_valid_lines_in_order() {
        let s = load_str(
            "The Shawshank Redemption|Frank Darabont|1994|9.3\n\
             Pulp Fiction|Quentin Tarantino|1994|8.9\n",
        );
        assert!(s.is_success());
        assert_eq!(s.len(), 2);
        assert_eq!(s.records()[0].title(), "The Shawshank Redemption");
        assert_eq!(s.records()[1].title(), "Pulp Fiction");
        assert_eq!(s.lines_attempted(), 2);
        assert_eq!(s.rejected_count(), 0);
        assert!(!s.capacity_reached());
    }

    /// Blank and comment lines are not attempted but still advance the
    /// line counter used in error reports.
    #[test]
    fn comments_and_blanks_are_skipped_but_numbered() {
        let s = load_str(
            "# header comment\n\
             \n\
             A|Bob|2000|8.5\n\
             Bad|Data\n",
        );
        assert_eq!(s.len(), 1);
        assert_eq!(s.lines_attempted(), 2);
        assert_eq!(
            s.rejected(),
            &[RejectedLine {
                line_number: 4,
                error: LineError::FieldCount { found: 2 },
            }]
        );
    }

    /// A bad line between two good ones must not affect either neighbour.
    #[test]
    fn bad_line_does_not_disturb_neighbours() {
        let s = load_str("A|Bob|2000|8.5\nBad|Data\nC|Cid|2010|9.0\n");
        assert!(s.is_success());
        assert_eq!(s.len(), 2);
        assert_eq!(s.rejected_count(), 1);
        assert_eq!(s.records()[0].title(), "A");
        assert_eq!(s.records()[1].title(), "C");
        assert_eq!(s.records()[1].rating(), 9.0);
    }

    #[test]
    fn all_invalid_is_not_a_success() {
        let s = load_str("Bad|Data\nMovie|Dir|abc|1.0\n");
        assert!(!s.is_success());
        assert_eq!(s.lines_attempted(), 2);
        assert_eq!(s.rejected_count(), 2);
    }

    #[test]
    fn empty_input_is_not_a_success() {
        let s = load_str("");
        assert!(!s.is_success());
        assert_eq!(s.lines_attempted(), 0);
    }

    #[test]
    fn missing_trailing_newline_is_fine() {
        let s = load_str("A|Bob|2000|8.5");
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn stops_at_configured_cap() {
        let text: String = (0..10).map(|i| format!("Movie {i}|Dir|2000|5.0\n")).collect();
        let config = AnalysisConfig {
            max_records: 3,
            ..AnalysisConfig::default()
        };
        let s = load_reader(Cursor::new(text), &config).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.lines_attempted(), 3);
        assert!(s.capacity_reached());
        assert_eq!(s.records()[2].title(), "Movie 2");
    }

    /// Lines after the cap are neither parsed nor counted, even bad ones.
    #[test]
    fn lines_after_cap_are_not_counted() {
        let config = AnalysisConfig {
            max_records: 1,
            ..AnalysisConfig::default()
        };
        let s = load_reader(Cursor::new("A|B|2000|5.0\nBad|Data\n"), &config).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.lines_attempted(), 1);
        assert_eq!(s.rejected_count(), 0);
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let bytes: &[u8] = b"A|B|2000|5.0\n\xff\xfe|x|2000|1.0\n";
        let err = load_reader(bytes, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }
}
