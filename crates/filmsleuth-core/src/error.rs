/// Error types for loading, validation, configuration and export.
///
/// Only [`SourceError`] and [`ExportError`] ever fail a whole call.
/// [`LineError`] is per-line and is collected into the session rather than
/// propagated.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A field value outside its allowed domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid year: {0}. Must be between {min}-{max}.", min = crate::config::MIN_YEAR, max = crate::config::MAX_YEAR)]
    YearOutOfRange(i32),

    #[error(
        "Invalid rating: {}. Must be between {min:.1}-{max:.1}.",
        rating_text(.0),
        min = crate::config::MIN_RATING,
        max = crate::config::MAX_RATING
    )]
    RatingOutOfRange(f64),

    #[error("Movie title cannot be empty.")]
    EmptyTitle,

    #[error("Director name cannot be empty.")]
    EmptyDirector,
}

fn rating_text(rating: &f64) -> String {
    crate::model::format::format_rating(*rating)
}

/// Which numeric column failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    Rating,
}

impl NumericField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Rating => "rating",
        }
    }
}

/// Why a single input line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("Expected 4 fields separated by '|', got {found}")]
    FieldCount { found: usize },

    #[error("Invalid numeric data: {} '{value}' is not a valid number", field.label())]
    NumericParse { field: NumericField, value: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The input source could not be read at all.
///
/// Any of these aborts the load; no partially-filled session is returned.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a valid file.", .0.display())]
    NotAFile(PathBuf),

    #[error("Permission denied accessing '{}'.", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Unable to decode '{source_name}'. Please ensure it's a valid UTF-8 text file.")]
    Decode { source_name: String },

    #[error("Unexpected error reading '{source_name}': {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::InvalidData => Self::Decode {
                source_name: path.display().to_string(),
            },
            _ => Self::Io {
                source_name: path.display().to_string(),
                source: err,
            },
        }
    }
}

/// The report could not be written to its destination.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The optional configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_bad_value() {
        assert_eq!(
            ValidationError::YearOutOfRange(1700).to_string(),
            "Invalid year: 1700. Must be between 1800-2030."
        );
        assert_eq!(
            ValidationError::RatingOutOfRange(15.0).to_string(),
            "Invalid rating: 15.0. Must be between 0.0-10.0."
        );
    }

    #[test]
    fn numeric_parse_message_names_the_field() {
        let err = LineError::NumericParse {
            field: NumericField::Year,
            value: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid numeric data: year 'abc' is not a valid number"
        );
    }

    /// Validation errors pass through `LineError` without an extra prefix.
    #[test]
    fn validation_is_transparent_inside_line_error() {
        let err: LineError = ValidationError::EmptyTitle.into();
        assert_eq!(err.to_string(), "Movie title cannot be empty.");
    }

    #[test]
    fn io_errors_are_classified_by_kind() {
        let missing = SourceError::from_io(
            PathBuf::from("gone.txt"),
            io::Error::new(io::ErrorKind::NotFound, "x"),
        );
        assert!(matches!(missing, SourceError::NotFound(_)));

        let denied = SourceError::from_io(
            PathBuf::from("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "x"),
        );
        assert!(matches!(denied, SourceError::PermissionDenied(_)));

        let garbled = SourceError::from_io(
            PathBuf::from("bin.dat"),
            io::Error::new(io::ErrorKind::InvalidData, "x"),
        );
        assert!(matches!(garbled, SourceError::Decode { .. }));
    }
}
