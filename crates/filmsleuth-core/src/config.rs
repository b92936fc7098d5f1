/// Analysis limits and thresholds.
///
/// Every tunable number the pipeline uses lives here so callers can
/// override it from a JSON file or the command line. Validation bounds
/// (`MIN_YEAR` and friends) are fixed and not configurable.
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Maximum number of records kept from a single input file.
pub const MAX_RECORDS: usize = 300;

/// Number of movies shown in the ranking section by default.
pub const DEFAULT_TOP_COUNT: usize = 10;

/// A director needs at least this many movies to be ranked.
pub const MIN_DIRECTOR_MOVIES: usize = 2;

/// At most this many directors are surfaced.
pub const MAX_DIRECTORS: usize = 5;

pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 2030;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Runtime configuration for loading and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Loading stops once this many records have been collected.
    pub max_records: usize,
    /// Length of the "Top N" ranking.
    pub top_count: usize,
    /// Minimum movies per director to qualify for the director ranking.
    pub min_director_movies: usize,
    /// Maximum directors listed.
    pub max_directors: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_records: MAX_RECORDS,
            top_count: DEFAULT_TOP_COUNT,
            min_director_movies: MIN_DIRECTOR_MOVIES,
            max_directors: MAX_DIRECTORS,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON text. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
