/// The in-memory result of one load: records plus load counters.
///
/// A `Session` is filled by the loader and is read-only afterwards. All
/// analysis methods take `&self` and recompute from the record list, so
/// they can be called any number of times in any order.
use crate::analysis::{self, DecadeStats, DirectorStats, Statistics};
use crate::config::AnalysisConfig;
use crate::error::LineError;
use crate::model::Record;

/// A line the loader could not turn into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based line number in the source, counting blank and comment lines.
    pub line_number: usize,
    pub error: LineError,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) records: Vec<Record>,
    pub(crate) lines_attempted: usize,
    pub(crate) rejected: Vec<RejectedLine>,
    pub(crate) capacity_reached: bool,
}

impl Session {
    /// Records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-blank, non-comment lines that were handed to the parser.
    pub fn lines_attempted(&self) -> usize {
        self.lines_attempted
    }

    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// `true` if loading stopped early because the record cap was hit.
    pub fn capacity_reached(&self) -> bool {
        self.capacity_reached
    }

    /// A load counts as successful when it produced at least one record.
    pub fn is_success(&self) -> bool {
        !self.records.is_empty()
    }

    /// Top `n` records by rating (descending), ties by year (ascending).
    pub fn rank(&self, n: usize) -> Vec<&Record> {
        analysis::rank(&self.records, n)
    }

    /// Aggregate statistics, or `None` when there are no records.
    pub fn statistics(&self) -> Option<Statistics> {
        analysis::compute_statistics(&self.records)
    }

    /// Qualifying directors ranked by mean rating.
    pub fn directors(&self, config: &AnalysisConfig) -> Vec<DirectorStats> {
        analysis::aggregate_by_director(
            &self.records,
            config.min_director_movies,
            config.max_directors,
        )
    }

    /// Per-decade counts and mean ratings, oldest decade first.
    pub fn decades(&self) -> Vec<DecadeStats> {
        analysis::aggregate_by_decade(&self.records)
    }
}
