/// Whole-collection rating and year statistics.
use crate::model::Record;

/// Summary numbers for a non-empty record list.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub count: usize,
    /// Arithmetic mean at full precision. Round only when displaying.
    pub mean_rating: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    pub min_year: i32,
    pub max_year: i32,
}

/// Compute statistics, or `None` when there is no data.
pub fn compute_statistics(records: &[Record]) -> Option<Statistics> {
    let first = records.first()?;

    let mut stats = Statistics {
        count: 0,
        mean_rating: 0.0,
        min_rating: first.rating(),
        max_rating: first.rating(),
        min_year: first.year(),
        max_year: first.year(),
    };
    let mut total = 0.0;

    for r in records {
        stats.count += 1;
        total += r.rating();
        stats.min_rating = stats.min_rating.min(r.rating());
        stats.max_rating = stats.max_rating.max(r.rating());
        stats.min_year = stats.min_year.min(r.year());
        stats.max_year = stats.max_year.max(r.year());
    }
    stats.mean_rating = total / stats.count as f64;

    Some(stats)
}
