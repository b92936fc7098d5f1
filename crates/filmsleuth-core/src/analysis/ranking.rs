/// Top-N movies by rating.
///
/// Ranks a borrowed record list without copying or reordering it.
use crate::model::Record;
use std::cmp::Ordering;

/// Ranking order: rating descending, then year ascending.
pub fn rank_order(a: &Record, b: &Record) -> Ordering {
    // Ratings are never NaN, so `partial_cmp` always succeeds.
    b.rating()
        .partial_cmp(&a.rating())
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.year().cmp(&b.year()))
}

/// Get the top `n` records in ranking order.
///
/// The sort is stable, so records equal in both rating and year keep their
/// source order. Asking for more than there are returns everything.
pub fn rank(records: &[Record], n: usize) -> Vec<&Record> {
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked.truncate(n);
    ranked
}
