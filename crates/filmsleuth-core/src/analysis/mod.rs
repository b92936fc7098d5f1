/// Analysis modules — pure aggregations over a loaded record list.
///
/// None of these functions mutate their input; each can be recomputed at
/// any time from the same slice.
pub mod decades;
pub mod directors;
pub mod ranking;
pub mod statistics;

pub use decades::{aggregate_by_decade, DecadeStats};
pub use directors::{aggregate_by_director, DirectorStats};
pub use ranking::{rank, rank_order};
pub use statistics::{compute_statistics, Statistics};
