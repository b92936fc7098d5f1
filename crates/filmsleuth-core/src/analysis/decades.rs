/// Per-decade movie counts and mean ratings.
use crate::model::{decade_label, Record};
use std::collections::BTreeMap;

/// Count and mean rating for one decade.
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeStats {
    /// First year of the decade, e.g. `1990`.
    pub decade: i32,
    pub count: usize,
    pub mean_rating: f64,
}

impl DecadeStats {
    /// Display label, e.g. `"1990s"`.
    pub fn label(&self) -> String {
        decade_label(self.decade)
    }
}

/// Bucket every record into its decade, oldest decade first.
pub fn aggregate_by_decade(records: &[Record]) -> Vec<DecadeStats> {
    let mut buckets: BTreeMap<i32, (usize, f64)> = BTreeMap::new();

    for r in records {
        let (count, total) = buckets.entry(r.decade()).or_insert((0, 0.0));
        *count += 1;
        *total += r.rating();
    }

    buckets
        .into_iter()
        .map(|(decade, (count, total))| DecadeStats {
            decade,
            count,
            mean_rating: total / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, rating: f64) -> Record {
        Record::new("T", "D", year, rating).unwrap()
    }

    #[test]
    fn labels_use_decade_start() {
        let stats = aggregate_by_decade(&[rec(1994, 9.0), rec(2010, 8.0)]);
        let labels: Vec<String> = stats.iter().map(DecadeStats::label).collect();
        assert_eq!(labels, ["1990s", "2010s"]);
    }

    #[test]
    fn decade_boundaries() {
        let stats = aggregate_by_decade(&[rec(1990, 5.0), rec(1999, 5.0), rec(2000, 5.0)]);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].decade, 1990);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].decade, 2000);
        assert_eq!(stats[1].count, 1);
    }

    /// Every record lands in exactly one bucket.
    #[test]
    fn bucket_counts_sum_to_total() {
        let records: Vec<Record> = (1800..=2030)
            .step_by(7)
            .map(|y| rec(y, 5.0))
            .collect();
        let stats = aggregate_by_decade(&records);
        let total: usize = stats.iter().map(|d| d.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn sorted_ascending_regardless_of_input_order() {
        let stats = aggregate_by_decade(&[rec(2015, 7.0), rec(1955, 8.0), rec(1987, 6.0)]);
        let decades: Vec<i32> = stats.iter().map(|d| d.decade).collect();
        assert_eq!(decades, [1950, 1980, 2010]);
    }

    #[test]
    fn mean_per_decade() {
        let stats = aggregate_by_decade(&[rec(1994, 9.3), rec(1994, 8.9), rec(2008, 9.0)]);
        assert!((stats[0].mean_rating - 9.1).abs() < 1e-9);
        assert!((stats[1].mean_rating - 9.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate_by_decade(&[]).is_empty());
    }
}
