/// Per-director rating averages.
///
/// Groups records by exact director name and ranks directors with enough
/// movies by their mean rating.
use crate::model::Record;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Count and mean rating for one director.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorStats {
    pub director: String,
    pub count: usize,
    pub mean_rating: f64,
}

/// Rank directors with at least `min_movies` records by mean rating,
/// descending, keeping at most `limit`.
///
/// Directors below the threshold are dropped silently. Directors with equal
/// means stay in order of first appearance in the input.
pub fn aggregate_by_director(
    records: &[Record],
    min_movies: usize,
    limit: usize,
) -> Vec<DirectorStats> {
    // Index into `groups` by name; `groups` keeps first-appearance order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, f64)> = Vec::new();

    for r in records {
        let slot = *index.entry(r.director()).or_insert_with(|| {
            groups.push((r.director(), 0, 0.0));
            groups.len() - 1
        });
        let (_, count, total) = &mut groups[slot];
        *count += 1;
        *total += r.rating();
    }

    let mut results: Vec<DirectorStats> = groups
        .into_iter()
        .filter(|&(_, count, _)| count >= min_movies)
        .map(|(director, count, total)| DirectorStats {
            director: director.to_string(),
            count,
            mean_rating: total / count as f64,
        })
        .collect();

    results.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_DIRECTORS, MIN_DIRECTOR_MOVIES};

    fn rec(title: &str, director: &str, rating: f64) -> Record {
        Record::new(title, director, 2000, rating).unwrap()
    }

    fn defaults(records: &[Record]) -> Vec<DirectorStats> {
        aggregate_by_director(records, MIN_DIRECTOR_MOVIES, MAX_DIRECTORS)
    }

    /// A director with a single movie never qualifies; a second movie
    /// makes them appear.
    #[test]
    fn single_movie_director_is_excluded() {
        let mut records = vec![rec("Inception", "Nolan", 8.8), rec("Heat", "Mann", 8.3)];
        assert!(defaults(&records).is_empty());

        records.push(rec("Tenet", "Nolan", 7.3));
        let stats = defaults(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].director, "Nolan");
        assert_eq!(stats[0].count, 2);
        assert!((stats[0].mean_rating - 8.05).abs() < 1e-9);
    }

    #[test]
    fn sorted_by_mean_descending() {
        let records = vec![
            rec("a1", "Low", 5.0),
            rec("a2", "Low", 6.0),
            rec("b1", "High", 9.0),
            rec("b2", "High", 8.0),
            rec("c1", "Mid", 7.0),
            rec("c2", "Mid", 7.0),
        ];
        let names: Vec<String> = defaults(&records).into_iter().map(|d| d.director).collect();
        assert_eq!(names, ["High", "Mid", "Low"]);
    }

    #[test]
    fn at_most_limit_directors() {
        let mut records = Vec::new();
        for i in 0..8 {
            let name = format!("Director {i}");
            records.push(rec("x", &name, i as f64));
            records.push(rec("y", &name, i as f64));
        }
        let stats = defaults(&records);
        assert_eq!(stats.len(), MAX_DIRECTORS);
        assert_eq!(stats[0].director, "Director 7");
        assert_eq!(stats[4].director, "Director 3");
    }

    /// Grouping uses the exact name: case differences are separate groups.
    #[test]
    fn grouping_is_case_sensitive() {
        let records = vec![rec("a", "nolan", 8.0), rec("b", "Nolan", 8.0)];
        assert!(defaults(&records).is_empty());
    }

    #[test]
    fn equal_means_keep_first_appearance_order() {
        let records = vec![
            rec("a", "Second", 8.0),
            rec("b", "First", 8.0),
            rec("c", "Second", 8.0),
            rec("d", "First", 8.0),
        ];
        let names: Vec<String> = defaults(&records).into_iter().map(|d| d.director).collect();
        assert_eq!(names, ["Second", "First"]);
    }

    #[test]
    fn zero_means_of_either_sign_keep_first_appearance_order() {
        let records = vec![rec("a", "Neg", -0.0), rec("b", "Pos", 0.0)];
        let names: Vec<String> = aggregate_by_director(&records, 1, 5)
            .into_iter()
            .map(|d| d.director)
            .collect();
        assert_eq!(names, ["Neg", "Pos"]);
    }

    #[test]
    fn custom_threshold_and_limit() {
        let records = vec![
            rec("a", "Two", 9.0),
            rec("b", "Two", 9.0),
            rec("c", "Three", 7.0),
            rec("d", "Three", 7.0),
            rec("e", "Three", 7.0),
        ];
        let stats = aggregate_by_director(&records, 3, 5);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].director, "Three");

        let stats = aggregate_by_director(&records, 2, 1);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].director, "Two");
    }

    #[test]
    fn empty_input() {
        assert!(defaults(&[]).is_empty());
    }
}
