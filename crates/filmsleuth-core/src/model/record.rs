/// A single validated movie entry.
///
/// Records are created only through [`Record::new`], which checks every
/// field up front. There is no way to build or mutate a `Record` into an
/// invalid state afterwards: fields are private and exposed read-only.
use crate::config::{MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR};
use crate::error::ValidationError;
use crate::model::format::format_rating;
use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    title: CompactString,
    director: CompactString,
    year: i32,
    rating: f64,
}

impl Record {
    /// Validate and build a record.
    ///
    /// Title and director are trimmed. Checks run in a fixed order (year,
    /// rating, title, director) and the first failure is returned.
    pub fn new(
        title: &str,
        director: &str,
        year: i32,
        rating: f64,
    ) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }
        // `contains` is false for NaN, so NaN is rejected here too.
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }

        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let director = director.trim();
        if director.is_empty() {
            return Err(ValidationError::EmptyDirector);
        }

        Ok(Self {
            title: CompactString::new(title),
            director: CompactString::new(director),
            year,
            // Adding +0.0 turns -0.0 into 0.0.
            rating: rating + 0.0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// First year of the decade, e.g. 1994 → 1990.
    pub fn decade(&self) -> i32 {
        self.year.div_euclid(10) * 10
    }

    /// Decade as shown in reports, e.g. `"1990s"`.
    pub fn decade_label(&self) -> String {
        decade_label(self.decade())
    }
}

/// Render a decade start year as a label.
pub fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Directed by {}, Rating: {}/10",
            self.title,
            self.year,
            self.director,
            format_rating(self.rating)
        )
    }
}
