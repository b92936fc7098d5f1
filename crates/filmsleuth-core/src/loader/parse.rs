/// Line-level parsing: comment/blank detection and field splitting.
use crate::error::{LineError, NumericField};
use crate::model::Record;

/// Field separator in the input format.
pub const FIELD_SEPARATOR: char = '|';

/// Blank lines and lines starting with `#` (after trimming) are skipped
/// and do not count as attempted entries.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one `title|director|year|rating` line into a validated record.
pub fn parse_line(line: &str) -> Result<Record, LineError> {
    let fields: Vec<&str> = line
        .trim()
        .split(FIELD_SEPARATOR)
        .map(str::trim)
        .collect();
    let [title, director, year, rating] = fields[..] else {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    };

    let year: i32 = year.parse().map_err(|_| LineError::NumericParse {
        field: NumericField::Year,
        value: year.to_string(),
    })?;
    let rating: f64 = rating.parse().map_err(|_| LineError::NumericParse {
        field: NumericField::Rating,
        value: rating.to_string(),
    })?;

    Ok(Record::new(title, director, year, rating)?)
}
