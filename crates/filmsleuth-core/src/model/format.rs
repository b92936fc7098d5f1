/// Number formatting utilities for report output.
///
/// All values are kept at full precision internally. Rounding only happens
/// here, at the display boundary.

/// Format a rating the way it was written in a typical data file:
/// shortest round-trip form, but never without a fractional part.
///
/// `9.3` stays `9.3`, `8.0` is shown as `8.0` rather than `8`. Tiny
/// non-zero values switch to exponent form with a two-digit exponent
/// (`1e-05`).
pub fn format_rating(rating: f64) -> String {
    if rating != 0.0 && rating.abs() < SCIENTIFIC_BELOW {
        return format_scientific(rating);
    }
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        format!("{rating}")
    }
}

/// Below this magnitude ratings are shown in exponent form.
const SCIENTIFIC_BELOW: f64 = 1e-4;

fn format_scientific(value: f64) -> String {
    // `{:e}` gives `1.5e-5`; pad the exponent to `1.5e-05`.
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.strip_prefix('-') {
            Some(digits) => format!("{mantissa}e-{digits:0>2}"),
            None => format!("{mantissa}e+{exponent:0>2}"),
        },
        None => text,
    }
}

/// Format an average with exactly two decimals.
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

/// A separator line of `width` `=` characters.
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}
