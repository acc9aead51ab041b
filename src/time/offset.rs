//! UTC offset formatting and numeric-string coercion.

use chrono::FixedOffset;

/// Formats an offset as `±HH:MM`.
///
/// ```
/// use chrono::FixedOffset;
/// use wzs_date_adapter::time::offset::format_offset;
///
/// let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
/// assert_eq!(format_offset(ist), "+05:30");
/// ```
pub fn format_offset(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let minutes = secs.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Coerces a string to a number the way a loosely typed numeric cast does.
///
/// - Surrounding whitespace is ignored; an empty string is `0`.
/// - `Infinity` with an optional sign is infinite.
/// - Anything else must be a plain decimal literal, otherwise `NaN`.
///
/// A colon-delimited offset such as `"+05:30"` is not a decimal literal and
/// coerces to `NaN`.
pub fn coerce_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) =>
        {
            s.parse::<f64>().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}
