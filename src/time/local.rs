//! Local time utilities based on `chrono` and `chrono-tz`.
//!
//! This module maps local wall-clock times back onto instants of an IANA
//! timezone, the step every boundary and setter operation of the adapter
//! ends with.
//!
//! # Provided Functions
//! - [`parse_timezone`]: Parses an IANA timezone name into a [`Tz`].
//! - [`resolve_local`]: Resolves a [`NaiveDateTime`] in a timezone.
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Asia/Tokyo"` or `"Australia/Melbourne"`.
//! - If an invalid name is given, an error is returned.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::date::{DateAdapterError, Result};

/// Which instant to pick when a wall-clock time occurs twice
/// (the repeated hour when clocks fall back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Earliest,
    Latest,
    /// The candidate with this UTC offset, or the earliest if none has it.
    Offset(FixedOffset),
}

/// # parse_timezone
///
/// Parses an IANA timezone name.
///
/// ## Example
/// ```
/// use wzs_date_adapter::time::local::parse_timezone;
///
/// assert_eq!(parse_timezone("Asia/Tokyo").unwrap().name(), "Asia/Tokyo");
/// assert!(parse_timezone("Invalid/Timezone").is_err());
/// ```
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DateAdapterError::InvalidTimezone(name.to_string()))
}

/// # resolve_local
///
/// Resolves a local wall-clock time in `tz`.
///
/// - A single match is returned as is.
/// - An ambiguous time (fall-back overlap) picks the instant given by `bias`.
/// - A nonexistent time (spring-forward gap) is shifted forward by the
///   length of the gap, so `02:30` in a one-hour gap becomes `03:30`.
///
/// ## Errors
/// [`DateAdapterError::NonexistentLocalTime`] if the gap cannot be bridged
/// within chrono's date range.
pub fn resolve_local(tz: &Tz, naive: NaiveDateTime, bias: Bias) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, latest) => Ok(match bias {
            Bias::Earliest => earliest,
            Bias::Latest => latest,
            Bias::Offset(offset) if latest.offset().fix() == offset => latest,
            Bias::Offset(_) => earliest,
        }),
        LocalResult::None => {
            // Offset in effect before the transition, read a day earlier.
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .map(|day_before| tz.offset_from_utc_datetime(&day_before).fix());

            let shifted = before
                .and_then(|offset| {
                    let delta = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
                    naive.checked_sub_signed(delta)
                })
                .map(|utc| tz.from_utc_datetime(&utc));

            shifted.ok_or_else(|| {
                warn!(%naive, tz = tz.name(), "local time cannot be resolved");
                DateAdapterError::NonexistentLocalTime(naive)
            })
        }
    }
}
