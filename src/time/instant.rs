//! # Instant Input
//!
//! A point in time as accepted by every adapter operation.
//!
//! Two representations are interchangeable:
//! - [`Instant::Date`]: a native calendar instant (`DateTime<Utc>`).
//!   Any `chrono::DateTime<Z>` converts into it.
//! - [`Instant::Millis`]: milliseconds since `1970-01-01T00:00:00Z`.
//!
//! With `serde`, an `Instant` is a JSON number (epoch millis) or an
//! RFC 3339 string.
//!
//! # Example
//! ```
//! use chrono::{TimeZone, Utc};
//! use wzs_date_adapter::time::instant::Instant;
//!
//! let a = Instant::from(1_710_498_600_000_i64);
//! let b = Instant::from(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap());
//! assert_eq!(a.to_utc().unwrap(), b.to_utc().unwrap());
//! ```

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::date::{DateAdapterError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instant {
    Millis(i64),
    Date(DateTime<Utc>),
}

impl Instant {
    /// Resolves the instant to UTC.
    ///
    /// # Errors
    /// [`DateAdapterError::InvalidTimestamp`] if the millisecond count is
    /// outside chrono's range.
    pub fn to_utc(self) -> Result<DateTime<Utc>> {
        match self {
            Instant::Date(dt) => Ok(dt),
            Instant::Millis(ms) => Utc
                .timestamp_millis_opt(ms)
                .single()
                .ok_or(DateAdapterError::InvalidTimestamp(ms)),
        }
    }
}

impl From<i64> for Instant {
    fn from(ms: i64) -> Self {
        Instant::Millis(ms)
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for Instant {
    fn from(dt: DateTime<Z>) -> Self {
        Instant::Date(dt.with_timezone(&Utc))
    }
}

impl<Z: TimeZone> From<&DateTime<Z>> for Instant {
    fn from(dt: &DateTime<Z>) -> Self {
        Instant::Date(dt.with_timezone(&Utc))
    }
}
