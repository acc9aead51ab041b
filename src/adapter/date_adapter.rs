//! # Date Adapter Port
//!
//! Defines the backend-agnostic interface ([`DateAdapter`]) a calendar or
//! date-display component consumes. Implementations delegate to a concrete
//! date library, so the consumer never depends on which one is in use.
//!
//! Every operation accepts [`Instant`]s in either representation (native
//! calendar instant or epoch milliseconds) and returns native
//! `DateTime<Utc>` values or plain scalars.
//!
//! # Example
//! ```rust
//! use wzs_date_adapter::adapter::adapter_factory;
//! use wzs_date_adapter::time::instant::Instant;
//!
//! let adapter = adapter_factory();
//! let i = Instant::from(1_710_498_600_000_i64); // 2024-03-15T10:30:00Z
//!
//! assert_eq!(adapter.get_day(i).unwrap(), 15);
//! let next = adapter.add_days(i, 1).unwrap();
//! assert_eq!(next.to_rfc3339(), "2024-03-16T10:30:00+00:00");
//! ```

use chrono::{DateTime, Utc};

use crate::error::date::Result;
use crate::time::instant::Instant;

/// Fixed set of date operations exposed to date-display components.
///
/// Implementations must be stateless: every call depends only on its
/// arguments and the configuration fixed at construction.
pub trait DateAdapter: Send + Sync {
    /// Shifts by whole local calendar days, keeping the wall-clock time.
    fn add_days(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>>;

    /// Adds `amount` hours of elapsed time.
    fn add_hours(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>>;

    /// Adds `amount` minutes of elapsed time.
    fn add_minutes(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>>;

    /// Adds `amount` seconds of elapsed time.
    fn add_seconds(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>>;

    /// Signed `left - right` in days, fractional part retained.
    fn difference_in_days(&self, left: Instant, right: Instant) -> Result<f64>;

    /// Signed `left - right` in minutes, fractional part retained.
    fn difference_in_minutes(&self, left: Instant, right: Instant) -> Result<f64>;

    /// Signed `left - right` in seconds, fractional part retained.
    fn difference_in_seconds(&self, left: Instant, right: Instant) -> Result<f64>;

    /// Last millisecond of the local day.
    fn end_of_day(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Last millisecond of the last day of the local month.
    fn end_of_month(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Last millisecond of the week, which begins on the configured week start.
    fn end_of_week(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Day of month, 1-based.
    fn get_day(&self, date: Instant) -> Result<u32>;

    /// Month of year, 1-based (January is `1`).
    fn get_month(&self, date: Instant) -> Result<u32>;

    /// Hour of day (0–23) in the adapter's timezone.
    fn get_hours(&self, date: Instant) -> Result<u32>;

    /// Minute of hour (0–59) in the adapter's timezone.
    fn get_minutes(&self, date: Instant) -> Result<u32>;

    /// The `±HH:MM` offset string of the instant coerced to a number.
    ///
    /// A colon-delimited string is not a decimal literal, so this is `NaN`
    /// for every offset.
    fn get_timezone_offset(&self, date: Instant) -> Result<f64>;

    /// Compares the day-of-month field only; month and year are ignored.
    fn is_same_day(&self, left: Instant, right: Instant) -> Result<bool>;

    /// Compares the month field only; the year is ignored.
    fn is_same_month(&self, left: Instant, right: Instant) -> Result<bool>;

    /// Compares the second-of-minute field only.
    fn is_same_second(&self, left: Instant, right: Instant) -> Result<bool>;

    /// Latest of `dates`. Fails on an empty slice.
    fn max(&self, dates: &[Instant]) -> Result<DateTime<Utc>>;

    /// Replaces the local hour. Values above `23` are rejected.
    fn set_hours(&self, date: Instant, hours: u32) -> Result<DateTime<Utc>>;

    /// Replaces the local minute. Values above `59` are rejected.
    fn set_minutes(&self, date: Instant, minutes: u32) -> Result<DateTime<Utc>>;

    /// Local midnight of the day.
    fn start_of_day(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Drops seconds and sub-seconds.
    fn start_of_minute(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Local midnight of the first day of the month.
    fn start_of_month(&self, date: Instant) -> Result<DateTime<Utc>>;

    /// Local midnight of the configured week start on or before the instant.
    fn start_of_week(&self, date: Instant) -> Result<DateTime<Utc>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    /// Minimal implementation that treats every instant as its own boundary.
    struct IdentityAdapter;

    impl DateAdapter for IdentityAdapter {
        fn add_days(&self, date: Instant, _: i64) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn add_hours(&self, date: Instant, _: i64) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn add_minutes(&self, date: Instant, _: i64) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn add_seconds(&self, date: Instant, _: i64) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn difference_in_days(&self, _: Instant, _: Instant) -> Result<f64> {
            Ok(0.0)
        }
        fn difference_in_minutes(&self, _: Instant, _: Instant) -> Result<f64> {
            Ok(0.0)
        }
        fn difference_in_seconds(&self, _: Instant, _: Instant) -> Result<f64> {
            Ok(0.0)
        }
        fn end_of_day(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn end_of_month(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn end_of_week(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn get_day(&self, _: Instant) -> Result<u32> {
            Ok(1)
        }
        fn get_month(&self, _: Instant) -> Result<u32> {
            Ok(1)
        }
        fn get_hours(&self, _: Instant) -> Result<u32> {
            Ok(0)
        }
        fn get_minutes(&self, _: Instant) -> Result<u32> {
            Ok(0)
        }
        fn get_timezone_offset(&self, _: Instant) -> Result<f64> {
            Ok(f64::NAN)
        }
        fn is_same_day(&self, _: Instant, _: Instant) -> Result<bool> {
            Ok(true)
        }
        fn is_same_month(&self, _: Instant, _: Instant) -> Result<bool> {
            Ok(true)
        }
        fn is_same_second(&self, _: Instant, _: Instant) -> Result<bool> {
            Ok(true)
        }
        fn max(&self, dates: &[Instant]) -> Result<DateTime<Utc>> {
            dates
                .first()
                .copied()
                .ok_or(crate::error::date::DateAdapterError::EmptySequence)?
                .to_utc()
        }
        fn set_hours(&self, date: Instant, _: u32) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn set_minutes(&self, date: Instant, _: u32) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn start_of_day(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn start_of_minute(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn start_of_month(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
        fn start_of_week(&self, date: Instant) -> Result<DateTime<Utc>> {
            date.to_utc()
        }
    }

    #[test]
    fn adapter_trait_object_works() {
        let adapter: Arc<dyn DateAdapter> = Arc::new(IdentityAdapter);
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();

        assert_eq!(adapter.start_of_day(dt.into()).unwrap(), dt);
        assert!(adapter.max(&[]).is_err());
    }

    /// Ensures the trait object is Send + Sync.
    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_date_adapter_is_send_sync() {
        assert_send_sync::<dyn DateAdapter>();
    }
}
