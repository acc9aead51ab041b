//! # Date Adapter Implementation (chrono)
//!
//! Provides a [`DateAdapter`] implementation using the [`chrono`] and
//! [`chrono_tz`] crates.
//!
//! Every operation normalizes its [`Instant`] arguments into a
//! `DateTime<Tz>` in the configured timezone, delegates to chrono, and
//! converts the result back to `DateTime<Utc>`.
//!
//! # Calendar rules
//! - `add_days` moves the local calendar date and keeps the wall-clock time.
//!   A time that falls into a DST gap is pushed forward by the gap; in an
//!   overlap the original UTC offset is kept when possible.
//! - `add_hours` / `add_minutes` / `add_seconds` add elapsed time.
//! - `end_of_*` returns `23:59:59.999` local time of the last day.
//! - Weeks start on [`AdapterConfig::week_start`] (Monday by default).
//!
//! # Example
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use wzs_date_adapter::adapter::chrono_adapter::ChronoDateAdapter;
//! use wzs_date_adapter::adapter::date_adapter::DateAdapter;
//! use wzs_date_adapter::config::adapter::AdapterConfig;
//!
//! let adapter = ChronoDateAdapter::new(AdapterConfig::new(
//!     chrono_tz::Asia::Tokyo,
//!     chrono::Weekday::Mon,
//! ));
//! let i = Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();
//!
//! // 05:00 on the 16th in Tokyo.
//! assert_eq!(adapter.get_day(i.into()).unwrap(), 16);
//! assert_eq!(adapter.get_hours(i.into()).unwrap(), 5);
//! ```
//!
//! # Errors
//! Returns a [`DateAdapterError`] if:
//! - an epoch-millisecond input is outside chrono's range,
//! - arithmetic overflows the representable range,
//! - a setter receives an out-of-range field value,
//! - `max` receives an empty slice.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use tracing::{debug, warn};

use super::date_adapter::DateAdapter;
use crate::config::adapter::AdapterConfig;
use crate::error::date::{DateAdapterError, Result};
use crate::time::instant::Instant;
use crate::time::local::{Bias, resolve_local};
use crate::time::offset::{coerce_number, format_offset};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A concrete implementation of [`DateAdapter`] using `chrono` and `chrono-tz`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChronoDateAdapter {
    config: AdapterConfig,
}

impl ChronoDateAdapter {
    /// Creates an adapter resolving calendar fields with `config`.
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    /// Creates an adapter from [`AdapterConfig::from_env`].
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AdapterConfig::from_env()?;
        debug!(
            timezone = config.timezone.name(),
            week_start = ?config.week_start,
            "date adapter configured"
        );
        Ok(Self::new(config))
    }

    /// Zone in which calendar fields are resolved.
    pub fn timezone(&self) -> Tz {
        self.config.timezone
    }

    /// First day of the week used by `start_of_week` / `end_of_week`.
    pub fn week_start(&self) -> Weekday {
        self.config.week_start
    }

    /// Converts `date` into the configured zone.
    ///
    /// Fails if the local wall time of the instant falls outside
    /// `NaiveDateTime`'s range (e.g. `MAX_UTC` in a zone east of UTC).
    fn normalize(&self, date: Instant) -> Result<DateTime<Tz>> {
        let utc = date.to_utc().inspect_err(|err| {
            warn!(?date, %err, "instant cannot be normalized");
        })?;

        let tz = self.config.timezone;
        let offset = tz.offset_from_utc_datetime(&utc.naive_utc()).fix();
        let local = utc
            .naive_utc()
            .checked_add_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())));
        if local.is_none() {
            warn!(?date, tz = tz.name(), "local time of instant is out of range");
            return Err(DateAdapterError::OutOfRange { op: "normalize" });
        }

        Ok(utc.with_timezone(&tz))
    }

    fn resolve(&self, naive: NaiveDateTime, bias: Bias) -> Result<DateTime<Utc>> {
        resolve_local(&self.config.timezone, naive, bias).map(|dt| dt.with_timezone(&Utc))
    }

    fn shift_days(&self, dt: &DateTime<Tz>, amount: i64) -> Result<DateTime<Tz>> {
        let naive = TimeDelta::try_days(amount)
            .and_then(|delta| dt.naive_local().checked_add_signed(delta))
            .ok_or(DateAdapterError::OutOfRange { op: "add_days" })?;
        resolve_local(&self.config.timezone, naive, Bias::Offset(dt.offset().fix()))
    }

    fn add_elapsed(
        &self,
        date: Instant,
        delta: Option<TimeDelta>,
        op: &'static str,
    ) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        delta
            .and_then(|delta| dt.checked_add_signed(delta))
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(DateAdapterError::OutOfRange { op })
    }

    /// `later - earlier` in days: whole local days plus the remainder as a
    /// fraction of 24 hours. Requires `later >= earlier`.
    fn days_between(&self, later: &DateTime<Tz>, earlier: &DateTime<Tz>) -> Result<f64> {
        let mut days = (later.date_naive() - earlier.date_naive()).num_days();
        let mut anchor = self.shift_days(earlier, days)?;
        if anchor > *later {
            days -= 1;
            anchor = self.shift_days(earlier, days)?;
        }
        Ok(days as f64 + seconds_f64(*later - anchor) / SECONDS_PER_DAY)
    }

    fn first_day_of_week(&self, date: NaiveDate) -> Result<NaiveDate> {
        let offset = (date.weekday().num_days_from_monday() + 7
            - self.config.week_start.num_days_from_monday())
            % 7;
        date.checked_sub_signed(TimeDelta::days(i64::from(offset)))
            .ok_or(DateAdapterError::OutOfRange { op: "start_of_week" })
    }

    fn first_day_of_month(date: NaiveDate) -> NaiveDate {
        date - TimeDelta::days(i64::from(date.day0()))
    }

    fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate> {
        Self::first_day_of_month(date)
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(DateAdapterError::OutOfRange { op: "end_of_month" })
    }

    fn day_start(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        self.resolve(date.and_time(NaiveTime::MIN), Bias::Earliest)
    }

    fn day_end(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .ok_or(DateAdapterError::OutOfRange { op: "end_of_day" })?;
        self.resolve(date.and_time(last), Bias::Latest)
    }
}

/// Exact seconds of `delta`, sub-second part included.
fn seconds_f64(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

impl DateAdapter for ChronoDateAdapter {
    fn add_days(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.shift_days(&dt, amount).map(|dt| dt.with_timezone(&Utc))
    }

    fn add_hours(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>> {
        self.add_elapsed(date, TimeDelta::try_hours(amount), "add_hours")
    }

    fn add_minutes(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>> {
        self.add_elapsed(date, TimeDelta::try_minutes(amount), "add_minutes")
    }

    fn add_seconds(&self, date: Instant, amount: i64) -> Result<DateTime<Utc>> {
        self.add_elapsed(date, TimeDelta::try_seconds(amount), "add_seconds")
    }

    fn difference_in_days(&self, left: Instant, right: Instant) -> Result<f64> {
        let (left, right) = (self.normalize(left)?, self.normalize(right)?);
        if left >= right {
            self.days_between(&left, &right)
        } else {
            self.days_between(&right, &left).map(|days| -days)
        }
    }

    fn difference_in_minutes(&self, left: Instant, right: Instant) -> Result<f64> {
        self.difference_in_seconds(left, right).map(|secs| secs / 60.0)
    }

    fn difference_in_seconds(&self, left: Instant, right: Instant) -> Result<f64> {
        let (left, right) = (self.normalize(left)?, self.normalize(right)?);
        Ok(seconds_f64(left - right))
    }

    fn end_of_day(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.day_end(dt.date_naive())
    }

    fn end_of_month(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.day_end(Self::last_day_of_month(dt.date_naive())?)
    }

    fn end_of_week(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        let last = self
            .first_day_of_week(dt.date_naive())?
            .checked_add_signed(TimeDelta::days(6))
            .ok_or(DateAdapterError::OutOfRange { op: "end_of_week" })?;
        self.day_end(last)
    }

    fn get_day(&self, date: Instant) -> Result<u32> {
        Ok(self.normalize(date)?.day())
    }

    fn get_month(&self, date: Instant) -> Result<u32> {
        Ok(self.normalize(date)?.month())
    }

    fn get_hours(&self, date: Instant) -> Result<u32> {
        Ok(self.normalize(date)?.hour())
    }

    fn get_minutes(&self, date: Instant) -> Result<u32> {
        Ok(self.normalize(date)?.minute())
    }

    fn get_timezone_offset(&self, date: Instant) -> Result<f64> {
        let dt = self.normalize(date)?;
        Ok(coerce_number(&format_offset(dt.offset().fix())))
    }

    fn is_same_day(&self, left: Instant, right: Instant) -> Result<bool> {
        Ok(self.normalize(left)?.day() == self.normalize(right)?.day())
    }

    fn is_same_month(&self, left: Instant, right: Instant) -> Result<bool> {
        Ok(self.normalize(left)?.month() == self.normalize(right)?.month())
    }

    fn is_same_second(&self, left: Instant, right: Instant) -> Result<bool> {
        Ok(self.normalize(left)?.second() == self.normalize(right)?.second())
    }

    fn max(&self, dates: &[Instant]) -> Result<DateTime<Utc>> {
        let mut latest: Option<DateTime<Tz>> = None;
        for &date in dates {
            let dt = self.normalize(date)?;
            if latest.is_none_or(|cur| dt > cur) {
                latest = Some(dt);
            }
        }
        latest
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(DateAdapterError::EmptySequence)
    }

    fn set_hours(&self, date: Instant, hours: u32) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        let naive = dt
            .naive_local()
            .with_hour(hours)
            .ok_or(DateAdapterError::InvalidField {
                field: "hour",
                value: hours,
            })?;
        self.resolve(naive, Bias::Offset(dt.offset().fix()))
    }

    fn set_minutes(&self, date: Instant, minutes: u32) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        let naive = dt
            .naive_local()
            .with_minute(minutes)
            .ok_or(DateAdapterError::InvalidField {
                field: "minute",
                value: minutes,
            })?;
        self.resolve(naive, Bias::Offset(dt.offset().fix()))
    }

    fn start_of_day(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.day_start(dt.date_naive())
    }

    fn start_of_minute(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        let local = dt.naive_local();
        let truncated = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)
            .map(|time| local.date().and_time(time))
            .ok_or(DateAdapterError::OutOfRange { op: "start_of_minute" })?;
        self.resolve(truncated, Bias::Offset(dt.offset().fix()))
    }

    fn start_of_month(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.day_start(Self::first_day_of_month(dt.date_naive()))
    }

    fn start_of_week(&self, date: Instant) -> Result<DateTime<Utc>> {
        let dt = self.normalize(date)?;
        self.day_start(self.first_day_of_week(dt.date_naive())?)
    }
}
