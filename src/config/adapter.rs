//! # Date Adapter Configuration Loader
//!
//! Holds the settings a [`ChronoDateAdapter`](crate::adapter::chrono_adapter::ChronoDateAdapter)
//! is built with. Timezone and week start are injected here once, instead
//! of being read from process-wide defaults on every call.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `DATE_ADAPTER_TIMEZONE` | IANA timezone used to resolve calendar fields | `"UTC"` |
//! | `DATE_ADAPTER_WEEK_START` | First day of the week (`monday`, `sun`, ...) | `"monday"` |
//!
//! # Example
//! ```rust,no_run
//! use wzs_date_adapter::config::adapter::AdapterConfig;
//!
//! let cfg = AdapterConfig::from_env().expect("invalid date adapter config");
//! println!("resolving dates in {}", cfg.timezone.name());
//! ```

use std::env;

use anyhow::{Context, Result};
use chrono::Weekday;
use chrono_tz::Tz;

use crate::config::env::{load_dotenv, read_string_from, read_weekday_from};
use crate::time::local::parse_timezone;

pub const TIMEZONE_VAR: &str = "DATE_ADAPTER_TIMEZONE";
pub const WEEK_START_VAR: &str = "DATE_ADAPTER_WEEK_START";

/// Settings injected into a date adapter at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Zone in which calendar fields and period boundaries are resolved.
    pub timezone: Tz,
    /// First day of the week for `start_of_week` / `end_of_week`.
    pub week_start: Weekday,
}

impl Default for AdapterConfig {
    /// UTC with ISO weeks (Monday first).
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            week_start: Weekday::Mon,
        }
    }
}

impl AdapterConfig {
    /// Creates a configuration with an explicit zone and week start.
    pub fn new(timezone: Tz, week_start: Weekday) -> Self {
        Self {
            timezone,
            week_start,
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Missing variables fall back to [`AdapterConfig::default`].
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_provider(|k| env::var(k).ok())
    }

    /// Builds the configuration from a custom variable provider.
    ///
    /// # Example
    /// ```rust
    /// use chrono::Weekday;
    /// use wzs_date_adapter::config::adapter::AdapterConfig;
    ///
    /// let cfg = AdapterConfig::from_provider(|k| match k {
    ///     "DATE_ADAPTER_TIMEZONE" => Some("Asia/Tokyo".into()),
    ///     "DATE_ADAPTER_WEEK_START" => Some("sunday".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(cfg.timezone, chrono_tz::Asia::Tokyo);
    /// assert_eq!(cfg.week_start, Weekday::Sun);
    /// ```
    pub fn from_provider<F>(provider: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tz_name = read_string_from(&provider, TIMEZONE_VAR, defaults.timezone.name());
        let timezone =
            parse_timezone(&tz_name).with_context(|| format!("{TIMEZONE_VAR} is invalid"))?;

        let week_start = read_weekday_from(&provider, WEEK_START_VAR)
            .with_context(|| format!("{WEEK_START_VAR} is invalid"))?
            .unwrap_or(defaults.week_start);

        Ok(Self {
            timezone,
            week_start,
        })
    }
}
