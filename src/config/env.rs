//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables used by the adapter
//! configuration (timezone name, week start), plus [`load_dotenv`] which
//! pulls `.env` files into the process environment first.
//!
//! Each reader takes a provider function, so tests can supply values
//! without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use wzs_date_adapter::config::env::{read_string_from, read_weekday_from};
//!
//! let env = |k: &str| std::env::var(k).ok();
//! let tz = read_string_from(env, "DATE_ADAPTER_TIMEZONE", "UTC");
//! let week_start = read_weekday_from(env, "DATE_ADAPTER_WEEK_START");
//! ```

use chrono::Weekday;
use tracing::debug;

use crate::error::date::{DateAdapterError, Result};

/// Loads a dotenv file unless `APP_ENV` is `"production"`.
///
/// `DOTENV_FILE` names an explicit file. Without it, `.env.{APP_ENV}` is
/// tried (with `APP_ENV` defaulting to `"development"`), then `.env`.
/// Variables already set in the process are left untouched, and a missing
/// file is not an error.
pub fn load_dotenv() {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
    if app_env == "production" {
        return;
    }

    let loaded = match std::env::var("DOTENV_FILE") {
        Ok(path) => dotenvy::from_filename(path),
        Err(_) => dotenvy::from_filename(format!(".env.{app_env}")).or_else(|_| dotenvy::dotenv()),
    };
    if let Ok(path) = loaded {
        debug!(path = %path.display(), "loaded dotenv file");
    }
}

/// Reads a string using a custom provider function.
///
/// Surrounding whitespace and quotes are stripped.
///
/// # Example
/// ```rust
/// use wzs_date_adapter::config::env::read_string_from;
///
/// let val = read_string_from(|_| Some("'Asia/Tokyo'".into()), "TZ", "UTC");
/// assert_eq!(val, "Asia/Tokyo");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads a weekday using a custom provider function.
///
/// Returns `Ok(None)` when the variable is missing, and an error when it is
/// present but not a weekday name.
pub fn read_weekday_from<F>(provider: F, name: &str) -> Result<Option<Weekday>>
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => parse_weekday(&v).map(Some),
        None => Ok(None),
    }
}

/// Parses an English weekday name, full or abbreviated, case-insensitive.
///
/// # Example
/// ```rust
/// use chrono::Weekday;
/// use wzs_date_adapter::config::env::parse_weekday;
///
/// assert_eq!(parse_weekday("Sunday").unwrap(), Weekday::Sun);
/// assert_eq!(parse_weekday("mon").unwrap(), Weekday::Mon);
/// ```
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let trimmed = s.trim().trim_matches(|c| c == '"' || c == '\'');
    trimmed
        .parse::<Weekday>()
        .map_err(|_| DateAdapterError::InvalidWeekday(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_dotenv(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.env", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_dotenv_reads_dotenv_file() {
        let path = write_dotenv("wzs-date-adapter-dev", "WZS_DOTENV_DEV_TZ=Asia/Tokyo\n");
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("development")),
                ("DOTENV_FILE", path.to_str()),
                ("WZS_DOTENV_DEV_TZ", None),
            ],
            || {
                load_dotenv();
                assert_eq!(std::env::var("WZS_DOTENV_DEV_TZ").as_deref(), Ok("Asia/Tokyo"));
            },
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_dotenv_skipped_in_production() {
        let path = write_dotenv("wzs-date-adapter-prod", "WZS_DOTENV_PROD_TZ=Asia/Tokyo\n");
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("production")),
                ("DOTENV_FILE", path.to_str()),
                ("WZS_DOTENV_PROD_TZ", None),
            ],
            || {
                load_dotenv();
                assert!(std::env::var("WZS_DOTENV_PROD_TZ").is_err());
            },
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_dotenv_keeps_existing_values() {
        let path = write_dotenv("wzs-date-adapter-keep", "WZS_DOTENV_KEEP_TZ=Asia/Tokyo\n");
        temp_env::with_vars(
            vec![
                ("APP_ENV", Some("development")),
                ("DOTENV_FILE", path.to_str()),
                ("WZS_DOTENV_KEEP_TZ", Some("Europe/Paris")),
            ],
            || {
                load_dotenv();
                assert_eq!(std::env::var("WZS_DOTENV_KEEP_TZ").as_deref(), Ok("Europe/Paris"));
            },
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_read_string_strips_quotes_and_whitespace() {
        assert_eq!(
            read_string_from(|_| Some("  \"Europe/Paris\" ".into()), "X", "UTC"),
            "Europe/Paris"
        );
    }

    #[test]
    fn test_read_string_default_when_missing_or_blank() {
        assert_eq!(read_string_from(|_| None, "X", "UTC"), "UTC");
        assert_eq!(read_string_from(|_| Some("   ".into()), "X", "UTC"), "UTC");
    }

    #[test]
    fn test_parse_weekday_variants() {
        for (val, want) in [
            ("monday", Weekday::Mon),
            ("MON", Weekday::Mon),
            ("sun", Weekday::Sun),
            ("Saturday", Weekday::Sat),
            ("'wed'", Weekday::Wed),
        ] {
            assert_eq!(parse_weekday(val).unwrap(), want, "parsing {val:?}");
        }
    }

    #[test]
    fn test_parse_weekday_invalid() {
        assert_eq!(
            parse_weekday("someday"),
            Err(DateAdapterError::InvalidWeekday("someday".into()))
        );
    }

    #[test]
    fn test_read_weekday_from_missing_and_invalid() {
        assert_eq!(read_weekday_from(|_| None, "X").unwrap(), None);
        assert_eq!(
            read_weekday_from(|_| Some("sun".into()), "X").unwrap(),
            Some(Weekday::Sun)
        );
        assert!(read_weekday_from(|_| Some("xyz".into()), "X").is_err());
    }
}
