use chrono::NaiveDateTime;
use thiserror::Error;

/// Result alias used by every [`DateAdapter`](crate::adapter::date_adapter::DateAdapter) operation.
pub type Result<T> = std::result::Result<T, DateAdapterError>;

/// Errors surfaced by the date adapter.
///
/// The adapter performs no validation of its own. Each variant mirrors a
/// condition the underlying `chrono` call reported (usually as `None`), so
/// callers can handle it at the call site.
///
/// # Example
/// ```
/// use wzs_date_adapter::error::date::DateAdapterError;
///
/// let err = DateAdapterError::InvalidField { field: "hour", value: 25 };
/// assert_eq!(err.to_string(), "invalid value 25 for field `hour`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateAdapterError {
    /// Epoch milliseconds outside the range chrono can represent.
    #[error("timestamp {0}ms is out of range")]
    InvalidTimestamp(i64),

    /// Arithmetic left the representable date range.
    #[error("`{op}` overflowed the supported date range")]
    OutOfRange { op: &'static str },

    /// A field setter received a value outside the field's range.
    #[error("invalid value {value} for field `{field}`")]
    InvalidField { field: &'static str, value: u32 },

    /// A local wall-clock time that no instant in the zone maps to.
    #[error("local time {0} does not exist in the configured timezone")]
    NonexistentLocalTime(NaiveDateTime),

    /// `max` was called without any instant.
    #[error("cannot take the maximum of an empty sequence")]
    EmptySequence,

    /// Unknown IANA timezone name.
    #[error("invalid timezone name: {0}")]
    InvalidTimezone(String),

    /// Unknown weekday name.
    #[error("invalid weekday name: {0}")]
    InvalidWeekday(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_formats_are_readable() {
        assert_eq!(
            DateAdapterError::InvalidTimestamp(i64::MAX).to_string(),
            format!("timestamp {}ms is out of range", i64::MAX)
        );
        assert_eq!(
            DateAdapterError::OutOfRange { op: "add_days" }.to_string(),
            "`add_days` overflowed the supported date range"
        );
        assert_eq!(
            DateAdapterError::EmptySequence.to_string(),
            "cannot take the maximum of an empty sequence"
        );
        assert_eq!(
            DateAdapterError::InvalidTimezone("Mars/Olympus".into()).to_string(),
            "invalid timezone name: Mars/Olympus"
        );
    }

    #[test]
    fn nonexistent_local_time_mentions_wall_clock() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let msg = DateAdapterError::NonexistentLocalTime(naive).to_string();

        assert!(msg.contains("2024-03-10 02:30:00"));
    }

    #[test]
    fn errors_work_with_anyhow() {
        let err: anyhow::Error = DateAdapterError::EmptySequence.into();
        assert!(err.downcast_ref::<DateAdapterError>().is_some());
    }
}
