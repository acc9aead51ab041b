//! # Date Adapters
//!
//! - [`date_adapter::DateAdapter`]: the port consumed by date-display components.
//! - [`chrono_adapter::ChronoDateAdapter`]: the `chrono` / `chrono-tz` backend.

pub mod chrono_adapter;
pub mod date_adapter;

use chrono_adapter::ChronoDateAdapter;
use date_adapter::DateAdapter;

/// Produces a date adapter with the default configuration (UTC, Monday weeks).
///
/// Each call returns an independent instance; construction has no side effects.
pub fn adapter_factory() -> Box<dyn DateAdapter> {
    Box::new(ChronoDateAdapter::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::instant::Instant;

    #[test]
    fn factory_instances_behave_identically() {
        let a = adapter_factory();
        let b = adapter_factory();
        let i = Instant::Millis(1_710_498_600_000); // 2024-03-15T10:30:00Z

        assert_eq!(a.start_of_week(i), b.start_of_week(i));
        assert_eq!(a.get_month(i).unwrap(), 3);
        assert_eq!(b.get_hours(i).unwrap(), 10);
    }
}
