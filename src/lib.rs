//! # wzs_date_adapter
//!
//! Pluggable date-manipulation adapter for calendar and date-display
//! components.
//!
//! This crate provides:
//! - The [`DateAdapter`](adapter::date_adapter::DateAdapter) port: a fixed set
//!   of date arithmetic, comparison and boundary operations
//! - A `chrono` / `chrono-tz` backed implementation (`adapter::chrono_adapter`)
//! - Environment-driven configuration of timezone and week start (`config`)
//! - Re-exports of the underlying date crates (`chrono`, `chrono_tz`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use wzs_date_adapter::adapter::adapter_factory;
//! use wzs_date_adapter::time::instant::Instant;
//!
//! let adapter = adapter_factory();
//! let start = adapter.start_of_month(Instant::from(1_710_498_600_000_i64)).unwrap();
//! assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;

// ===============================
// Public modules
// ===============================
pub mod adapter;
pub mod config;
pub mod error;
pub mod time;
