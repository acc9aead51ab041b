//! Instant representation and `chrono-tz` helpers.
pub mod instant;
pub mod local;
pub mod offset;
