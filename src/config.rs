//! Configuration loading.
pub mod adapter;
pub mod env;
