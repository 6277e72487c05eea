//! Shared utilities: error types and fixed constants.

pub mod config;
pub mod error;
