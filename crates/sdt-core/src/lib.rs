//! Core types for the signal detection calculator: errors, configuration,
//! tracing setup, and shared constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
