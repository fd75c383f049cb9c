//! Error handling for the calculator.
//! One error enum per subsystem, `thiserror` only.
//!
//! Numeric domain problems (rates of 0 or 1, empty trial rows) are not
//! errors here. They surface as NaN or infinities from the statistics.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::SdtErrorCode;
