//! Signal detection theory: d' and criterion over probit-transformed rates.
//!
//! Inputs are not validated. Degenerate rates (0, 1, or NaN from an empty
//! trial row) flow through as infinities or NaN, see [`probit`].

pub mod probit;
pub mod signal_detection;
pub mod types;

pub use probit::probit;
pub use signal_detection::SignalDetection;
pub use types::SdtSummary;
