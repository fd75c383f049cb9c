//! Signal detection statistics.
//!
//! Given the four outcome counts of a yes/no detection experiment, derive the
//! hit and false-alarm rates, sensitivity (d') and response bias (c).

pub mod detection;

pub use detection::{probit, SdtSummary, SignalDetection};
