//! Tracing targets.

/// Target for events emitted by the detection statistics.
pub const DETECTION_TARGET: &str = "sdt::detection";

/// Target for events emitted while resolving configuration.
pub const CONFIG_TARGET: &str = "sdt::config";
