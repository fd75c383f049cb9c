//! Report rendering configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REPORT_PRECISION;

/// Controls how statistics summaries are rendered as text.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Decimal places for rates and statistics. Default: 4.
    pub precision: Option<usize>,
    /// Include the raw trial counts in rendered output. Default: true.
    pub include_counts: Option<bool>,
}

impl ReportConfig {
    /// Returns the effective precision, defaulting to 4.
    pub fn effective_precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_REPORT_PRECISION)
    }

    /// Returns whether counts are rendered, defaulting to true.
    pub fn effective_include_counts(&self) -> bool {
        self.include_counts.unwrap_or(true)
    }
}
