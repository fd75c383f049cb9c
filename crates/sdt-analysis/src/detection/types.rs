//! Serializable summary of a detection experiment.

use std::fmt;

use sdt_core::config::ReportConfig;
use serde::{Deserialize, Serialize};

/// Counts, rates and statistics captured from a `SignalDetection`.
///
/// Non-finite statistics serialize as `null` in JSON. Equality is plain f64
/// equality, so a summary holding NaN is not equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdtSummary {
    pub hits: u64,
    pub misses: u64,
    pub false_alarms: u64,
    pub correct_rejections: u64,
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
    pub d_prime: f64,
    pub criterion: f64,
}

impl SdtSummary {
    /// Render as a single line using the configured precision.
    pub fn render(&self, config: &ReportConfig) -> String {
        let p = config.effective_precision();
        let stats = format!(
            "H={:.p$} FA={:.p$} d'={:.p$} c={:.p$}",
            self.hit_rate, self.false_alarm_rate, self.d_prime, self.criterion,
        );
        if config.effective_include_counts() {
            format!(
                "hits={} misses={} false_alarms={} correct_rejections={} {}",
                self.hits, self.misses, self.false_alarms, self.correct_rejections, stats
            )
        } else {
            stats
        }
    }
}

impl fmt::Display for SdtSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&ReportConfig::default()))
    }
}
