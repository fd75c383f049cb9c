//! The `SignalDetection` record.

use sdt_core::tracing::fields::DETECTION_TARGET;

use super::probit::probit;
use super::types::SdtSummary;

/// Outcome counts of one yes/no detection experiment, with cached rates.
///
/// Immutable once built. `H` and `FA` are derived eagerly in [`new`](Self::new);
/// `d_prime` and `criterion` are pure functions of them.
///
/// Equality compares the four counts. The rates are derived from them, and
/// comparing the f64 rates would make a record with a NaN rate unequal to itself.
#[derive(Debug, Clone, Copy)]
pub struct SignalDetection {
    hits: u64,
    misses: u64,
    false_alarms: u64,
    correct_rejections: u64,
    hit_rate: f64,
    false_alarm_rate: f64,
}

impl SignalDetection {
    /// Build from raw counts.
    ///
    /// `H = hits / (hits + misses)`,
    /// `FA = false_alarms / (false_alarms + correct_rejections)`.
    /// An empty row gives a NaN rate; nothing is rejected.
    pub fn new(hits: u64, misses: u64, false_alarms: u64, correct_rejections: u64) -> Self {
        let hit_rate = rate(hits, misses);
        let false_alarm_rate = rate(false_alarms, correct_rejections);

        tracing::debug!(
            target: DETECTION_TARGET,
            hits,
            misses,
            false_alarms,
            correct_rejections,
            hit_rate,
            false_alarm_rate,
            "signal detection record built"
        );
        if is_degenerate(hit_rate) || is_degenerate(false_alarm_rate) {
            tracing::trace!(
                target: DETECTION_TARGET,
                hit_rate,
                false_alarm_rate,
                "rate at probit boundary; statistics will not be finite"
            );
        }

        Self {
            hits,
            misses,
            false_alarms,
            correct_rejections,
            hit_rate,
            false_alarm_rate,
        }
    }

    /// Sensitivity: `Φ⁻¹(H) − Φ⁻¹(FA)`.
    ///
    /// `+∞` when `H = 1` and `FA = 0`; NaN when both rates sit on the same
    /// boundary or either is NaN.
    pub fn d_prime(&self) -> f64 {
        probit(self.hit_rate) - probit(self.false_alarm_rate)
    }

    /// Response bias: `−0.5 · (Φ⁻¹(H) + Φ⁻¹(FA))`.
    ///
    /// Positive leans toward "absent", negative toward "present".
    /// NaN when `H = 1` and `FA = 0` (∞ + −∞).
    pub fn criterion(&self) -> f64 {
        -0.5 * (probit(self.hit_rate) + probit(self.false_alarm_rate))
    }

    /// Signal present, answered "present".
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Signal present, answered "absent".
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Signal absent, answered "present".
    pub fn false_alarms(&self) -> u64 {
        self.false_alarms
    }

    /// Signal absent, answered "absent".
    pub fn correct_rejections(&self) -> u64 {
        self.correct_rejections
    }

    /// H = hits / (hits + misses).
    pub fn hit_rate(&self) -> f64 {
        self.hit_rate
    }

    /// FA = false_alarms / (false_alarms + correct_rejections).
    pub fn false_alarm_rate(&self) -> f64 {
        self.false_alarm_rate
    }

    /// Signal-present trials: hits + misses.
    pub fn signal_trials(&self) -> u64 {
        self.hits.saturating_add(self.misses)
    }

    /// Signal-absent trials: false alarms + correct rejections.
    pub fn noise_trials(&self) -> u64 {
        self.false_alarms.saturating_add(self.correct_rejections)
    }

    /// Snapshot of counts, rates and both statistics.
    pub fn summary(&self) -> SdtSummary {
        SdtSummary {
            hits: self.hits,
            misses: self.misses,
            false_alarms: self.false_alarms,
            correct_rejections: self.correct_rejections,
            hit_rate: self.hit_rate,
            false_alarm_rate: self.false_alarm_rate,
            d_prime: self.d_prime(),
            criterion: self.criterion(),
        }
    }
}

impl PartialEq for SignalDetection {
    fn eq(&self, other: &Self) -> bool {
        self.hits == other.hits
            && self.misses == other.misses
            && self.false_alarms == other.false_alarms
            && self.correct_rejections == other.correct_rejections
    }
}

impl Eq for SignalDetection {}

/// `a / (a + b)` in f64. `0 / 0` is NaN.
fn rate(a: u64, b: u64) -> f64 {
    let a = a as f64;
    a / (a + b as f64)
}

fn is_degenerate(rate: f64) -> bool {
    rate.is_nan() || rate <= 0.0 || rate >= 1.0
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_rates_cached_at_construction() {
        let sd = SignalDetection::new(40, 10, 5, 45);
        assert!((sd.hit_rate() - 0.8).abs() < TOL);
        assert!((sd.false_alarm_rate() - 0.1).abs() < TOL);
        assert_eq!(sd.signal_trials(), 50);
        assert_eq!(sd.noise_trials(), 50);
    }

    #[test]
    fn test_reference_scenario() {
        let sd = SignalDetection::new(40, 10, 5, 45);
        assert!((sd.d_prime() - 2.1232).abs() < 1e-3);
        assert!((sd.criterion() - 0.2200).abs() < 1e-3);
    }

    #[test]
    fn test_balanced_counts_are_unbiased() {
        let sd = SignalDetection::new(10, 10, 10, 10);
        assert_eq!(sd.hit_rate(), 0.5);
        assert_eq!(sd.false_alarm_rate(), 0.5);
        assert!(sd.d_prime().abs() < TOL);
        assert!(sd.criterion().abs() < TOL);
    }

    #[test]
    fn test_perfect_performance_boundary() {
        let sd = SignalDetection::new(1, 0, 0, 1);
        assert_eq!(sd.hit_rate(), 1.0);
        assert_eq!(sd.false_alarm_rate(), 0.0);
        assert_eq!(sd.d_prime(), f64::INFINITY);
        assert!(sd.criterion().is_nan());
    }

    #[test]
    fn test_empty_signal_row_is_nan() {
        let sd = SignalDetection::new(0, 0, 3, 7);
        assert!(sd.hit_rate().is_nan());
        assert!(sd.d_prime().is_nan());
        assert!(sd.criterion().is_nan());
    }

    #[test]
    fn test_liberal_observer_has_negative_criterion() {
        // Says "yes" a lot: high H, high FA.
        let sd = SignalDetection::new(45, 5, 30, 20);
        assert!(sd.criterion() < 0.0);
        assert!(sd.d_prime() > 0.0);
    }

    #[test]
    fn test_degenerate_record_equals_itself() {
        let empty = SignalDetection::new(0, 0, 0, 0);
        assert!(empty.hit_rate().is_nan());
        assert_eq!(empty, empty);
        assert_eq!(empty, SignalDetection::new(0, 0, 0, 0));
        assert_ne!(empty, SignalDetection::new(0, 0, 0, 1));
    }

    /// Run `f` under a fmt subscriber at TRACE and return what it wrote.
    fn capture_events(f: impl FnOnce()) -> String {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_target(true)
            .with_writer(move || SharedBuf(writer.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_emits_debug_event() {
        let out = capture_events(|| {
            SignalDetection::new(40, 10, 5, 45);
        });
        assert!(out.contains("DEBUG"), "{out}");
        assert!(out.contains(DETECTION_TARGET), "{out}");
        assert!(out.contains("signal detection record built"), "{out}");
        assert!(out.contains("hits=40"), "{out}");
        assert!(!out.contains("rate at probit boundary"), "{out}");
    }

    #[test]
    fn test_boundary_rate_emits_trace_event() {
        let out = capture_events(|| {
            SignalDetection::new(1, 0, 0, 1);
        });
        let trace_line = out
            .lines()
            .find(|l| l.contains("rate at probit boundary"))
            .unwrap_or_else(|| panic!("no boundary event in {out}"));
        assert!(trace_line.contains("TRACE"), "{trace_line}");
        assert!(trace_line.contains(DETECTION_TARGET), "{trace_line}");
    }

    #[test]
    fn test_nan_rate_emits_trace_event() {
        let out = capture_events(|| {
            SignalDetection::new(0, 0, 3, 7);
        });
        assert!(out.contains("rate at probit boundary"), "{out}");
    }

    #[test]
    fn test_below_chance_gives_negative_d_prime() {
        let sd = SignalDetection::new(10, 40, 40, 10);
        assert!(sd.d_prime() < 0.0);
        assert!(sd.criterion().abs() < TOL);
    }
}
