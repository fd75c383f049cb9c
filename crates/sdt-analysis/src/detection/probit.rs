//! Probit function via `statrs`.
//!
//! Φ⁻¹(p): inverse CDF of the standard normal distribution.

use statrs::distribution::{ContinuousCDF, Normal};

/// Inverse standard normal CDF.
///
/// Boundary behaviour:
/// - `p == 0.0` → `-∞`
/// - `p == 1.0` → `+∞`
/// - `p` NaN or outside `[0, 1]` → NaN
///
/// Never panics. `statrs` panics on out-of-range input, so that case is
/// handled before the call.
pub fn probit(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    match Normal::new(0.0, 1.0) {
        Ok(dist) => dist.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}
