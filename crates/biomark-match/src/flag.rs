//! Five-tier classification against the optimal range.

use biomark_model::Flag;

/// Values below `optimal_low * CRITICAL_LOW_FACTOR` are critically low.
pub const CRITICAL_LOW_FACTOR: f64 = 0.8;
/// Values above `optimal_high * CRITICAL_HIGH_FACTOR` are critically high.
pub const CRITICAL_HIGH_FACTOR: f64 = 1.2;

/// Classify a numeric value against a biomarker's optimal range.
///
/// Returns `None` when either bound is missing — qualitative analytes
/// cannot be classified. All comparisons are strict: a value exactly equal
/// to either bound is `Optimal`.
pub fn calculate_flag(value: f64, optimal_low: Option<f64>, optimal_high: Option<f64>) -> Option<Flag> {
    let low = optimal_low?;
    let high = optimal_high?;
    let flag = if value < low * CRITICAL_LOW_FACTOR {
        Flag::CriticalLow
    } else if value < low {
        Flag::Low
    } else if value > high * CRITICAL_HIGH_FACTOR {
        Flag::CriticalHigh
    } else if value > high {
        Flag::High
    } else {
        Flag::Optimal
    };
    Some(flag)
}
