// crates/perf-contracts-core/src/core/numeric.rs
// ============================================================================
// Module: Numeric Helpers
// Description: NaN-free ratios, means, and integral rounding.
// Purpose: Keep every derived statistic a well-formed finite number.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Division by zero is defined as `0` throughout the engine so that averages
//! and utilizations never surface `NaN` or `Infinity`.

// ============================================================================
// SECTION: Ratios
// ============================================================================

/// Divides `numerator` by `denominator`, returning `0` when the denominator is zero.
#[must_use]
pub const fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

/// Converts a collection length into an `f64` sample count.
#[must_use]
pub fn sample_count(len: usize) -> f64 {
    u32::try_from(len).map_or(f64::from(u32::MAX), f64::from)
}

/// Arithmetic mean of the values; `0` for an empty input.
///
/// Deviations are summed relative to the first sample, so identical samples
/// yield that sample exactly.
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        return 0.0;
    };
    let (offset, len) =
        values.fold((0.0, 1_usize), |(offset, len), value| (offset + (value - first), len + 1));
    first + safe_ratio(offset, sample_count(len))
}

// ============================================================================
// SECTION: Rounding
// ============================================================================

/// Rounds a non-negative mean to the nearest count, saturating at `u32::MAX`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Value is finite, non-negative, integral, and below u32::MAX."
)]
pub fn round_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    rounded as u32
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::mean;
    use super::round_count;
    use super::safe_ratio;

    #[test]
    fn safe_ratio_zero_denominator_is_zero() {
        assert!(safe_ratio(12.0, 0.0).abs() < f64::EPSILON);
        assert!((safe_ratio(12.0, 4.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert!(mean(Vec::<f64>::new()).abs() < f64::EPSILON);
        assert!((mean(vec![1.0, 2.0, 6.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "Identical samples must average exactly.")]
    fn mean_of_identical_samples_is_exact() {
        assert_eq!(mean(vec![0.1, 0.1, 0.1]), 0.1);
        assert_eq!(mean(vec![0.7999999999999999; 7]), 0.7999999999999999);
    }

    #[test]
    fn round_count_rounds_half_away_from_zero() {
        assert_eq!(round_count(2.5), 3);
        assert_eq!(round_count(2.49), 2);
        assert_eq!(round_count(-1.0), 0);
        assert_eq!(round_count(f64::NAN), 0);
    }
}
