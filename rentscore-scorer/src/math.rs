//! Rounding and ratio helpers shared by the category formulas.

use rentscore_core::MAX_SCORE;

/// Round half to even and clamp into `0..=100`.
///
/// Non-finite input maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped into 0..=100 before the cast"
)]
pub(crate) fn to_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// `count / denominator` as a float.
#[expect(clippy::float_arithmetic, reason = "ratios feed the float formulas")]
pub(crate) fn ratio(count: u32, denominator: f64) -> f64 {
    f64::from(count) / denominator
}

/// Clamp a collection length into `u32` for use with [`ratio`].
pub(crate) fn count_of(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
