//! Rent against the user's budget cap and the market average.

use rentscore_core::Settings;

use crate::math::to_score;

const SUB_SCORE_MAX: f64 = 50.0;
const PENALTY_PER_HUNDRED: f64 = 10.0;

/// Score `rent` against `settings`.
///
/// Two 50-point sub-scores, one per reference amount, each losing 10 points
/// per $100 over its reference and floored at 0. The sum is rounded once.
///
/// # Examples
/// ```
/// use rentscore_core::Settings;
/// use rentscore_scorer::score_price;
///
/// let settings = Settings::default();
/// assert_eq!(score_price(0.0, &settings), 100);
/// assert_eq!(score_price(2_200.0, &settings), 55);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "sub-scores are summed before rounding")]
pub fn score_price(rent: f64, settings: &Settings) -> u8 {
    to_score(
        sub_score(rent, settings.budget_cap()) + sub_score(rent, settings.market_avg_rent()),
    )
}

#[expect(clippy::float_arithmetic, reason = "linear penalty above the reference")]
fn sub_score(rent: f64, reference: f64) -> f64 {
    if rent <= reference {
        return SUB_SCORE_MAX;
    }
    (SUB_SCORE_MAX - ((rent - reference) / 100.0) * PENALTY_PER_HUNDRED).max(0.0)
}
