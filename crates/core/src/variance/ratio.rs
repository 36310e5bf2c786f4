//! Division policy for variance ratios.

use rust_decimal::Decimal;

/// Divides `numerator` by `denominator`, returning zero when the
/// denominator is zero.
///
/// A missing budget is not an infinite overage here; unbudgeted spend is
/// caught by the outlier rule instead. The result is also zero if the
/// quotient does not fit in a `Decimal`.
#[must_use]
pub fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
