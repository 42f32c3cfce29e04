//! Common utility functions for the calculators.
//!
//! This module provides shared functionality used across the salary, tax,
//! loan and growth calculations, including rounding, percentage helpers and
//! compounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::calculations::CalculatorError;

/// Largest salary magnitude the country rules are evaluated at.
///
/// Component and bracket arithmetic stays well inside [`Decimal`]'s range
/// for amounts up to this bound.
pub const MAX_SALARY_AMOUNT: Decimal = dec!(1000000000000000);

/// Longest loan or withdrawal horizon, in years.
pub const MAX_TERM_YEARS: u32 = 100;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the nearest whole currency unit.
///
/// Income tax figures are reported in whole units; midpoints round away
/// from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::common::round_to_unit;
///
/// assert_eq!(round_to_unit(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_to_unit(dec!(1234.50)), dec!(1235));
/// ```
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Applies a percentage (0-100 scale) to an amount.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(200000), dec!(12)), dec!(24000));
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Clamps a salary amount into `[-MAX_SALARY_AMOUNT, MAX_SALARY_AMOUNT]`.
pub fn clamp_salary(amount: Decimal) -> Decimal {
    amount.clamp(-MAX_SALARY_AMOUNT, MAX_SALARY_AMOUNT)
}

/// Number of whole periods in `years`, rounded to the nearest period.
///
/// # Errors
///
/// [`CalculatorError::InvalidTerm`] when `years` is negative or longer than
/// [`MAX_TERM_YEARS`].
pub fn period_count(
    years: Decimal,
    periods_per_year: u32,
) -> Result<u32, CalculatorError> {
    let invalid = || CalculatorError::InvalidTerm(years);

    if years.is_sign_negative() && !years.is_zero() {
        return Err(invalid());
    }
    let periods = years
        .checked_mul(Decimal::from(periods_per_year))
        .ok_or_else(invalid)?
        .round()
        .to_u32()
        .ok_or_else(invalid)?;

    if periods > MAX_TERM_YEARS * periods_per_year {
        return Err(invalid());
    }
    Ok(periods)
}

/// Longest whole-period run compounded by repeated multiplication.
const MAX_ITERATED_PERIODS: u64 = 1200;

/// Computes `(1 + rate)^periods` where `rate` is a per-period fraction.
///
/// Whole, non-negative period counts up to 100 years of months are
/// compounded by repeated multiplication so the result is exact to the
/// precision of [`Decimal`]. Anything else falls back to
/// [`MathematicalOps::checked_powd`].
///
/// Returns `None` when the result cannot be represented.
pub fn compound_factor(
    rate: Decimal,
    periods: Decimal,
) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(rate)?;

    if periods.fract().is_zero() && !periods.is_sign_negative() {
        if let Some(whole) = periods.to_u64().filter(|n| *n <= MAX_ITERATED_PERIODS) {
            let mut result = Decimal::ONE;
            for _ in 0..whole {
                result = result.checked_mul(base)?;
            }
            return Some(result);
        }
    }

    base.checked_powd(periods)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // round_to_unit tests
    // =========================================================================

    #[test]
    fn round_to_unit_rounds_half_away_from_zero() {
        assert_eq!(round_to_unit(dec!(10.5)), dec!(11));
        assert_eq!(round_to_unit(dec!(-10.5)), dec!(-11));
    }

    #[test]
    fn round_to_unit_truncates_below_midpoint() {
        assert_eq!(round_to_unit(dec!(99.4999)), dec!(99));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_negative_and_zero() {
        assert_eq!(max(dec!(-50.00), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(150000), dec!(200000)), dec!(150000));
        assert_eq!(min(dec!(250000), dec!(200000)), dec!(200000));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_handles_fractional_percentages() {
        assert_eq!(percent_of(dec!(100000), dec!(1.45)), dec!(1450));
    }

    // =========================================================================
    // clamp_salary / period_count tests
    // =========================================================================

    #[test]
    fn clamp_salary_bounds_both_signs() {
        assert_eq!(clamp_salary(Decimal::MAX), MAX_SALARY_AMOUNT);
        assert_eq!(clamp_salary(Decimal::MIN), -MAX_SALARY_AMOUNT);
        assert_eq!(clamp_salary(dec!(1500000)), dec!(1500000));
    }

    #[test]
    fn period_count_rounds_to_nearest_period() {
        assert_eq!(period_count(dec!(2.5), 12), Ok(30));
        assert_eq!(period_count(dec!(0.02), 12), Ok(0));
        assert_eq!(period_count(Decimal::ZERO, 4), Ok(0));
    }

    #[test]
    fn period_count_accepts_the_longest_term() {
        assert_eq!(period_count(dec!(100), 12), Ok(1200));
    }

    #[test]
    fn period_count_rejects_out_of_range_terms() {
        assert_eq!(period_count(dec!(-1), 12), Err(CalculatorError::InvalidTerm(dec!(-1))));
        assert_eq!(period_count(dec!(101), 1), Err(CalculatorError::InvalidTerm(dec!(101))));
        assert_eq!(
            period_count(dec!(400000000), 12),
            Err(CalculatorError::InvalidTerm(dec!(400000000)))
        );
        assert_eq!(period_count(Decimal::MAX, 12), Err(CalculatorError::InvalidTerm(Decimal::MAX)));
    }

    // =========================================================================
    // compound_factor tests
    // =========================================================================

    #[test]
    fn compound_factor_zero_periods_is_one() {
        assert_eq!(compound_factor(dec!(0.05), Decimal::ZERO), Some(Decimal::ONE));
    }

    #[test]
    fn compound_factor_whole_periods_is_exact() {
        assert_eq!(compound_factor(dec!(0.10), dec!(2)), Some(dec!(1.21)));
    }

    #[test]
    fn compound_factor_fractional_periods_uses_powd() {
        let factor = compound_factor(dec!(0.21), dec!(0.5)).unwrap();

        assert!((factor - dec!(1.1)).abs() < dec!(0.000001), "got {factor}");
    }

    #[test]
    fn compound_factor_reports_overflow() {
        assert_eq!(compound_factor(dec!(1000), dec!(100)), None);
    }
}
