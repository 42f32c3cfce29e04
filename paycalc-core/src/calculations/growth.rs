//! Investment growth projections: lumpsum, SIP, fixed deposit and
//! systematic withdrawal.
//!
//! Rates are annual percentages (`12` means 12%).
//!
//! | Plan     | Formula |
//! |----------|---------|
//! | Lumpsum  | `P × (1 + R)^years` |
//! | SIP      | `M × ((1 + r)^n − 1) / r × (1 + r)`, monthly `r`, `n` months |
//! | FD       | `P × (1 + R/f)^(f × years)` |
//! | SWP      | each period `B = B × (1 + R/f) − W` |

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::CalculatorError;
use crate::calculations::common::{compound_factor, max, period_count, round_half_up};
use crate::models::{CompoundingFrequency, GrowthResult, WithdrawalResult};

fn per_period_rate(
    annual_rate_percent: Decimal,
    periods_per_year: u32,
) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(periods_per_year)
}

fn growth_result(
    invested: Decimal,
    maturity_value: Decimal,
) -> GrowthResult {
    let maturity_value = round_half_up(maturity_value);
    GrowthResult {
        invested,
        maturity_value,
        estimated_returns: maturity_value - invested,
    }
}

/// Future value of a one-time investment compounded yearly.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::lumpsum;
///
/// let result = lumpsum(dec!(100000), dec!(12), dec!(10)).unwrap();
/// assert_eq!(result.maturity_value, dec!(310584.82));
/// ```
pub fn lumpsum(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: Decimal,
) -> Result<GrowthResult, CalculatorError> {
    let factor = compound_factor(per_period_rate(annual_rate_percent, 1), years)
        .ok_or(CalculatorError::Overflow)?;
    let maturity = principal
        .checked_mul(factor)
        .ok_or(CalculatorError::Overflow)?;

    Ok(growth_result(principal, maturity))
}

/// Future value of a monthly contribution made at the start of each month.
///
/// A zero rate returns the contributions unchanged.
pub fn sip(
    monthly_contribution: Decimal,
    annual_rate_percent: Decimal,
    years: Decimal,
) -> Result<GrowthResult, CalculatorError> {
    let months = years
        .checked_mul(Decimal::from(12))
        .ok_or(CalculatorError::Overflow)?
        .round();
    let invested = monthly_contribution
        .checked_mul(months)
        .ok_or(CalculatorError::Overflow)?;
    let r = per_period_rate(annual_rate_percent, 12);

    if r.is_zero() {
        return Ok(growth_result(invested, invested));
    }

    let factor = compound_factor(r, months).ok_or(CalculatorError::Overflow)?;
    let maturity = monthly_contribution
        .checked_mul(factor - Decimal::ONE)
        .and_then(|v| v.checked_div(r))
        .and_then(|v| v.checked_mul(Decimal::ONE + r))
        .ok_or(CalculatorError::Overflow)?;

    Ok(growth_result(invested, maturity))
}

/// Maturity of a deposit compounded `frequency` times a year.
pub fn fixed_deposit(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: Decimal,
    frequency: CompoundingFrequency,
) -> Result<GrowthResult, CalculatorError> {
    let periods_per_year = frequency.periods_per_year();
    let periods = years
        .checked_mul(Decimal::from(periods_per_year))
        .ok_or(CalculatorError::Overflow)?;
    let factor = compound_factor(per_period_rate(annual_rate_percent, periods_per_year), periods)
        .ok_or(CalculatorError::Overflow)?;
    let maturity = principal
        .checked_mul(factor)
        .ok_or(CalculatorError::Overflow)?;

    Ok(growth_result(principal, maturity))
}

/// Simulates a systematic withdrawal plan.
///
/// Each period the balance earns one period of interest and then the
/// withdrawal is taken. The running balance is not clamped: once it goes
/// negative it keeps compounding and withdrawing, and only the reported
/// `final_balance` is floored at zero. `depleted_in_period` records the
/// first period that left the balance at or below zero.
///
/// # Errors
///
/// - [`CalculatorError::InvalidTerm`] for a negative duration or one longer
///   than [`MAX_TERM_YEARS`](crate::calculations::common::MAX_TERM_YEARS)
/// - [`CalculatorError::Overflow`] when the running balance leaves the
///   representable range
pub fn systematic_withdrawal(
    initial_investment: Decimal,
    withdrawal_per_period: Decimal,
    annual_rate_percent: Decimal,
    years: Decimal,
    frequency: CompoundingFrequency,
) -> Result<WithdrawalResult, CalculatorError> {
    let periods_per_year = frequency.periods_per_year();
    let rate = per_period_rate(annual_rate_percent, periods_per_year);
    let growth = Decimal::ONE
        .checked_add(rate)
        .ok_or(CalculatorError::Overflow)?;
    let periods = period_count(years, periods_per_year)?;

    let mut balance = initial_investment;
    let mut total_withdrawn = Decimal::ZERO;
    let mut depleted_in_period = None;

    for period in 1..=periods {
        balance = balance
            .checked_mul(growth)
            .and_then(|v| v.checked_sub(withdrawal_per_period))
            .ok_or(CalculatorError::Overflow)?;
        total_withdrawn = total_withdrawn
            .checked_add(withdrawal_per_period)
            .ok_or(CalculatorError::Overflow)?;

        if depleted_in_period.is_none() && balance <= Decimal::ZERO {
            debug!(period, "withdrawal plan depleted");
            depleted_in_period = Some(period);
        }
    }

    Ok(WithdrawalResult {
        total_withdrawn,
        final_balance: round_half_up(max(balance, Decimal::ZERO)),
        periods,
        depleted_in_period,
    })
}
