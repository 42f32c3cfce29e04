//! Salary hike and pay-rate conversions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::CalculatorError;
use crate::calculations::common::round_half_up;
use crate::models::{HikeResult, PayRates};

pub const DEFAULT_HOURS_PER_WEEK: Decimal = dec!(40);
pub const DEFAULT_WEEKS_PER_YEAR: Decimal = dec!(52);
const WORKING_DAYS_PER_WEEK: Decimal = dec!(5);
const MONTHS_PER_YEAR: Decimal = dec!(12);

fn check_schedule(
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
) -> Result<(), CalculatorError> {
    if hours_per_week <= Decimal::ZERO || weeks_per_year <= Decimal::ZERO {
        return Err(CalculatorError::InvalidSchedule {
            hours_per_week,
            weeks_per_year,
        });
    }
    Ok(())
}

fn hike_result(
    current_salary: Decimal,
    new_salary: Decimal,
    hike_percent: Decimal,
) -> Result<HikeResult, CalculatorError> {
    Ok(HikeResult {
        current_salary,
        new_salary,
        increment: new_salary
            .checked_sub(current_salary)
            .ok_or(CalculatorError::Overflow)?,
        hike_percent,
        new_monthly_salary: round_half_up(new_salary / MONTHS_PER_YEAR),
    })
}

/// Applies a percentage raise to an annual salary.
pub fn salary_hike(
    current_salary: Decimal,
    hike_percent: Decimal,
) -> Result<HikeResult, CalculatorError> {
    let new_salary = current_salary
        .checked_mul(hike_percent)
        .map(|raise| raise / Decimal::ONE_HUNDRED)
        .and_then(|raise| current_salary.checked_add(raise))
        .ok_or(CalculatorError::Overflow)?;

    hike_result(current_salary, round_half_up(new_salary), hike_percent)
}

/// The hike that takes `current_salary` to `new_salary`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::salary_hike_between;
///
/// let result = salary_hike_between(dec!(80000), dec!(92000)).unwrap();
/// assert_eq!(result.hike_percent, dec!(15.00));
/// assert_eq!(result.increment, dec!(12000));
/// ```
pub fn salary_hike_between(
    current_salary: Decimal,
    new_salary: Decimal,
) -> Result<HikeResult, CalculatorError> {
    let hike_percent = hike_percentage(current_salary, new_salary)?;
    hike_result(current_salary, new_salary, hike_percent)
}

/// Percentage change from `current_salary` to `new_salary`, to two places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::calculations::hike_percentage;
///
/// assert_eq!(hike_percentage(dec!(80000), dec!(92000)), Ok(dec!(15.00)));
/// ```
pub fn hike_percentage(
    current_salary: Decimal,
    new_salary: Decimal,
) -> Result<Decimal, CalculatorError> {
    if current_salary.is_zero() {
        return Err(CalculatorError::ZeroBase);
    }
    new_salary
        .checked_sub(current_salary)
        .and_then(|change| change.checked_div(current_salary))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_half_up)
        .ok_or(CalculatorError::Overflow)
}

/// Breaks an annual salary down into monthly, weekly, daily and hourly pay.
///
/// A working week is five days.
pub fn pay_rates(
    annual_salary: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
) -> Result<PayRates, CalculatorError> {
    check_schedule(hours_per_week, weeks_per_year)?;

    let weekly = annual_salary / weeks_per_year;

    Ok(PayRates {
        hourly: round_half_up(weekly / hours_per_week),
        daily: round_half_up(weekly / WORKING_DAYS_PER_WEEK),
        weekly: round_half_up(weekly),
        monthly: round_half_up(annual_salary / MONTHS_PER_YEAR),
        annual: annual_salary,
    })
}

/// Annual pay for an hourly rate worked over the given schedule.
pub fn annual_from_hourly(
    hourly_rate: Decimal,
    hours_per_week: Decimal,
    weeks_per_year: Decimal,
) -> Result<Decimal, CalculatorError> {
    check_schedule(hours_per_week, weeks_per_year)?;
    hourly_rate
        .checked_mul(hours_per_week)
        .and_then(|weekly| weekly.checked_mul(weeks_per_year))
        .map(round_half_up)
        .ok_or(CalculatorError::Overflow)
}
