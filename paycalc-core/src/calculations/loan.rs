//! Fixed-rate amortized loans.
//!
//! Uses the standard annuity formula with monthly compounding:
//!
//! ```text
//! r = annual_rate / 100 / 12
//! n = years × 12
//! payment = P × r × (1 + r)^n / ((1 + r)^n − 1)
//! ```
//!
//! A zero rate makes the denominator zero, so it is special-cased to an even
//! split of the principal over `n` installments.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycalc_core::calculations::amortize;
//!
//! let result = amortize(dec!(24000), dec!(4.5), dec!(5)).unwrap();
//!
//! assert_eq!(result.monthly_payment, dec!(447.43));
//! ```

use rust_decimal::Decimal;

use crate::calculations::CalculatorError;
use crate::calculations::common::{compound_factor, max, period_count, round_half_up};
use crate::models::{AmortizationRow, LoanResult};

const MONTHS_PER_YEAR: u32 = 12;

fn installment_count(term_years: Decimal) -> Result<u32, CalculatorError> {
    match period_count(term_years, MONTHS_PER_YEAR)? {
        0 => Err(CalculatorError::InvalidTerm(term_years)),
        n => Ok(n),
    }
}

fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
}

/// Unrounded level payment for `principal` over `n` months at monthly rate `r`.
fn level_payment(
    principal: Decimal,
    r: Decimal,
    n: u32,
) -> Result<Decimal, CalculatorError> {
    if r.is_zero() {
        return Ok(principal / Decimal::from(n));
    }

    let growth = compound_factor(r, Decimal::from(n)).ok_or(CalculatorError::Overflow)?;
    let denominator = growth - Decimal::ONE;
    if denominator.is_zero() {
        // Rate so small that (1 + r)^n rounds to 1.
        return Ok(principal / Decimal::from(n));
    }

    principal
        .checked_mul(r)
        .and_then(|v| v.checked_mul(growth))
        .and_then(|v| v.checked_div(denominator))
        .ok_or(CalculatorError::Overflow)
}

/// Monthly payment, total paid and total interest for a fixed-rate loan.
///
/// The monthly payment is rounded to cents; totals are derived from the
/// rounded payment so `total_payment = monthly_payment × n` holds exactly.
///
/// # Errors
///
/// - [`CalculatorError::InvalidTerm`] when the term is under half a month or
///   longer than [`MAX_TERM_YEARS`](crate::calculations::common::MAX_TERM_YEARS)
/// - [`CalculatorError::Overflow`] for rates or terms too large to compound
pub fn amortize(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<LoanResult, CalculatorError> {
    let n = installment_count(term_years)?;
    let monthly_payment = round_half_up(level_payment(principal, monthly_rate(annual_rate_percent), n)?);

    let total_payment = monthly_payment
        .checked_mul(Decimal::from(n))
        .ok_or(CalculatorError::Overflow)?;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Amortizes `price - down_payment` (floored at zero).
pub fn car_loan(
    price: Decimal,
    down_payment: Decimal,
    annual_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<LoanResult, CalculatorError> {
    amortize(
        max(price - down_payment, Decimal::ZERO),
        annual_rate_percent,
        term_years,
    )
}

/// Month-by-month split of each payment into interest and principal.
///
/// Interest is rounded to cents each month. The last installment absorbs
/// the accumulated rounding so the closing balance is exactly zero.
pub fn amortization_schedule(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<Vec<AmortizationRow>, CalculatorError> {
    let n = installment_count(term_years)?;
    let r = monthly_rate(annual_rate_percent);
    let payment = round_half_up(level_payment(principal, r, n)?);

    let mut balance = principal;
    let mut rows = Vec::with_capacity(n as usize);

    for month in 1..=n {
        let interest = round_half_up(balance.checked_mul(r).ok_or(CalculatorError::Overflow)?);
        let principal_part = if month == n {
            balance
        } else {
            payment - interest
        };
        balance -= principal_part;

        rows.push(AmortizationRow {
            month,
            payment: principal_part + interest,
            principal: principal_part,
            interest,
            balance,
        });
    }

    Ok(rows)
}
