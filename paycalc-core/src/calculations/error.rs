use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from the loan, growth and pay calculators.
///
/// These only arise where the formula itself is undefined for the input;
/// ordinary out-of-range values (negative principals, zero rates) are
/// computed as given.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The term is negative, longer than the supported horizon, or, for a
    /// loan, rounds to zero monthly installments.
    #[error("term of {0} years is outside the supported range")]
    InvalidTerm(Decimal),

    /// A schedule needs a positive number of hours and weeks.
    #[error("working schedule must be positive, got {hours_per_week} hours x {weeks_per_year} weeks")]
    InvalidSchedule {
        hours_per_week: Decimal,
        weeks_per_year: Decimal,
    },

    /// A percentage change was requested from a zero base.
    #[error("cannot compute a percentage change from zero")]
    ZeroBase,

    /// An intermediate value exceeded the representable range.
    #[error("calculation overflowed")]
    Overflow,
}
