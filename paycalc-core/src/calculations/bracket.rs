//! Marginal-rate evaluation over a slab schedule.
//!
//! Each band taxes only the slice of income that falls inside it, so moving
//! into a higher band never raises the tax on income already counted in the
//! lower ones.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycalc_core::calculations::evaluate_bracket_tax;
//! use paycalc_core::TaxBracket;
//!
//! let brackets = [
//!     TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(10)),
//!     TaxBracket::new(dec!(10000), None, dec!(20)),
//! ];
//!
//! // 10% of the first 10,000 plus 20% of the remaining 5,000.
//! assert_eq!(evaluate_bracket_tax(dec!(15000), &brackets), dec!(2000));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;
use crate::calculations::common::{min, percent_of};

/// Structural problems in a slab schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketScheduleError {
    #[error("schedule has no bands")]
    Empty,

    #[error("first band starts at {0}, expected 0")]
    DoesNotStartAtZero(Decimal),

    #[error("band {index} starts at {found} but the previous band ends at {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("band {0} is unbounded but is not the last band")]
    UnboundedBeforeEnd(usize),

    #[error("final band must be unbounded")]
    BoundedFinalBand,

    #[error("band {index} has rate {rate}, expected 0-100")]
    InvalidRate { index: usize, rate: Decimal },
}

/// Computes the gross tax on `taxable_income` before any surcharge or cess.
///
/// Brackets must be ordered ascending by `min`. The result is not rounded.
/// Income at or below zero enters no band and yields zero.
pub fn evaluate_bracket_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    brackets
        .iter()
        .filter(|bracket| taxable_income > bracket.min)
        .map(|bracket| {
            let above_min = taxable_income - bracket.min;
            let slice = match bracket.max {
                Some(max) => min(max - bracket.min, above_min),
                None => above_min,
            };
            percent_of(slice, bracket.rate)
        })
        .sum()
}

/// Checks that a schedule covers `[0, ∞)` with contiguous, non-overlapping
/// bands and percentage rates.
pub fn validate_schedule(brackets: &[TaxBracket]) -> Result<(), BracketScheduleError> {
    let first = brackets.first().ok_or(BracketScheduleError::Empty)?;
    if !first.min.is_zero() {
        return Err(BracketScheduleError::DoesNotStartAtZero(first.min));
    }

    let last_index = brackets.len() - 1;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
            return Err(BracketScheduleError::InvalidRate {
                index,
                rate: bracket.rate,
            });
        }

        match (bracket.max, brackets.get(index + 1)) {
            (Some(max), Some(next)) if next.min != max => {
                return Err(BracketScheduleError::NotContiguous {
                    index: index + 1,
                    expected: max,
                    found: next.min,
                });
            }
            (None, Some(_)) => return Err(BracketScheduleError::UnboundedBeforeEnd(index)),
            (Some(_), None) if index == last_index => {
                return Err(BracketScheduleError::BoundedFinalBand);
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::rules;

    fn two_band_schedule() -> Vec<TaxBracket> {
        vec![
            TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(10)),
            TaxBracket::new(dec!(10000), None, dec!(20)),
        ]
    }

    #[test]
    fn zero_income_is_zero_tax() {
        assert_eq!(evaluate_bracket_tax(Decimal::ZERO, &two_band_schedule()), Decimal::ZERO);
    }

    #[test]
    fn negative_income_is_zero_tax() {
        assert_eq!(evaluate_bracket_tax(dec!(-500), &two_band_schedule()), Decimal::ZERO);
    }

    #[test]
    fn income_within_first_band_uses_first_rate() {
        assert_eq!(evaluate_bracket_tax(dec!(7500), &two_band_schedule()), dec!(750));
    }

    #[test]
    fn income_at_band_edge_fills_only_lower_band() {
        assert_eq!(evaluate_bracket_tax(dec!(10000), &two_band_schedule()), dec!(1000));
    }

    #[test]
    fn income_across_bands_is_marginal() {
        assert_eq!(evaluate_bracket_tax(dec!(25000), &two_band_schedule()), dec!(4000));
    }

    #[test]
    fn empty_schedule_is_zero_tax() {
        assert_eq!(evaluate_bracket_tax(dec!(25000), &[]), Decimal::ZERO);
    }

    #[test]
    fn tax_is_monotonic_in_income() {
        let schedule = &rules::india::NEW_REGIME_SLABS;
        let mut previous = Decimal::ZERO;

        for step in 0..200 {
            let income = Decimal::from(step * 12_500);
            let tax = evaluate_bracket_tax(income, schedule);
            assert!(tax >= previous, "tax fell at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn us_schedule_matches_published_base_tax() {
        // Base tax for the 24% band starts at 17,651.
        let tax = evaluate_bracket_tax(dec!(103350), &rules::united_states::FEDERAL_BRACKETS);

        assert_eq!(tax, dec!(17651));
    }

    #[test]
    fn validate_accepts_every_built_in_schedule() {
        let custom = two_band_schedule();
        let schedules: [&[TaxBracket]; 10] = [
            &rules::india::NEW_REGIME_SLABS,
            &rules::india::OLD_REGIME_SLABS,
            &rules::united_states::FEDERAL_BRACKETS,
            &rules::united_kingdom::INCOME_TAX_BANDS,
            &rules::united_kingdom::NATIONAL_INSURANCE_BANDS,
            &rules::canada::FEDERAL_BRACKETS,
            &rules::australia::RESIDENT_BRACKETS,
            &rules::singapore::RESIDENT_BRACKETS,
            &rules::germany::INCOME_TAX_BRACKETS,
            &custom,
        ];

        for schedule in schedules {
            assert_eq!(validate_schedule(schedule), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_empty_schedule() {
        assert_eq!(validate_schedule(&[]), Err(BracketScheduleError::Empty));
    }

    #[test]
    fn validate_rejects_gap_between_bands() {
        let schedule = [
            TaxBracket::new(dec!(0), Some(dec!(100)), dec!(10)),
            TaxBracket::new(dec!(150), None, dec!(20)),
        ];

        assert_eq!(
            validate_schedule(&schedule),
            Err(BracketScheduleError::NotContiguous {
                index: 1,
                expected: dec!(100),
                found: dec!(150),
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_final_band() {
        let schedule = [TaxBracket::new(dec!(0), Some(dec!(100)), dec!(10))];

        assert_eq!(validate_schedule(&schedule), Err(BracketScheduleError::BoundedFinalBand));
    }

    #[test]
    fn validate_rejects_rate_above_one_hundred() {
        let schedule = [TaxBracket::new(dec!(0), None, dec!(150))];

        assert_eq!(
            validate_schedule(&schedule),
            Err(BracketScheduleError::InvalidRate {
                index: 0,
                rate: dec!(150),
            })
        );
    }
}
