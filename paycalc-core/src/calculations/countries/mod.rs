//! Per-country salary decomposition and income tax rules.
//!
//! Each supported country is a unit struct implementing [`CountryRules`].
//! [`CountryCode::rules`] is the dispatch table: an exhaustive match from
//! country to its rules, with `None` for countries that are only known to
//! the currency and purchasing-power calculators.

mod australia;
mod canada;
mod germany;
mod india;
mod singapore;
mod united_kingdom;
mod united_states;

pub use australia::Australia;
pub use canada::Canada;
pub use germany::Germany;
pub use india::India;
pub use singapore::Singapore;
pub use united_kingdom::UnitedKingdom;
pub use united_states::UnitedStates;

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_to_unit};
use crate::models::{CountryCode, SalaryBreakdown, TaxCalculationRequest};

/// Salary and income tax rules for one country.
pub trait CountryRules: Send + Sync {
    fn country(&self) -> CountryCode;

    /// Splits a gross annual compensation into pay components and statutory
    /// deductions. Income tax is not included.
    fn decompose_salary(
        &self,
        gross_annual_ctc: Decimal,
        region: Option<&str>,
    ) -> SalaryBreakdown;

    /// Income tax including any surcharge, cess or levy, before rounding.
    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal;

    /// Income tax rounded to the nearest whole currency unit.
    fn income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        round_to_unit(max(self.assess_income_tax(request), Decimal::ZERO))
    }
}

impl CountryCode {
    /// Rules for this country, if it has a salary/tax model.
    pub fn rules(&self) -> Option<&'static dyn CountryRules> {
        match self {
            Self::India => Some(&India),
            Self::UnitedStates => Some(&UnitedStates),
            Self::UnitedKingdom => Some(&UnitedKingdom),
            Self::Canada => Some(&Canada),
            Self::Australia => Some(&Australia),
            Self::Singapore => Some(&Singapore),
            Self::Germany => Some(&Germany),
            Self::Japan | Self::UnitedArabEmirates | Self::France | Self::Netherlands => None,
        }
    }

    /// Countries that have salary and income tax rules.
    pub fn with_tax_rules() -> impl Iterator<Item = CountryCode> {
        Self::ALL.into_iter().filter(|code| code.rules().is_some())
    }
}

/// Taxable income after subtracting `deductions`, clamped at zero.
pub(crate) fn taxable_after(
    income: Decimal,
    deductions: Decimal,
) -> Decimal {
    max(income - deductions, Decimal::ZERO)
}

/// An elected amount clamped to `[0, cap]`.
pub(crate) fn capped(
    elected: Decimal,
    cap: Decimal,
) -> Decimal {
    max(elected, Decimal::ZERO).min(cap)
}
