use rust_decimal::Decimal;

use super::{CountryRules, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::percent_of;
use crate::models::{CountryCode, SalaryBreakdown, SalaryComponent, TaxCalculationRequest};
use crate::rules::australia::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Australia;

impl CountryRules for Australia {
    fn country(&self) -> CountryCode {
        CountryCode::Australia
    }

    fn decompose_salary(
        &self,
        gross_annual_ctc: Decimal,
        _region: Option<&str>,
    ) -> SalaryBreakdown {
        SalaryBreakdown::from_components(
            &self.country().profile(),
            [
                (SalaryComponent::BasicPay, gross_annual_ctc),
                (
                    SalaryComponent::Superannuation,
                    percent_of(gross_annual_ctc, SUPERANNUATION_PERCENT),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let taxable_income = taxable_after(request.annual_taxable_income, Decimal::ZERO);

        evaluate_bracket_tax(taxable_income, &RESIDENT_BRACKETS)
            + percent_of(taxable_income, MEDICARE_LEVY_PERCENT)
    }
}
