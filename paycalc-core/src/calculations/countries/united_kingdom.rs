use rust_decimal::Decimal;

use super::{CountryRules, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::{max, percent_of};
use crate::models::{
    CountryCode, DeductionCategory, SalaryBreakdown, SalaryComponent, TaxCalculationRequest,
};
use crate::rules::united_kingdom::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdom;

impl CountryRules for UnitedKingdom {
    fn country(&self) -> CountryCode {
        CountryCode::UnitedKingdom
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
                    SalaryComponent::NationalInsurance,
                    evaluate_bracket_tax(gross_annual_ctc, &NATIONAL_INSURANCE_BANDS),
                ),
                (
                    SalaryComponent::Pension,
                    percent_of(gross_annual_ctc, ASSUMED_PENSION_PERCENT),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let pension = max(
            request.deduction(DeductionCategory::PensionContribution),
            Decimal::ZERO,
        );
        let taxable_income = taxable_after(request.annual_taxable_income, pension);

        evaluate_bracket_tax(taxable_income, &INCOME_TAX_BANDS)
    }
}
