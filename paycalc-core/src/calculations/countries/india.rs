use rust_decimal::Decimal;

use super::{CountryRules, capped, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::percent_of;
use crate::models::{
    CountryCode, DeductionCategory, SalaryBreakdown, SalaryComponent, TaxCalculationRequest,
    TaxRegime,
};
use crate::rules::india::*;

/// CTC split into basic, HRA and special allowance, with EPF and
/// professional tax withheld. Income tax under the old or new regime plus
/// cess.
#[derive(Debug, Clone, Copy, Default)]
pub struct India;

impl India {
    /// Sum of the elected old-regime deductions, each limited to its cap.
    pub fn old_regime_deductions(request: &TaxCalculationRequest) -> Decimal {
        [
            (DeductionCategory::Investment, INVESTMENT_CAP),
            (DeductionCategory::HealthInsurance, HEALTH_INSURANCE_CAP),
            (DeductionCategory::HomeLoanInterest, HOME_LOAN_INTEREST_CAP),
            (DeductionCategory::RetirementScheme, RETIREMENT_SCHEME_CAP),
        ]
        .into_iter()
        .map(|(category, cap)| capped(request.deduction(category), cap))
        .sum()
    }
}

impl CountryRules for India {
    fn country(&self) -> CountryCode {
        CountryCode::India
    }

    fn decompose_salary(
        &self,
        gross_annual_ctc: Decimal,
        _region: Option<&str>,
    ) -> SalaryBreakdown {
        let basic = percent_of(gross_annual_ctc, BASIC_PERCENT_OF_CTC);
        let hra = percent_of(basic, HRA_PERCENT_OF_BASIC);
        let special_allowance = percent_of(gross_annual_ctc, SPECIAL_ALLOWANCE_PERCENT_OF_CTC);

        SalaryBreakdown::from_components(
            &self.country().profile(),
            [
                (SalaryComponent::BasicPay, basic),
                (SalaryComponent::HouseRentAllowance, hra),
                (SalaryComponent::SpecialAllowance, special_allowance),
                (
                    SalaryComponent::EmployeeProvidentFund,
                    percent_of(basic, EPF_PERCENT_OF_BASIC),
                ),
                (
                    SalaryComponent::ProfessionalTax,
                    PROFESSIONAL_TAX_PER_MONTH * Decimal::from(12),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let (taxable_income, slabs) = match request.regime() {
            TaxRegime::Old => (
                taxable_after(request.annual_taxable_income, Self::old_regime_deductions(request)),
                &OLD_REGIME_SLABS[..],
            ),
            TaxRegime::New => (
                taxable_after(request.annual_taxable_income, Decimal::ZERO),
                &NEW_REGIME_SLABS[..],
            ),
        };

        let tax = evaluate_bracket_tax(taxable_income, slabs);
        tax + percent_of(tax, CESS_PERCENT)
    }
}
