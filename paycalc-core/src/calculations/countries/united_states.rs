use rust_decimal::Decimal;
use tracing::debug;

use super::{CountryRules, capped, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::{min, percent_of};
use crate::models::{
    CountryCode, DeductionCategory, SalaryBreakdown, SalaryComponent, TaxCalculationRequest,
};
use crate::rules::{self, united_states::*};

/// FICA and an assumed 401(k) deferral withheld from gross pay. Federal
/// brackets after the standard deduction, plus a flat state-tax
/// approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl UnitedStates {
    /// Flat state income tax percentage for a state name.
    pub fn state_tax_percent(state: Option<&str>) -> Decimal {
        rules::regional_rate(&STATE_TAX_PERCENT, state, BASELINE_STATE_TAX_PERCENT)
    }
}

impl CountryRules for UnitedStates {
    fn country(&self) -> CountryCode {
        CountryCode::UnitedStates
    }

    fn decompose_salary(
        &self,
        gross_annual_ctc: Decimal,
        _region: Option<&str>,
    ) -> SalaryBreakdown {
        let social_security = percent_of(
            min(gross_annual_ctc, SOCIAL_SECURITY_WAGE_BASE),
            SOCIAL_SECURITY_PERCENT,
        );
        let medicare = percent_of(gross_annual_ctc, MEDICARE_PERCENT);
        let retirement = min(
            percent_of(gross_annual_ctc, ASSUMED_401K_PERCENT),
            ELECTIVE_DEFERRAL_LIMIT,
        );

        SalaryBreakdown::from_components(
            &self.country().profile(),
            [
                (SalaryComponent::BasicPay, gross_annual_ctc),
                (SalaryComponent::SocialSecurity, social_security),
                (SalaryComponent::Medicare, medicare),
                (SalaryComponent::Retirement401k, retirement),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let retirement = capped(
            request.deduction(DeductionCategory::RetirementContribution),
            ELECTIVE_DEFERRAL_LIMIT,
        );
        let taxable_income = taxable_after(
            request.annual_taxable_income,
            STANDARD_DEDUCTION + retirement,
        );

        let state_percent = Self::state_tax_percent(request.region_name.as_deref());
        debug!(%taxable_income, %state_percent, "assessing US income tax");

        evaluate_bracket_tax(taxable_income, &FEDERAL_BRACKETS)
            + percent_of(taxable_income, state_percent)
    }
}
