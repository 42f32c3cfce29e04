use rust_decimal::Decimal;

use super::{CountryRules, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::{min, percent_of};
use crate::models::{CountryCode, SalaryBreakdown, SalaryComponent, TaxCalculationRequest};
use crate::rules::{self, canada::*};

#[derive(Debug, Clone, Copy, Default)]
pub struct Canada;

impl Canada {
    pub fn provincial_tax_percent(province: Option<&str>) -> Decimal {
        rules::regional_rate(
            &PROVINCIAL_TAX_PERCENT,
            province,
            BASELINE_PROVINCIAL_TAX_PERCENT,
        )
    }
}

impl CountryRules for Canada {
    fn country(&self) -> CountryCode {
        CountryCode::Canada
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
                    SalaryComponent::CanadaPensionPlan,
                    min(percent_of(gross_annual_ctc, CPP_PERCENT), CPP_MAX_CONTRIBUTION),
                ),
                (
                    SalaryComponent::EmploymentInsurance,
                    min(percent_of(gross_annual_ctc, EI_PERCENT), EI_MAX_PREMIUM),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let taxable_income = taxable_after(request.annual_taxable_income, Decimal::ZERO);
        let provincial = percent_of(
            taxable_income,
            Self::provincial_tax_percent(request.region_name.as_deref()),
        );

        evaluate_bracket_tax(taxable_income, &FEDERAL_BRACKETS) + provincial
    }
}
