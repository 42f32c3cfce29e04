use rust_decimal::Decimal;

use super::{CountryRules, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::{min, percent_of};
use crate::models::{CountryCode, SalaryBreakdown, SalaryComponent, TaxCalculationRequest};
use crate::rules::singapore::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Singapore;

impl CountryRules for Singapore {
    fn country(&self) -> CountryCode {
        CountryCode::Singapore
    }

    fn decompose_salary(
        &self,
        gross_annual_ctc: Decimal,
        _region: Option<&str>,
    ) -> SalaryBreakdown {
        let cpf_wages = min(gross_annual_ctc, CPF_ANNUAL_WAGE_CEILING);

        SalaryBreakdown::from_components(
            &self.country().profile(),
            [
                (SalaryComponent::BasicPay, gross_annual_ctc),
                (
                    SalaryComponent::CentralProvidentFund,
                    percent_of(cpf_wages, CPF_EMPLOYEE_PERCENT),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        evaluate_bracket_tax(
            taxable_after(request.annual_taxable_income, Decimal::ZERO),
            &RESIDENT_BRACKETS,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn cpf_is_charged_up_to_wage_ceiling() {
        let low = Singapore.decompose_salary(dec!(60000), None);
        let high = Singapore.decompose_salary(dec!(200000), None);

        assert_eq!(low.component(SalaryComponent::CentralProvidentFund), dec!(12000));
        assert_eq!(high.component(SalaryComponent::CentralProvidentFund), dec!(16320));
    }

    #[test]
    fn income_tax_is_pure_brackets() {
        let request = TaxCalculationRequest::new(dec!(100000), "SG");

        // 200 + 350 + 2,800 + 2,300.
        assert_eq!(Singapore.income_tax(&request), dec!(5650));
    }
}
