use rust_decimal::Decimal;

use super::{CountryRules, taxable_after};
use crate::calculations::bracket::evaluate_bracket_tax;
use crate::calculations::common::percent_of;
use crate::models::{CountryCode, SalaryBreakdown, SalaryComponent, TaxCalculationRequest};
use crate::rules::germany::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl CountryRules for Germany {
    fn country(&self) -> CountryCode {
        CountryCode::Germany
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
                    SalaryComponent::SocialContributions,
                    percent_of(gross_annual_ctc, SOCIAL_SECURITY_PERCENT),
                ),
            ],
        )
    }

    fn assess_income_tax(
        &self,
        request: &TaxCalculationRequest,
    ) -> Decimal {
        let taxable_income = taxable_after(request.annual_taxable_income, Decimal::ZERO);
        let tax = evaluate_bracket_tax(taxable_income, &INCOME_TAX_BRACKETS);

        tax + percent_of(tax, SOLIDARITY_SURCHARGE_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn decompose_withholds_flat_social_contributions() {
        let breakdown = Germany.decompose_salary(dec!(60000), None);

        assert_eq!(breakdown.component(SalaryComponent::SocialContributions), dec!(12000));
        assert_eq!(breakdown.net_pay, dec!(48000));
        assert_eq!(breakdown.currency_symbol, "€");
    }

    #[test]
    fn income_tax_adds_solidarity_surcharge() {
        let request = TaxCalculationRequest::new(dec!(60000), "DE");

        // 756.14 + 10,318.80 = 11,074.94; plus 5.5% = 11,684.06.
        assert_eq!(Germany.income_tax(&request), dec!(11684));
    }
}
