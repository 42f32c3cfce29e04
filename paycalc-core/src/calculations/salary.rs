//! Country-selected entry points for salary decomposition and income tax.
//!
//! The country arrives as the raw selector string from the caller. An
//! unknown code, or a country without salary rules, yields a zero-valued
//! result instead of an error so that an unselected or unsupported country
//! never blocks the caller.
//!
//! Amounts are clamped to [`MAX_SALARY_AMOUNT`] before the country rules see
//! them, so both entry points return a value for every input.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycalc_core::calculations::{compute_income_tax, decompose_salary};
//! use paycalc_core::{TaxCalculationRequest, TaxRegime};
//!
//! let breakdown = decompose_salary(dec!(1500000), "IN", None);
//! assert_eq!(breakdown.gross_pay, dec!(1575000));
//!
//! let request = TaxCalculationRequest::new(breakdown.gross_pay, "IN").with_regime(TaxRegime::New);
//! assert_eq!(compute_income_tax(&request), dec!(179400));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{MAX_SALARY_AMOUNT, clamp_salary, max, round_half_up};
use crate::calculations::countries::CountryRules;
use crate::models::{CountryCode, SalaryBreakdown, TakeHome, TaxCalculationRequest};

/// Currency reported on a zeroed breakdown when the country is unknown.
const DEFAULT_CURRENCY: (&str, &str) = ("USD", "$");

fn bounded(amount: Decimal) -> Decimal {
    let clamped = clamp_salary(amount);
    if clamped != amount {
        warn!(%amount, limit = %MAX_SALARY_AMOUNT, "amount outside the supported range, clamping");
    }
    clamped
}

fn rules_for(country_code: &str) -> Result<&'static dyn CountryRules, Option<CountryCode>> {
    let code = CountryCode::parse(country_code).ok_or(None)?;
    code.rules().ok_or(Some(code))
}

/// Splits a gross annual compensation into components for the selected
/// country.
pub fn decompose_salary(
    gross_annual_ctc: Decimal,
    country_code: &str,
    region: Option<&str>,
) -> SalaryBreakdown {
    match rules_for(country_code) {
        Ok(rules) => {
            let gross_annual_ctc = bounded(gross_annual_ctc);
            debug!(country = %rules.country(), %gross_annual_ctc, "decomposing salary");
            rules.decompose_salary(gross_annual_ctc, region)
        }
        Err(Some(code)) => {
            warn!(country = %code, "no salary rules for country, returning zero breakdown");
            let profile = code.profile();
            SalaryBreakdown::zeroed(profile.currency_code, profile.currency_symbol)
        }
        Err(None) => {
            warn!(country_code, "unknown country code, returning zero breakdown");
            SalaryBreakdown::zeroed(DEFAULT_CURRENCY.0, DEFAULT_CURRENCY.1)
        }
    }
}

/// Income tax for the request's country, rounded to whole currency units.
/// Zero for an unknown country.
pub fn compute_income_tax(request: &TaxCalculationRequest) -> Decimal {
    match rules_for(&request.country_code) {
        Ok(rules) => {
            let request = TaxCalculationRequest {
                annual_taxable_income: bounded(request.annual_taxable_income),
                elected_deductions: request
                    .elected_deductions
                    .iter()
                    .map(|(category, amount)| (*category, bounded(*amount)))
                    .collect(),
                ..request.clone()
            };
            rules.income_tax(&request)
        }
        Err(_) => {
            warn!(
                country_code = request.country_code.as_str(),
                "no income tax rules for country, returning zero"
            );
            Decimal::ZERO
        }
    }
}

/// Decomposes `gross_annual_ctc` and taxes the resulting gross pay.
///
/// Country, region, regime and elected deductions are taken from
/// `template`; its `annual_taxable_income` is replaced by the breakdown's
/// gross pay. Take-home pay is floored at zero.
pub fn take_home(
    gross_annual_ctc: Decimal,
    template: &TaxCalculationRequest,
) -> TakeHome {
    let breakdown = decompose_salary(
        gross_annual_ctc,
        &template.country_code,
        template.region_name.as_deref(),
    );

    let request = TaxCalculationRequest {
        annual_taxable_income: breakdown.gross_pay,
        ..template.clone()
    };
    let income_tax = compute_income_tax(&request);

    let annual_take_home = max(breakdown.net_pay - income_tax, Decimal::ZERO);

    TakeHome {
        income_tax,
        annual_take_home,
        monthly_take_home: round_half_up(annual_take_home / Decimal::from(12)),
        breakdown,
    }
}
