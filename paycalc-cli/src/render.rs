//! Plain-text rendering of calculator results.
//!
//! `--json` output bypasses this module and serializes the result types
//! directly.

use std::fmt::Write;

use paycalc_core::{
    AmortizationRow, ComponentKind, Conversion, GrowthResult, HikeResult, LoanResult, PayRates,
    PppResult, SalaryBreakdown, TakeHome, WithdrawalResult,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::utils::format_amount;

const LABEL_WIDTH: usize = 32;

/// Income tax for one request, as printed by `paycalc tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSummary {
    pub country_code: String,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub currency_code: String,
    pub currency_symbol: String,
}

/// One row of `paycalc countries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryListing {
    pub code: &'static str,
    pub name: &'static str,
    pub currency_code: &'static str,
    pub currency_symbol: &'static str,
    pub salary_rules: bool,
    pub cities: Vec<&'static str>,
}

fn line(
    out: &mut String,
    label: &str,
    value: impl std::fmt::Display,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value:>18}");
}

fn money(
    symbol: &str,
    amount: Decimal,
) -> String {
    format!("{symbol}{}", format_amount(amount))
}

pub fn breakdown(breakdown: &SalaryBreakdown) -> String {
    let symbol = breakdown.currency_symbol.as_str();
    let mut out = String::new();

    for kind in [ComponentKind::Earning, ComponentKind::Deduction] {
        for (component, amount) in breakdown
            .components
            .iter()
            .filter(|(component, _)| component.kind() == kind)
        {
            line(&mut out, component.label(), money(symbol, *amount));
        }
        let _ = writeln!(out);
        match kind {
            ComponentKind::Earning => line(&mut out, "Gross pay", money(symbol, breakdown.gross_pay)),
            ComponentKind::Deduction => line(
                &mut out,
                "Total deductions",
                money(symbol, breakdown.total_deductions),
            ),
        }
    }

    line(&mut out, "Net pay", money(symbol, breakdown.net_pay));
    line(&mut out, "Monthly", money(symbol, breakdown.monthly_pay));
    out
}

pub fn tax(summary: &TaxSummary) -> String {
    let symbol = summary.currency_symbol.as_str();
    let mut out = String::new();
    line(&mut out, "Taxable income", money(symbol, summary.taxable_income));
    line(&mut out, "Income tax", money(symbol, summary.income_tax));
    out
}

pub fn take_home(result: &TakeHome) -> String {
    let symbol = result.breakdown.currency_symbol.as_str();
    let mut out = breakdown(&result.breakdown);
    let _ = writeln!(out);
    line(&mut out, "Income tax", money(symbol, result.income_tax));
    line(&mut out, "Annual take-home", money(symbol, result.annual_take_home));
    line(&mut out, "Monthly take-home", money(symbol, result.monthly_take_home));
    out
}

pub fn loan(result: &LoanResult) -> String {
    let mut out = String::new();
    line(&mut out, "Monthly payment", format_amount(result.monthly_payment));
    line(&mut out, "Total payment", format_amount(result.total_payment));
    line(&mut out, "Total interest", format_amount(result.total_interest));
    out
}

pub fn schedule(rows: &[AmortizationRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>14} {:>14} {:>14} {:>16}",
        "Month", "Payment", "Principal", "Interest", "Balance"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>5} {:>14} {:>14} {:>14} {:>16}",
            row.month,
            format_amount(row.payment),
            format_amount(row.principal),
            format_amount(row.interest),
            format_amount(row.balance),
        );
    }
    out
}

pub fn growth(result: &GrowthResult) -> String {
    let mut out = String::new();
    line(&mut out, "Invested", format_amount(result.invested));
    line(&mut out, "Estimated returns", format_amount(result.estimated_returns));
    line(&mut out, "Maturity value", format_amount(result.maturity_value));
    out
}

pub fn withdrawal(result: &WithdrawalResult) -> String {
    let mut out = String::new();
    line(&mut out, "Periods", result.periods);
    line(&mut out, "Total withdrawn", format_amount(result.total_withdrawn));
    line(&mut out, "Final balance", format_amount(result.final_balance));
    if let Some(period) = result.depleted_in_period {
        line(&mut out, "Depleted in period", period);
    }
    out
}

pub fn ppp(result: &PppResult) -> String {
    let mut out = String::new();
    line(&mut out, "Original amount", format_amount(result.original_amount));
    line(&mut out, "PPP factor", result.ppp_factor.round_dp(4));
    line(
        &mut out,
        "Cost-of-living factor",
        result.cost_of_living_factor.round_dp(4),
    );
    line(&mut out, "Equivalent amount", format_amount(result.converted_amount));
    out
}

pub fn conversion(result: &Conversion) -> String {
    format!(
        "{} {} = {} {} (1 {} = {} {})\n",
        format_amount(result.amount),
        result.from_currency,
        format_amount(result.converted),
        result.to_currency,
        result.from_currency,
        result.rate.round_dp(6).normalize(),
        result.to_currency,
    )
}

pub fn hike(result: &HikeResult) -> String {
    let mut out = String::new();
    line(&mut out, "Current salary", format_amount(result.current_salary));
    line(&mut out, "Hike", format!("{}%", result.hike_percent.normalize()));
    line(&mut out, "Increment", format_amount(result.increment));
    line(&mut out, "New salary", format_amount(result.new_salary));
    line(&mut out, "New monthly salary", format_amount(result.new_monthly_salary));
    out
}

pub fn pay_rates(rates: &PayRates) -> String {
    let mut out = String::new();
    line(&mut out, "Hourly", format_amount(rates.hourly));
    line(&mut out, "Daily", format_amount(rates.daily));
    line(&mut out, "Weekly", format_amount(rates.weekly));
    line(&mut out, "Monthly", format_amount(rates.monthly));
    line(&mut out, "Annual", format_amount(rates.annual));
    out
}

pub fn countries(listings: &[CountryListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        let rules = if listing.salary_rules { "salary, tax" } else { "ppp only" };
        let _ = writeln!(
            out,
            "{:<4}{:<22}{:<5}{:<13}{}",
            listing.code,
            listing.name,
            listing.currency_code,
            rules,
            listing.cities.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn loan_lines_are_aligned() {
        let text = loan(&LoanResult {
            monthly_payment: dec!(447.43),
            total_payment: dec!(26845.80),
            total_interest: dec!(2845.80),
        });

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Monthly payment"));
        assert!(lines[0].ends_with("447.43"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn withdrawal_mentions_depletion_only_when_it_happens() {
        let mut result = WithdrawalResult {
            total_withdrawn: dec!(6000),
            final_balance: Decimal::ZERO,
            periods: 6,
            depleted_in_period: None,
        };
        assert!(!withdrawal(&result).contains("Depleted"));

        result.depleted_in_period = Some(3);
        assert!(withdrawal(&result).contains("Depleted in period"));
    }

    #[test]
    fn conversion_reads_as_a_sentence() {
        let text = conversion(&Conversion {
            amount: dec!(1000),
            from_currency: "USD".to_string(),
            to_currency: "INR".to_string(),
            rate: dec!(83.50),
            converted: dec!(83500),
        });

        assert_eq!(text, "1,000.00 USD = 83,500.00 INR (1 USD = 83.5 INR)\n");
    }
}
