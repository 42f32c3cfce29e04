//! End-to-end scenarios across the salary, tax, loan and growth calculators.

use paycalc_core::calculations::{
    amortization_schedule, amortize, car_loan, compute_income_tax, convert_by_ppp,
    decompose_salary, lumpsum, take_home,
};
use paycalc_core::{CountryCode, SalaryComponent, TaxCalculationRequest, TaxRegime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn within_one_percent(
    actual: Decimal,
    expected: Decimal,
) -> bool {
    (actual - expected).abs() <= expected.abs() / dec!(100)
}

#[test]
fn test_net_plus_deductions_equals_gross_for_every_country() {
    let codes = CountryCode::ALL
        .iter()
        .map(|code| code.as_str().to_string())
        .chain(["ZZ".to_string(), String::new()]);

    for code in codes {
        for ctc in [dec!(0), dec!(12000), dec!(85000.55), dec!(1500000), dec!(9999999)] {
            let breakdown = decompose_salary(ctc, &code, None);
            assert_eq!(
                breakdown.net_pay + breakdown.total_deductions,
                breakdown.gross_pay,
                "country {code:?} at {ctc}"
            );
        }
    }
}

#[test]
fn test_identical_inputs_give_identical_outputs() {
    let request = TaxCalculationRequest::new(dec!(98000), "CA").with_region("Ontario");

    assert_eq!(
        decompose_salary(dec!(98000), "CA", Some("Ontario")),
        decompose_salary(dec!(98000), "CA", Some("Ontario"))
    );
    assert_eq!(compute_income_tax(&request), compute_income_tax(&request));
}

#[test]
fn test_india_new_regime_scenario() {
    let breakdown = decompose_salary(dec!(1500000), "IN", None);

    assert_eq!(breakdown.basic_pay, dec!(750000));
    assert_eq!(breakdown.component(SalaryComponent::HouseRentAllowance), dec!(375000));
    assert_eq!(breakdown.component(SalaryComponent::SpecialAllowance), dec!(450000));
    assert_eq!(breakdown.gross_pay, dec!(1575000));
    assert_eq!(breakdown.component(SalaryComponent::EmployeeProvidentFund), dec!(90000));
    assert_eq!(breakdown.component(SalaryComponent::ProfessionalTax), dec!(2400));
    assert_eq!(breakdown.net_pay, dec!(1482600));
    assert_eq!(breakdown.currency_symbol, "₹");

    let request =
        TaxCalculationRequest::new(breakdown.gross_pay, "IN").with_regime(TaxRegime::New);
    assert_eq!(compute_income_tax(&request), dec!(179400));
}

#[test]
fn test_take_home_combines_breakdown_and_tax() {
    let template = TaxCalculationRequest::new(Decimal::ZERO, "US").with_region("Texas");

    let result = take_home(dec!(100000), &template);

    assert_eq!(
        result.annual_take_home,
        result.breakdown.net_pay - result.income_tax
    );
}

#[test]
fn test_car_loan_scenario() {
    let from_price = car_loan(dec!(30000), dec!(6000), dec!(4.5), dec!(5)).unwrap();
    let direct = amortize(dec!(24000), dec!(4.5), dec!(5)).unwrap();

    assert_eq!(from_price, direct);
    assert!(within_one_percent(direct.monthly_payment, dec!(447.67)));
    assert!(within_one_percent(direct.total_payment, dec!(26860)));
    assert_eq!(direct.total_payment, direct.monthly_payment * dec!(60));
    assert_eq!(direct.total_interest, direct.total_payment - dec!(24000));
}

#[test]
fn test_schedule_matches_loan_summary() {
    let summary = amortize(dec!(24000), dec!(4.5), dec!(5)).unwrap();
    let rows = amortization_schedule(dec!(24000), dec!(4.5), dec!(5)).unwrap();

    let principal_paid: Decimal = rows.iter().map(|row| row.principal).sum();
    let total_paid: Decimal = rows.iter().map(|row| row.payment).sum();

    assert_eq!(rows.len(), 60);
    assert_eq!(principal_paid, dec!(24000));
    assert!(within_one_percent(total_paid, summary.total_payment));
    assert_eq!(rows.last().map(|row| row.balance), Some(Decimal::ZERO));
}

#[test]
fn test_lumpsum_scenario() {
    let result = lumpsum(dec!(100000), dec!(12), dec!(10)).unwrap();

    assert_eq!(result.maturity_value, dec!(310584.82));
}

#[test]
fn test_ppp_round_trip() {
    let there = convert_by_ppp(
        dec!(85000),
        CountryCode::UnitedKingdom,
        "Manchester",
        CountryCode::Singapore,
        "Singapore",
    )
    .unwrap();
    let back = convert_by_ppp(
        there.converted_amount,
        CountryCode::Singapore,
        "Singapore",
        CountryCode::UnitedKingdom,
        "Manchester",
    )
    .unwrap();

    assert_eq!(back.converted_amount.round_dp(2), dec!(85000));
}
