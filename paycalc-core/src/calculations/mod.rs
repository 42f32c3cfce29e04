//! Salary, tax and personal-finance calculators.
//!
//! Country-specific rules live under [`countries`]; everything else here is
//! country-independent arithmetic over [`rust_decimal::Decimal`].

pub mod bracket;
pub mod common;
pub mod countries;
pub mod currency;
pub mod error;
pub mod growth;
pub mod loan;
pub mod pay;
pub mod ppp;
pub mod salary;

pub use bracket::{BracketScheduleError, evaluate_bracket_tax, validate_schedule};
pub use countries::{
    Australia, Canada, CountryRules, Germany, India, Singapore, UnitedKingdom, UnitedStates,
};
pub use currency::{CurrencyError, convert_currency};
pub use error::CalculatorError;
pub use growth::{fixed_deposit, lumpsum, sip, systematic_withdrawal};
pub use loan::{amortization_schedule, amortize, car_loan};
pub use pay::{
    DEFAULT_HOURS_PER_WEEK, DEFAULT_WEEKS_PER_YEAR, annual_from_hourly, hike_percentage,
    pay_rates, salary_hike, salary_hike_between,
};
pub use ppp::{cities, convert_by_ppp};
pub use salary::{compute_income_tax, decompose_salary, take_home};
