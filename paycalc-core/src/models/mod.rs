mod country;
mod growth;
mod loan;
mod pay;
mod ppp;
mod rate_table;
mod salary_breakdown;
mod tax_bracket;
mod tax_request;

pub use country::{CountryCode, CountryProfile};
pub use growth::{CompoundingFrequency, GrowthResult, WithdrawalResult};
pub use loan::{AmortizationRow, LoanResult};
pub use pay::{HikeResult, PayRates, TakeHome};
pub use ppp::PppResult;
pub use rate_table::{Conversion, RateTable};
pub use salary_breakdown::{ComponentKind, SalaryBreakdown, SalaryComponent};
pub use tax_bracket::TaxBracket;
pub use tax_request::{DeductionCategory, TaxCalculationRequest, TaxRegime};
