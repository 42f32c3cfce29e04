use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A salary restated in another country's purchasing power and
/// cost of living. `converted_amount = original_amount × ppp_factor ×
/// cost_of_living_factor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PppResult {
    pub original_amount: Decimal,
    pub converted_amount: Decimal,
    pub ppp_factor: Decimal,
    pub cost_of_living_factor: Decimal,
}
