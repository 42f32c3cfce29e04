use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SalaryBreakdown;

/// Salary after a percentage raise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HikeResult {
    pub current_salary: Decimal,
    pub new_salary: Decimal,
    pub increment: Decimal,
    pub hike_percent: Decimal,
    pub new_monthly_salary: Decimal,
}

/// The same pay expressed per hour, day, week, month and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    pub hourly: Decimal,
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub annual: Decimal,
}

/// Statutory breakdown combined with income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeHome {
    pub breakdown: SalaryBreakdown,
    pub income_tax: Decimal,
    pub annual_take_home: Decimal,
    pub monthly_take_home: Decimal,
}
