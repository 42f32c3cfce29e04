use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How many times a year interest is credited (or a withdrawal is taken).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingFrequency {
    #[default]
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl CompoundingFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::HalfYearly => 2,
            Self::Yearly => 1,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "half-yearly" | "semi-annual" => Some(Self::HalfYearly),
            "yearly" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

/// Outcome of a lumpsum, SIP or fixed-deposit projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthResult {
    /// Total amount put in by the investor.
    pub invested: Decimal,
    pub maturity_value: Decimal,
    /// `maturity_value - invested`.
    pub estimated_returns: Decimal,
}

/// Outcome of a systematic withdrawal plan simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalResult {
    pub total_withdrawn: Decimal,
    /// Balance after the last period, floored at zero.
    pub final_balance: Decimal,
    pub periods: u32,
    /// First period (1-based) after which the balance was zero or negative.
    pub depleted_in_period: Option<u32>,
}
