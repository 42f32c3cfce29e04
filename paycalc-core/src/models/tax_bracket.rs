use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal band of a slab schedule.
///
/// `rate` is a percentage (0-100) applied to the slice of income between
/// `min` and `max`. The final band of a schedule has `max` set to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        min: Decimal,
        max: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self { min, max, rate }
    }
}
