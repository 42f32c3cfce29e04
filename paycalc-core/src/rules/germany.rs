use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

/// Step approximation of the progressive income tax formula.
pub static INCOME_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(dec!(0), Some(dec!(11604)), dec!(0)),
    TaxBracket::new(dec!(11604), Some(dec!(17005)), dec!(14)),
    TaxBracket::new(dec!(17005), Some(dec!(66760)), dec!(24)),
    TaxBracket::new(dec!(66760), Some(dec!(277825)), dec!(42)),
    TaxBracket::new(dec!(277825), None, dec!(45)),
];

/// Employee share of pension, health, unemployment and care insurance.
pub const SOCIAL_SECURITY_PERCENT: Decimal = dec!(20);

/// Solidarity surcharge, charged on the computed income tax.
pub const SOLIDARITY_SURCHARGE_PERCENT: Decimal = dec!(5.5);
