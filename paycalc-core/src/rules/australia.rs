use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

pub static RESIDENT_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(dec!(0), Some(dec!(18200)), dec!(0)),
    TaxBracket::new(dec!(18200), Some(dec!(45000)), dec!(16)),
    TaxBracket::new(dec!(45000), Some(dec!(135000)), dec!(30)),
    TaxBracket::new(dec!(135000), Some(dec!(190000)), dec!(37)),
    TaxBracket::new(dec!(190000), None, dec!(45)),
];

pub const SUPERANNUATION_PERCENT: Decimal = dec!(11.5);

/// Medicare levy, charged on taxable income.
pub const MEDICARE_LEVY_PERCENT: Decimal = dec!(2);
