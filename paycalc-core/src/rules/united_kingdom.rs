use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

/// Income tax bands (England, Wales and Northern Ireland). The first band is
/// the personal allowance.
pub static INCOME_TAX_BANDS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(0), Some(dec!(12570)), dec!(0)),
    TaxBracket::new(dec!(12570), Some(dec!(50270)), dec!(20)),
    TaxBracket::new(dec!(50270), Some(dec!(125140)), dec!(40)),
    TaxBracket::new(dec!(125140), None, dec!(45)),
];

/// Class 1 employee National Insurance on annual earnings.
pub static NATIONAL_INSURANCE_BANDS: [TaxBracket; 3] = [
    TaxBracket::new(dec!(0), Some(dec!(12570)), dec!(0)),
    TaxBracket::new(dec!(12570), Some(dec!(50270)), dec!(8)),
    TaxBracket::new(dec!(50270), None, dec!(2)),
];

/// Assumed workplace pension contribution.
pub const ASSUMED_PENSION_PERCENT: Decimal = dec!(5);
