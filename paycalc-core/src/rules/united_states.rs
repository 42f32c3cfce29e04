use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

/// Federal brackets for a single filer.
pub static FEDERAL_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(0), Some(dec!(11925)), dec!(10)),
    TaxBracket::new(dec!(11925), Some(dec!(48475)), dec!(12)),
    TaxBracket::new(dec!(48475), Some(dec!(103350)), dec!(22)),
    TaxBracket::new(dec!(103350), Some(dec!(197300)), dec!(24)),
    TaxBracket::new(dec!(197300), Some(dec!(250525)), dec!(32)),
    TaxBracket::new(dec!(250525), Some(dec!(626350)), dec!(35)),
    TaxBracket::new(dec!(626350), None, dec!(37)),
];

pub const STANDARD_DEDUCTION: Decimal = dec!(15000);

pub const SOCIAL_SECURITY_PERCENT: Decimal = dec!(6.2);
pub const SOCIAL_SECURITY_WAGE_BASE: Decimal = dec!(176100);
pub const MEDICARE_PERCENT: Decimal = dec!(1.45);

/// Assumed employee 401(k) deferral.
pub const ASSUMED_401K_PERCENT: Decimal = dec!(5);
pub const ELECTIVE_DEFERRAL_LIMIT: Decimal = dec!(23500);

/// Flat approximation of state income tax for states without a named entry.
pub const BASELINE_STATE_TAX_PERCENT: Decimal = dec!(5);

pub const STATE_TAX_PERCENT: [(&str, Decimal); 12] = [
    ("Alaska", dec!(0)),
    ("California", dec!(8)),
    ("Florida", dec!(0)),
    ("Illinois", dec!(4.95)),
    ("Massachusetts", dec!(5)),
    ("Nevada", dec!(0)),
    ("New Jersey", dec!(5.5)),
    ("New York", dec!(6.5)),
    ("Pennsylvania", dec!(3.07)),
    ("Tennessee", dec!(0)),
    ("Texas", dec!(0)),
    ("Washington", dec!(0)),
];
