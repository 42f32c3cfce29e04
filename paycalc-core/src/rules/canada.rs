use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

pub static FEDERAL_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(15)),
    TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(20.5)),
    TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(26)),
    TaxBracket::new(dec!(173205), Some(dec!(246752)), dec!(29)),
    TaxBracket::new(dec!(246752), None, dec!(33)),
];

pub const CPP_PERCENT: Decimal = dec!(5.95);
pub const CPP_MAX_CONTRIBUTION: Decimal = dec!(3867.50);
pub const EI_PERCENT: Decimal = dec!(1.66);
pub const EI_MAX_PREMIUM: Decimal = dec!(1049.12);

/// Flat approximation of provincial income tax when no province matches.
pub const BASELINE_PROVINCIAL_TAX_PERCENT: Decimal = dec!(10);

pub const PROVINCIAL_TAX_PERCENT: [(&str, Decimal); 7] = [
    ("Alberta", dec!(10)),
    ("British Columbia", dec!(7.7)),
    ("Manitoba", dec!(10.8)),
    ("Nova Scotia", dec!(8.79)),
    ("Ontario", dec!(9.15)),
    ("Quebec", dec!(14)),
    ("Saskatchewan", dec!(10.5)),
];
