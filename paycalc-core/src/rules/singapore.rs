use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

pub static RESIDENT_BRACKETS: [TaxBracket; 13] = [
    TaxBracket::new(dec!(0), Some(dec!(20000)), dec!(0)),
    TaxBracket::new(dec!(20000), Some(dec!(30000)), dec!(2)),
    TaxBracket::new(dec!(30000), Some(dec!(40000)), dec!(3.5)),
    TaxBracket::new(dec!(40000), Some(dec!(80000)), dec!(7)),
    TaxBracket::new(dec!(80000), Some(dec!(120000)), dec!(11.5)),
    TaxBracket::new(dec!(120000), Some(dec!(160000)), dec!(15)),
    TaxBracket::new(dec!(160000), Some(dec!(200000)), dec!(18)),
    TaxBracket::new(dec!(200000), Some(dec!(240000)), dec!(19)),
    TaxBracket::new(dec!(240000), Some(dec!(280000)), dec!(19.5)),
    TaxBracket::new(dec!(280000), Some(dec!(320000)), dec!(20)),
    TaxBracket::new(dec!(320000), Some(dec!(500000)), dec!(22)),
    TaxBracket::new(dec!(500000), Some(dec!(1000000)), dec!(23)),
    TaxBracket::new(dec!(1000000), None, dec!(24)),
];

/// Employee CPF contribution rate.
pub const CPF_EMPLOYEE_PERCENT: Decimal = dec!(20);

/// Ordinary wage ceiling (6,800 a month) on which CPF is charged.
pub const CPF_ANNUAL_WAGE_CEILING: Decimal = dec!(81600);
