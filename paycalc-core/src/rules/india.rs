use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::TaxBracket;

pub const BASIC_PERCENT_OF_CTC: Decimal = dec!(50);
pub const HRA_PERCENT_OF_BASIC: Decimal = dec!(50);
pub const SPECIAL_ALLOWANCE_PERCENT_OF_CTC: Decimal = dec!(30);

/// Employee provident fund contribution, as a percentage of basic pay.
pub const EPF_PERCENT_OF_BASIC: Decimal = dec!(12);
pub const PROFESSIONAL_TAX_PER_MONTH: Decimal = dec!(200);

/// Health and education cess, levied on the computed tax.
pub const CESS_PERCENT: Decimal = dec!(4);

// Old-regime deduction caps.
pub const INVESTMENT_CAP: Decimal = dec!(150000);
pub const HEALTH_INSURANCE_CAP: Decimal = dec!(25000);
pub const HOME_LOAN_INTEREST_CAP: Decimal = dec!(200000);
pub const RETIREMENT_SCHEME_CAP: Decimal = dec!(50000);

pub static NEW_REGIME_SLABS: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0), Some(dec!(300000)), dec!(0)),
    TaxBracket::new(dec!(300000), Some(dec!(600000)), dec!(5)),
    TaxBracket::new(dec!(600000), Some(dec!(900000)), dec!(10)),
    TaxBracket::new(dec!(900000), Some(dec!(1200000)), dec!(15)),
    TaxBracket::new(dec!(1200000), Some(dec!(1500000)), dec!(20)),
    TaxBracket::new(dec!(1500000), None, dec!(30)),
];

pub static OLD_REGIME_SLABS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(0), Some(dec!(250000)), dec!(0)),
    TaxBracket::new(dec!(250000), Some(dec!(500000)), dec!(5)),
    TaxBracket::new(dec!(500000), Some(dec!(1000000)), dec!(20)),
    TaxBracket::new(dec!(1000000), None, dec!(30)),
];
