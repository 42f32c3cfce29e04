use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::{Conversion, RateTable};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("no exchange rate for currency {0}")]
    UnknownCurrency(String),

    #[error("exchange rate for {0} is zero")]
    ZeroRate(String),

    #[error("converting {amount} {currency} overflowed")]
    Overflow { amount: Decimal, currency: String },
}

fn rate_of(
    table: &RateTable,
    currency: &str,
) -> Result<Decimal, CurrencyError> {
    let rate = table
        .rate(currency)
        .ok_or_else(|| CurrencyError::UnknownCurrency(currency.to_ascii_uppercase()))?;
    if rate.is_zero() {
        return Err(CurrencyError::ZeroRate(currency.to_ascii_uppercase()));
    }
    Ok(rate)
}

/// Converts `amount` between two currencies quoted in `table`.
///
/// Both rates are relative to the table's base, so the cross rate is
/// `rate(to) / rate(from)`. The converted amount is rounded to cents.
///
/// ```
/// use rust_decimal_macros::dec;
/// use paycalc_core::RateTable;
/// use paycalc_core::calculations::convert_currency;
///
/// let conversion = convert_currency(dec!(1000), "USD", "INR", &RateTable::fallback()).unwrap();
/// assert_eq!(conversion.converted, dec!(83500.00));
/// ```
pub fn convert_currency(
    amount: Decimal,
    from_currency: &str,
    to_currency: &str,
    table: &RateTable,
) -> Result<Conversion, CurrencyError> {
    let from_rate = rate_of(table, from_currency)?;
    let to_rate = rate_of(table, to_currency)?;
    let from_currency = from_currency.trim().to_ascii_uppercase();

    let overflow = || CurrencyError::Overflow {
        amount,
        currency: from_currency.clone(),
    };
    let rate = to_rate.checked_div(from_rate).ok_or_else(overflow)?;
    let converted = amount
        .checked_div(from_rate)
        .and_then(|base_amount| base_amount.checked_mul(to_rate))
        .ok_or_else(overflow)?;

    Ok(Conversion {
        amount,
        from_currency,
        to_currency: to_currency.trim().to_ascii_uppercase(),
        rate,
        converted: round_half_up(converted),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn converts_between_two_non_base_currencies() {
        let conversion =
            convert_currency(dec!(83500), "INR", "GBP", &RateTable::fallback()).unwrap();

        assert_eq!(conversion.converted, dec!(790.00));
        assert_eq!(conversion.from_currency, "INR");
        assert_eq!(conversion.to_currency, "GBP");
    }

    #[test]
    fn currency_codes_are_case_insensitive() {
        let conversion =
            convert_currency(dec!(10), "usd", "eur", &RateTable::fallback()).unwrap();

        assert_eq!(conversion.converted, dec!(9.20));
        assert_eq!(conversion.to_currency, "EUR");
    }

    #[test]
    fn unknown_currency_is_an_error() {
        assert_eq!(
            convert_currency(dec!(10), "USD", "xyz", &RateTable::fallback()),
            Err(CurrencyError::UnknownCurrency("XYZ".into()))
        );
    }

    #[test]
    fn zero_rate_is_an_error() {
        let table = RateTable::new("USD", BTreeMap::from([("ABC".to_string(), Decimal::ZERO)]));

        assert_eq!(
            convert_currency(dec!(10), "ABC", "USD", &table),
            Err(CurrencyError::ZeroRate("ABC".into()))
        );
    }

    #[test]
    fn oversized_amount_reports_overflow() {
        let result = convert_currency(Decimal::MAX, "USD", "JPY", &RateTable::fallback());

        assert_eq!(
            result,
            Err(CurrencyError::Overflow {
                amount: Decimal::MAX,
                currency: "USD".to_string(),
            })
        );
    }
}
