use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Hardcoded exchange rates, in units of currency per US dollar, used when
/// no live table is available.
const FALLBACK_USD_RATES: [(&str, Decimal); 11] = [
    ("USD", dec!(1)),
    ("INR", dec!(83.50)),
    ("GBP", dec!(0.79)),
    ("EUR", dec!(0.92)),
    ("CAD", dec!(1.36)),
    ("AUD", dec!(1.52)),
    ("SGD", dec!(1.34)),
    ("JPY", dec!(150.00)),
    ("AED", dec!(3.6725)),
    ("CHF", dec!(0.88)),
    ("CNY", dec!(7.24)),
];

/// Exchange rates quoted against a base currency: `rates[c]` is how many
/// units of `c` one unit of `base` buys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    pub fn new(
        base: impl Into<String>,
        rates: BTreeMap<String, Decimal>,
    ) -> Self {
        Self {
            base: base.into().to_ascii_uppercase(),
            rates,
        }
    }

    /// The built-in USD table.
    pub fn fallback() -> Self {
        Self::new(
            "USD",
            FALLBACK_USD_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        )
    }

    /// Units of `currency` per unit of the base currency.
    ///
    /// The base currency is always 1 even when the table omits it.
    pub fn rate(
        &self,
        currency: &str,
    ) -> Option<Decimal> {
        let currency = currency.trim().to_ascii_uppercase();
        if currency == self.base {
            return Some(Decimal::ONE);
        }
        self.rates.get(&currency).copied()
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// The same rates quoted against `base` instead.
    ///
    /// `None` when `base` is not in the table or its rate is zero.
    pub fn rebased(
        &self,
        base: &str,
    ) -> Option<Self> {
        let pivot = self.rate(base).filter(|rate| !rate.is_zero())?;
        let base = base.trim().to_ascii_uppercase();

        let mut rates: BTreeMap<String, Decimal> = self
            .rates
            .iter()
            .filter(|(currency, _)| **currency != base)
            .map(|(currency, rate)| Some((currency.clone(), rate.checked_div(pivot)?)))
            .collect::<Option<_>>()?;
        if base != self.base {
            rates.insert(self.base.clone(), Decimal::ONE.checked_div(pivot)?);
        }

        Some(Self::new(base, rates))
    }
}

/// Result of converting an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: Decimal,
    pub from_currency: String,
    pub to_currency: String,
    /// Units of `to_currency` per unit of `from_currency`.
    pub rate: Decimal,
    pub converted: Decimal,
}
