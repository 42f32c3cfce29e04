//! Restates a salary in another country's purchasing power and cost of
//! living.
//!
//! The PPP factor converts between currencies at purchasing-power rates and
//! the cost-of-living factor adjusts for the difference between the two
//! cities. Cities are matched case-insensitively; an unlisted city uses the
//! country's `Other` index.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycalc_core::CountryCode;
//! use paycalc_core::calculations::convert_by_ppp;
//!
//! let result = convert_by_ppp(
//!     dec!(100000),
//!     CountryCode::UnitedStates,
//!     "New York",
//!     CountryCode::India,
//!     "Mumbai",
//! )
//! .unwrap();
//!
//! // 22.40 INR per international dollar, Mumbai at 31% of New York.
//! assert_eq!(result.converted_amount, dec!(694400));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::CalculatorError;
use crate::models::{CountryCode, PppResult};
use crate::rules::purchasing_power::{OTHER_CITY, PPP_PER_INTERNATIONAL_DOLLAR, cost_of_living};

fn ppp_index(currency_code: &str) -> Decimal {
    PPP_PER_INTERNATIONAL_DOLLAR
        .iter()
        .find(|(code, _)| *code == currency_code)
        .map(|(_, factor)| *factor)
        .unwrap_or_else(|| {
            warn!(currency_code, "no PPP factor for currency, assuming parity");
            Decimal::ONE
        })
}

fn city_index(
    country: CountryCode,
    city: &str,
) -> Decimal {
    let table = cost_of_living(country);
    let city = city.trim();

    let lookup = |name: &str| {
        table
            .iter()
            .find(|(listed, _)| listed.eq_ignore_ascii_case(name))
            .map(|(_, index)| *index)
    };

    lookup(city)
        .or_else(|| {
            debug!(%country, city, "city not listed, using the country-wide index");
            lookup(OTHER_CITY)
        })
        .unwrap_or(Decimal::ONE_HUNDRED)
}

/// Converts `salary` earned in `from_city` into the amount that buys the
/// same standard of living in `to_city`.
///
/// The converted amount is not rounded so that converting back recovers the
/// original figure.
///
/// # Errors
///
/// [`CalculatorError::Overflow`] when the converted amount cannot be
/// represented.
pub fn convert_by_ppp(
    salary: Decimal,
    from_country: CountryCode,
    from_city: &str,
    to_country: CountryCode,
    to_city: &str,
) -> Result<PppResult, CalculatorError> {
    let ppp_factor = ppp_index(to_country.profile().currency_code)
        / ppp_index(from_country.profile().currency_code);
    let cost_of_living_factor =
        city_index(to_country, to_city) / city_index(from_country, from_city);

    let converted_amount = salary
        .checked_mul(ppp_factor)
        .and_then(|v| v.checked_mul(cost_of_living_factor))
        .ok_or(CalculatorError::Overflow)?;

    Ok(PppResult {
        original_amount: salary,
        converted_amount,
        ppp_factor,
        cost_of_living_factor,
    })
}

/// Cities with their own cost-of-living index, in display order.
pub fn cities(country: CountryCode) -> Vec<&'static str> {
    cost_of_living(country)
        .iter()
        .map(|(city, _)| *city)
        .filter(|city| *city != OTHER_CITY)
        .collect()
}
