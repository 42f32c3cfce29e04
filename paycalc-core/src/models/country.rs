use std::fmt;

use serde::{Deserialize, Serialize};

/// Countries the calculators know about.
///
/// The first seven carry salary and income-tax rules; the rest are only
/// available for purchasing-power and currency conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    India,
    UnitedStates,
    UnitedKingdom,
    Canada,
    Australia,
    Singapore,
    Germany,
    Japan,
    UnitedArabEmirates,
    France,
    Netherlands,
}

impl CountryCode {
    pub const ALL: [CountryCode; 11] = [
        Self::India,
        Self::UnitedStates,
        Self::UnitedKingdom,
        Self::Canada,
        Self::Australia,
        Self::Singapore,
        Self::Germany,
        Self::Japan,
        Self::UnitedArabEmirates,
        Self::France,
        Self::Netherlands,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::India => "IN",
            Self::UnitedStates => "US",
            Self::UnitedKingdom => "GB",
            Self::Canada => "CA",
            Self::Australia => "AU",
            Self::Singapore => "SG",
            Self::Germany => "DE",
            Self::Japan => "JP",
            Self::UnitedArabEmirates => "AE",
            Self::France => "FR",
            Self::Netherlands => "NL",
        }
    }

    /// Parses an alpha-2 code, ignoring case and surrounding whitespace.
    /// `UK` is accepted as an alias for `GB`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Some(Self::India),
            "US" => Some(Self::UnitedStates),
            "GB" | "UK" => Some(Self::UnitedKingdom),
            "CA" => Some(Self::Canada),
            "AU" => Some(Self::Australia),
            "SG" => Some(Self::Singapore),
            "DE" => Some(Self::Germany),
            "JP" => Some(Self::Japan),
            "AE" => Some(Self::UnitedArabEmirates),
            "FR" => Some(Self::France),
            "NL" => Some(Self::Netherlands),
            _ => None,
        }
    }

    pub fn profile(&self) -> CountryProfile {
        let (display_name, currency_code, currency_symbol) = match self {
            Self::India => ("India", "INR", "₹"),
            Self::UnitedStates => ("United States", "USD", "$"),
            Self::UnitedKingdom => ("United Kingdom", "GBP", "£"),
            Self::Canada => ("Canada", "CAD", "C$"),
            Self::Australia => ("Australia", "AUD", "A$"),
            Self::Singapore => ("Singapore", "SGD", "S$"),
            Self::Germany => ("Germany", "EUR", "€"),
            Self::Japan => ("Japan", "JPY", "¥"),
            Self::UnitedArabEmirates => ("United Arab Emirates", "AED", "AED"),
            Self::France => ("France", "EUR", "€"),
            Self::Netherlands => ("Netherlands", "EUR", "€"),
        };

        CountryProfile {
            code: *self,
            display_name,
            currency_code,
            currency_symbol,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a country: name and the currency salaries are
/// quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryProfile {
    pub code: CountryCode,
    pub display_name: &'static str,
    pub currency_code: &'static str,
    pub currency_symbol: &'static str,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_code() {
        for code in CountryCode::ALL {
            assert_eq!(CountryCode::parse(code.as_str()), Some(code));
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(CountryCode::parse(" in "), Some(CountryCode::India));
        assert_eq!(CountryCode::parse("uk"), Some(CountryCode::UnitedKingdom));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(CountryCode::parse("XX"), None);
        assert_eq!(CountryCode::parse(""), None);
    }

    #[test]
    fn profile_carries_currency() {
        let profile = CountryCode::Germany.profile();

        assert_eq!(profile.currency_code, "EUR");
        assert_eq!(profile.display_name, "Germany");
    }
}
