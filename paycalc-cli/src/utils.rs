use paycalc_core::{CompoundingFrequency, CountryCode, DeductionCategory, TaxRegime};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Error returned by the argument parsers for named values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseArgError {
    #[error("unknown country '{0}'")]
    Country(String),

    #[error("unknown tax regime '{0}', expected old or new")]
    Regime(String),

    #[error("unknown compounding frequency '{0}', expected monthly, quarterly, half-yearly or yearly")]
    Frequency(String),

    #[error("deduction must look like CATEGORY=AMOUNT, got '{0}'")]
    DeductionSyntax(String),

    #[error("unknown deduction category '{0}'")]
    DeductionCategory(String),

    #[error("invalid deduction amount '{0}'")]
    DeductionAmount(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
/// Returns an error and logs when the input is invalid (non-empty but not parseable).
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

pub fn parse_country(s: &str) -> Result<CountryCode, ParseArgError> {
    CountryCode::parse(s).ok_or_else(|| ParseArgError::Country(s.to_string()))
}

pub fn parse_regime(s: &str) -> Result<TaxRegime, ParseArgError> {
    TaxRegime::parse(s).ok_or_else(|| ParseArgError::Regime(s.to_string()))
}

pub fn parse_frequency(s: &str) -> Result<CompoundingFrequency, ParseArgError> {
    CompoundingFrequency::parse(s).ok_or_else(|| ParseArgError::Frequency(s.to_string()))
}

/// Parses `CATEGORY=AMOUNT`, e.g. `80c=150,000`.
pub fn parse_deduction(s: &str) -> Result<(DeductionCategory, Decimal), ParseArgError> {
    let (category, amount) = s
        .split_once('=')
        .ok_or_else(|| ParseArgError::DeductionSyntax(s.to_string()))?;
    let category = DeductionCategory::parse(category)
        .ok_or_else(|| ParseArgError::DeductionCategory(category.trim().to_string()))?;
    let amount =
        parse_decimal(amount).map_err(|_| ParseArgError::DeductionAmount(amount.to_string()))?;
    Ok((category, amount))
}

/// Formats an amount with two decimals and comma thousands separators.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("NaN").is_err());
    }

    #[test]
    fn parse_deduction_reads_category_and_amount() {
        assert_eq!(
            parse_deduction("80c=150,000"),
            Ok((DeductionCategory::Investment, dec!(150000)))
        );
    }

    #[test]
    fn parse_deduction_rejects_bad_input() {
        assert_eq!(
            parse_deduction("80c"),
            Err(ParseArgError::DeductionSyntax("80c".to_string()))
        );
        assert_eq!(
            parse_deduction("yacht=5"),
            Err(ParseArgError::DeductionCategory("yacht".to_string()))
        );
        assert_eq!(
            parse_deduction("80d=lots"),
            Err(ParseArgError::DeductionAmount("lots".to_string()))
        );
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1482600)), "1,482,600.00");
        assert_eq!(format_amount(dec!(447.4324)), "447.43");
        assert_eq!(format_amount(dec!(-12345.5)), "-12,345.50");
        assert_eq!(format_amount(dec!(999)), "999.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}
