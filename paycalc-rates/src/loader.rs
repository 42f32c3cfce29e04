use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use paycalc_core::RateTable;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::{ProviderResponse, RateError, RateSource};

/// A single record from an exchange-rate CSV file.
///
/// - `currency`: ISO 4217 code (e.g., INR)
/// - `rate`: units of `currency` per unit of the table's base currency
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateRecord {
    pub currency: String,
    pub rate: Decimal,
}

/// Loader for exchange-rate tables from CSV files.
pub struct RateTableLoader;

impl RateTableLoader {
    /// Parse rate records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateRecord>, RateError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a table quoted against `base` from parsed records.
    ///
    /// Every rate must be positive. A later record for the same currency
    /// replaces an earlier one.
    pub fn build(
        base: &str,
        records: &[RateRecord],
    ) -> Result<RateTable, RateError> {
        let mut rates = BTreeMap::new();

        for record in records {
            if record.rate <= Decimal::ZERO {
                return Err(RateError::InvalidRate {
                    currency: record.currency.clone(),
                    rate: record.rate.to_string(),
                });
            }
            rates.insert(record.currency.to_ascii_uppercase(), record.rate);
        }

        Ok(RateTable::new(base, rates))
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(
        base: &str,
        reader: R,
    ) -> Result<RateTable, RateError> {
        let records = Self::parse(reader)?;
        Self::build(base, &records)
    }
}

/// Serves a CSV rate table from disk, quoted against `base`.
pub struct CsvFileRateSource {
    path: PathBuf,
    base: String,
}

impl CsvFileRateSource {
    pub fn new(
        path: impl Into<PathBuf>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            base: base.into(),
        }
    }
}

#[async_trait]
impl RateSource for CsvFileRateSource {
    async fn fetch(&self, base: &str) -> Result<ProviderResponse, RateError> {
        debug!(path = %self.path.display(), base, "reading rate table");
        let contents = tokio::fs::read(&self.path).await?;
        let table = RateTableLoader::load(&self.base, contents.as_slice())?;
        let table = table
            .rebased(base)
            .ok_or_else(|| RateError::UnsupportedBase(base.to_ascii_uppercase()))?;
        Ok(ProviderResponse::from_table(table))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = "currency,rate\nINR,83.50\ngbp, 0.79\n";

    #[test]
    fn test_parse_records() {
        let records = RateTableLoader::parse(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                RateRecord {
                    currency: "INR".to_string(),
                    rate: dec!(83.50),
                },
                RateRecord {
                    currency: "gbp".to_string(),
                    rate: dec!(0.79),
                },
            ]
        );
    }

    #[test]
    fn test_load_uppercases_currencies() {
        let table = RateTableLoader::load("usd", SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.base, "USD");
        assert_eq!(table.rate("GBP"), Some(dec!(0.79)));
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let csv = "currency,rate\nINR,0\n";

        let err = RateTableLoader::load("USD", csv.as_bytes()).unwrap_err();

        assert!(matches!(err, RateError::InvalidRate { currency, .. } if currency == "INR"));
    }

    #[test]
    fn test_rejects_non_numeric_rate() {
        let csv = "currency,rate\nINR,lots\n";

        let err = RateTableLoader::parse(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, RateError::CsvParse(_)));
    }
}
