use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use paycalc_core::RateTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RateError;

/// Payload returned by an exchange-rate provider.
///
/// `success: false` means the provider answered but could not serve the
/// request; callers treat that the same as a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub success: bool,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<String, Decimal>,
}

impl ProviderResponse {
    pub fn from_table(table: RateTable) -> Self {
        Self {
            success: true,
            base: Some(table.base),
            rates: table.rates,
        }
    }

    /// Builds a table, quoting against the payload's own base when it names
    /// one and `requested_base` otherwise.
    pub fn into_table(
        self,
        requested_base: &str,
    ) -> RateTable {
        let base = self.base.unwrap_or_else(|| requested_base.to_string());
        let rates = self
            .rates
            .into_iter()
            .map(|(currency, rate)| (currency.to_ascii_uppercase(), rate))
            .collect();
        RateTable::new(base, rates)
    }
}

/// A provider of exchange-rate tables.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches rates quoted against `base`.
    async fn fetch(&self, base: &str) -> Result<ProviderResponse, RateError>;
}

/// Serves a fixed table, rebased on request.
pub struct StaticRateSource {
    table: RateTable,
}

impl StaticRateSource {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::new(RateTable::fallback())
    }
}

#[async_trait]
impl RateSource for StaticRateSource {
    async fn fetch(&self, base: &str) -> Result<ProviderResponse, RateError> {
        let table = self
            .table
            .rebased(base)
            .ok_or_else(|| RateError::UnsupportedBase(base.to_ascii_uppercase()))?;
        Ok(ProviderResponse::from_table(table))
    }
}

/// Reads a provider payload previously saved to disk as JSON.
///
/// The file is re-read on every fetch.
pub struct JsonFileRateSource {
    path: PathBuf,
}

impl JsonFileRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(json: &str) -> Result<ProviderResponse, RateError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[async_trait]
impl RateSource for JsonFileRateSource {
    async fn fetch(&self, base: &str) -> Result<ProviderResponse, RateError> {
        debug!(path = %self.path.display(), base, "reading rate payload");
        let json = tokio::fs::read_to_string(&self.path).await?;
        Self::parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_provider_payload_with_numeric_rates() {
        let response = JsonFileRateSource::parse(
            r#"{"success":true,"base":"USD","rates":{"INR":83.5,"GBP":0.79}}"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.rates.get("INR"), Some(&dec!(83.5)));
    }

    #[test]
    fn parses_unsuccessful_payload_without_rates() {
        let response = JsonFileRateSource::parse(r#"{"success":false}"#).unwrap();

        assert!(!response.success);
        assert!(response.rates.is_empty());
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = JsonFileRateSource::parse("{not json").unwrap_err();

        assert!(matches!(err, RateError::JsonParse(_)));
    }

    #[test]
    fn into_table_prefers_payload_base() {
        let response = ProviderResponse {
            success: true,
            base: Some("EUR".to_string()),
            rates: BTreeMap::from([("usd".to_string(), dec!(1.09))]),
        };

        let table = response.into_table("USD");

        assert_eq!(table.base, "EUR");
        assert_eq!(table.rate("USD"), Some(dec!(1.09)));
    }

    #[tokio::test]
    async fn static_source_rebases_its_table() {
        let source = StaticRateSource::default();

        let response = source.fetch("GBP").await.unwrap();

        assert_eq!(response.base.as_deref(), Some("GBP"));
        assert_eq!(response.rates.get("USD"), Some(&(Decimal::ONE / dec!(0.79))));
    }

    #[tokio::test]
    async fn static_source_rejects_unknown_base() {
        let err = StaticRateSource::default().fetch("XYZ").await.unwrap_err();

        assert!(matches!(err, RateError::UnsupportedBase(code) if code == "XYZ"));
    }
}
