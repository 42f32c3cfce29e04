//! Integration tests for the cached rate service and file-backed sources.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use paycalc_core::RateTable;
use paycalc_core::calculations::convert_currency;
use paycalc_rates::{
    Clock, CsvFileRateSource, JsonFileRateSource, ProviderResponse, RateError, RateService,
    RateSource, RateTableLoader, StaticRateSource,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TEST_CSV: &str = include_str!("../test-data/rates_usd.csv");

/// Clock whose time only moves when a test advances it.
#[derive(Clone, Default)]
struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    fn advance(
        &self,
        by: Duration,
    ) {
        self.0.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0.load(Ordering::SeqCst), 0).expect("valid timestamp")
    }
}

#[derive(Clone, Copy)]
enum Behaviour {
    Succeed,
    ReportFailure,
    Error,
}

/// Source that counts fetches and answers according to `behaviour`.
struct ScriptedSource {
    calls: Arc<AtomicUsize>,
    behaviour: Behaviour,
    table: RateTable,
}

impl ScriptedSource {
    fn new(behaviour: Behaviour) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let table = RateTableLoader::load("USD", TEST_CSV.as_bytes()).expect("valid test csv");
        (
            Self {
                calls: Arc::clone(&calls),
                behaviour,
                table,
            },
            calls,
        )
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn fetch(&self, _base: &str) -> Result<ProviderResponse, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::Succeed => Ok(ProviderResponse::from_table(self.table.clone())),
            Behaviour::ReportFailure => Ok(ProviderResponse {
                success: false,
                base: None,
                rates: Default::default(),
            }),
            Behaviour::Error => Err(RateError::UnsupportedBase("USD".to_string())),
        }
    }
}

#[tokio::test]
async fn test_serves_cached_rates_within_ttl() {
    let (source, calls) = ScriptedSource::new(Behaviour::Succeed);
    let clock = ManualClock::default();
    let service = RateService::with_clock(source, clock.clone(), Duration::hours(24));

    let first = service.rates("USD").await;
    clock.advance(Duration::hours(23));
    let second = service.rates("usd").await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    assert_eq!(first.rate("INR"), Some(dec!(84.10)));
}

#[tokio::test]
async fn test_refetches_after_ttl() {
    let (source, calls) = ScriptedSource::new(Behaviour::Succeed);
    let clock = ManualClock::default();
    let service = RateService::with_clock(source, clock.clone(), Duration::hours(24));

    service.rates("USD").await;
    clock.advance(Duration::hours(24));
    service.rates("USD").await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_falls_back_on_error_without_caching() {
    let (source, calls) = ScriptedSource::new(Behaviour::Error);
    let service = RateService::with_clock(source, ManualClock::default(), Duration::hours(24));

    let first = service.rates("USD").await;
    let second = service.rates("USD").await;

    assert_eq!(first, RateTable::fallback());
    assert_eq!(second, RateTable::fallback());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_falls_back_when_provider_reports_failure() {
    let (source, calls) = ScriptedSource::new(Behaviour::ReportFailure);
    let service = RateService::with_clock(source, ManualClock::default(), Duration::hours(24));

    let table = service.rates("USD").await;

    assert_eq!(table, RateTable::fallback());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fallback_is_rebased_to_requested_currency() {
    let (source, _) = ScriptedSource::new(Behaviour::Error);
    let service = RateService::with_clock(source, ManualClock::default(), Duration::hours(24));

    let table = service.rates("INR").await;

    assert_eq!(table.base, "INR");
}

#[tokio::test]
async fn test_provider_rates_are_requoted_before_caching() {
    let (source, calls) = ScriptedSource::new(Behaviour::Succeed);
    let service = RateService::with_clock(source, ManualClock::default(), Duration::hours(24));

    let first = service.rates("EUR").await;
    let second = service.rates("eur").await;

    assert_eq!(first.base, "EUR");
    assert_eq!(first.rate("USD"), Some(Decimal::ONE / dec!(0.91)));
    assert_eq!(first.rate("INR"), Some(dec!(84.10) / dec!(0.91)));
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unquotable_base_falls_back_without_caching() {
    let (source, calls) = ScriptedSource::new(Behaviour::Succeed);
    let service = RateService::with_clock(source, ManualClock::default(), Duration::hours(24));

    let first = service.rates("XYZ").await;
    service.rates("XYZ").await;

    assert_eq!(first, RateTable::fallback());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_json_file_source_is_requoted_to_requested_base() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/provider_usd.json");
    let service = RateService::new(JsonFileRateSource::new(path));

    let table = service.rates("GBP").await;

    assert_eq!(table.base, "GBP");
    assert_eq!(table.rate("JPY"), Some(dec!(149.20) / dec!(0.78)));
}

#[tokio::test]
async fn test_static_source_service_converts_currency() {
    let service = RateService::new(StaticRateSource::default());

    let table = service.rates("USD").await;
    let conversion = convert_currency(dec!(250), "GBP", "EUR", &table).unwrap();

    // 250 / 0.79 × 0.92
    assert_eq!(conversion.converted, dec!(291.14));
}

#[tokio::test]
async fn test_json_file_source_reads_saved_payload() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/provider_usd.json");
    let service = RateService::new(JsonFileRateSource::new(path));

    let table = service.rates("USD").await;

    assert_eq!(table.rate("JPY"), Some(dec!(149.20)));
    assert_eq!(table.rate("CAD"), None);
}

#[tokio::test]
async fn test_csv_file_source_reads_table() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/rates_usd.csv");
    let service = RateService::new(CsvFileRateSource::new(path, "USD"));

    let table = service.rates("USD").await;

    assert_eq!(table.rate("AED"), Some(dec!(3.6725)));
}

#[tokio::test]
async fn test_missing_file_falls_back() {
    let service = RateService::new(JsonFileRateSource::new("/nonexistent/rates.json"));

    assert_eq!(service.rates("USD").await, RateTable::fallback());
}
