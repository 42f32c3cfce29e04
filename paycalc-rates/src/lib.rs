//! Exchange-rate sources, caching and locale-based country inference.

pub mod cache;
pub mod error;
pub mod loader;
pub mod locale;
pub mod service;
pub mod source;

pub use cache::{Clock, DEFAULT_TTL_HOURS, RateCache, SystemClock};
pub use error::RateError;
pub use loader::{CsvFileRateSource, RateRecord, RateTableLoader};
pub use locale::{GeoPayload, resolve_country};
pub use service::RateService;
pub use source::{JsonFileRateSource, ProviderResponse, RateSource, StaticRateSource};
