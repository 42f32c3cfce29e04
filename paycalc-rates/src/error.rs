use thiserror::Error;

/// Errors raised while obtaining an exchange-rate table.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Invalid rate {rate} for currency '{currency}'")]
    InvalidRate { currency: String, rate: String },

    #[error("Base currency '{0}' is not available from this source")]
    UnsupportedBase(String),
}

impl From<csv::Error> for RateError {
    fn from(err: csv::Error) -> Self {
        RateError::CsvParse(err.to_string())
    }
}

impl From<serde_json::Error> for RateError {
    fn from(err: serde_json::Error) -> Self {
        RateError::JsonParse(err.to_string())
    }
}
