//! Error types for fxmoney

use crate::currency::CurrencyPair;
use thiserror::Error;

/// Main error type for fxmoney
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// No rate is registered for one directed currency pair
    #[error("Missing exchange rate: {0}")]
    MissingExchangeRate(CurrencyPair),

    /// One or more conversions failed during a portfolio evaluation;
    /// carries every missing pair in encounter order
    #[error("Missing exchange rate(s): [{}]", .0.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(","))]
    MissingExchangeRates(Vec<CurrencyPair>),
}

/// Result type alias for fxmoney operations
pub type Result<T> = std::result::Result<T, FxError>;
