//! Currency codes and directed currency pairs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency identified by its code (ISO 4217 or otherwise)
///
/// The code space is open: any short string is a valid currency, so callers
/// can work with codes that have no ISO assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency from its code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the currency code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// US Dollar
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Euro
    pub fn eur() -> Self {
        Self::new("EUR")
    }

    /// British Pound Sterling
    pub fn gbp() -> Self {
        Self::new("GBP")
    }

    /// Japanese Yen
    pub fn jpy() -> Self {
        Self::new("JPY")
    }

    /// Swiss Franc
    pub fn chf() -> Self {
        Self::new("CHF")
    }

    /// South Korean Won
    pub fn krw() -> Self {
        Self::new("KRW")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Directed currency pair used as the key for exchange rate lookups
///
/// Pairs are directional: EUR>USD says nothing about USD>EUR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}>{}", self.from, self.to)
    }
}
