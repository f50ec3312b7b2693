//! Exchange rate registry and the conversion seam

use crate::currency::{Currency, CurrencyPair};
use crate::error::{FxError, Result};
use crate::money::MonetaryAmount;
use std::collections::HashMap;

/// Trait for resolving exchange rates and converting amounts
///
/// `Portfolio::evaluate` is generic over this trait, so rates can come from
/// an [`ExchangeRateTable`] or any other source a caller supplies.
pub trait RateSource: Send + Sync {
    /// Get the rate for a directed currency pair, such that
    /// `to_amount = from_amount * rate`
    ///
    /// Same-currency pairs are handled by [`RateSource::convert`] and need
    /// not be answered here.
    fn get_rate(&self, from: &Currency, to: &Currency) -> Option<f64>;

    /// Check whether a conversion between two currencies can succeed
    fn has_rate(&self, from: &Currency, to: &Currency) -> bool {
        from == to || self.get_rate(from, to).is_some()
    }

    /// Convert an amount into the target currency
    ///
    /// Converting to the amount's own currency is an identity conversion: it
    /// succeeds without a rate lookup. Otherwise the directed rate is looked
    /// up and a miss fails with [`FxError::MissingExchangeRate`] carrying
    /// the pair.
    fn convert(&self, money: &MonetaryAmount, to: &Currency) -> Result<MonetaryAmount> {
        if money.currency() == to {
            return Ok(MonetaryAmount::new(money.amount(), to.clone()));
        }

        match self.get_rate(money.currency(), to) {
            Some(rate) => Ok(MonetaryAmount::new(money.amount() * rate, to.clone())),
            None => Err(FxError::MissingExchangeRate(CurrencyPair::new(
                money.currency().clone(),
                to.clone(),
            ))),
        }
    }
}

/// In-memory registry of directed exchange rates
///
/// Rates are keyed by [`CurrencyPair`], so EUR>USD and USD>EUR are
/// independent entries. Registering a pair again overwrites the previous
/// rate for future conversions; already-returned results are unaffected.
///
/// Rate values are stored as given. Sign and range are the caller's
/// responsibility.
///
/// # Example
/// ```
/// use fxmoney::{Currency, ExchangeRateTable, MonetaryAmount, RateSource};
///
/// let mut table = ExchangeRateTable::new();
/// table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);
///
/// let ten_euros = MonetaryAmount::new(10.0, Currency::eur());
/// let converted = table.convert(&ten_euros, &Currency::usd()).unwrap();
/// assert_eq!(converted, MonetaryAmount::new(12.0, Currency::usd()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateTable {
    rates: HashMap<CurrencyPair, f64>,
}

impl ExchangeRateTable {
    /// Create an empty rate table
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Register the rate for a directed currency pair, overwriting any
    /// previous rate for that pair
    pub fn add_exchange_rate(&mut self, from: Currency, to: Currency, rate: f64) {
        let pair = CurrencyPair::new(from, to);
        if let Some(old) = self.rates.insert(pair.clone(), rate) {
            log::debug!("Exchange rate {} updated: {} -> {}", pair, old, rate);
        }
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether no rates are registered
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Remove all registered rates
    pub fn clear(&mut self) {
        self.rates.clear();
    }
}

impl RateSource for ExchangeRateTable {
    fn get_rate(&self, from: &Currency, to: &Currency) -> Option<f64> {
        self.rates
            .get(&CurrencyPair::new(from.clone(), to.clone()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_conversion() {
        let mut table = ExchangeRateTable::new();
        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);

        let ten_euros = MonetaryAmount::new(10.0, Currency::eur());
        let converted = table.convert(&ten_euros, &Currency::usd()).unwrap();
        assert_eq!(converted, MonetaryAmount::new(12.0, Currency::usd()));
    }

    #[test]
    fn test_identity_conversion_needs_no_rate() {
        let table = ExchangeRateTable::new();
        let five_euros = MonetaryAmount::new(5.0, Currency::eur());

        let converted = table.convert(&five_euros, &Currency::eur()).unwrap();
        assert_eq!(converted, five_euros);
    }

    #[test]
    fn test_conversion_with_missing_rate() {
        let table = ExchangeRateTable::new();
        let ten_euros = MonetaryAmount::new(10.0, Currency::eur());

        let err = table
            .convert(&ten_euros, &Currency::new("Kalganid"))
            .unwrap_err();
        assert_eq!(
            err,
            FxError::MissingExchangeRate(CurrencyPair::new(
                Currency::eur(),
                Currency::new("Kalganid")
            ))
        );
        assert_eq!(err.to_string(), "Missing exchange rate: EUR>Kalganid");
    }

    #[test]
    fn test_rates_are_directional() {
        let mut table = ExchangeRateTable::new();
        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);

        assert!(table.get_rate(&Currency::eur(), &Currency::usd()).is_some());
        assert!(table.get_rate(&Currency::usd(), &Currency::eur()).is_none());
    }

    #[test]
    fn test_registering_again_overwrites() {
        let mut table = ExchangeRateTable::new();
        let ten_euros = MonetaryAmount::new(10.0, Currency::eur());

        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);
        let before = table.convert(&ten_euros, &Currency::usd()).unwrap();
        assert_eq!(before, MonetaryAmount::new(12.0, Currency::usd()));

        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.3);
        assert_eq!(
            table.convert(&ten_euros, &Currency::usd()).unwrap(),
            MonetaryAmount::new(13.0, Currency::usd())
        );

        // Results returned before the update are unchanged
        assert_eq!(before, MonetaryAmount::new(12.0, Currency::usd()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_has_rate() {
        let mut table = ExchangeRateTable::new();
        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);

        assert!(table.has_rate(&Currency::eur(), &Currency::usd()));
        assert!(table.has_rate(&Currency::jpy(), &Currency::jpy()));
        assert!(!table.has_rate(&Currency::usd(), &Currency::eur()));
    }

    #[test]
    fn test_clear() {
        let mut table = ExchangeRateTable::new();
        table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);
        assert!(!table.is_empty());

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
