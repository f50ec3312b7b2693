//! Portfolio of monetary amounts and single-currency evaluation

use crate::currency::Currency;
use crate::error::{FxError, Result};
use crate::money::MonetaryAmount;
use crate::rates::RateSource;

/// An ordered collection of monetary amounts, possibly in many currencies
///
/// Evaluation converts every holding into a target currency and sums the
/// results. Insertion order is preserved; it determines the order of keys in
/// the aggregate missing-rate error, not the numeric outcome.
///
/// # Example
/// ```
/// use fxmoney::prelude::*;
///
/// let mut table = ExchangeRateTable::new();
/// table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);
///
/// let mut portfolio = Portfolio::new();
/// portfolio.add(MonetaryAmount::new(5.0, Currency::usd()));
/// portfolio.add(MonetaryAmount::new(10.0, Currency::eur()));
///
/// let total = portfolio.evaluate(&table, &Currency::usd()).unwrap();
/// assert_eq!(total, MonetaryAmount::new(17.0, Currency::usd()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    holdings: Vec<MonetaryAmount>,
}

impl Portfolio {
    /// Create an empty portfolio
    pub fn new() -> Self {
        Self {
            holdings: Vec::new(),
        }
    }

    /// Append an amount to the portfolio
    pub fn add(&mut self, money: MonetaryAmount) {
        self.holdings.push(money);
    }

    /// Number of held amounts
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Whether the portfolio holds nothing
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Evaluate the portfolio as a single amount in the target currency
    ///
    /// Each holding is converted in insertion order. A missing rate does not
    /// abort the pass: every unconvertible holding is recorded, and once the
    /// pass is complete the evaluation fails with
    /// [`FxError::MissingExchangeRates`] listing all missing pairs in
    /// encounter order. Partial sums are never returned.
    ///
    /// An empty portfolio evaluates to zero in the target currency.
    /// Evaluation is read-only and can be repeated against updated rates.
    pub fn evaluate<R: RateSource + ?Sized>(
        &self,
        rates: &R,
        target: &Currency,
    ) -> Result<MonetaryAmount> {
        let mut total = 0.0;
        let mut missing = Vec::new();

        for money in &self.holdings {
            match rates.convert(money, target) {
                Ok(converted) => total += converted.amount(),
                Err(FxError::MissingExchangeRate(pair)) => missing.push(pair),
                Err(other) => return Err(other),
            }
        }

        if !missing.is_empty() {
            log::warn!(
                "Evaluation to {} failed: {} missing rate(s)",
                target,
                missing.len()
            );
            return Err(FxError::MissingExchangeRates(missing));
        }

        Ok(MonetaryAmount::new(total, target.clone()))
    }
}

impl Extend<MonetaryAmount> for Portfolio {
    fn extend<I: IntoIterator<Item = MonetaryAmount>>(&mut self, iter: I) {
        self.holdings.extend(iter);
    }
}

impl FromIterator<MonetaryAmount> for Portfolio {
    fn from_iter<I: IntoIterator<Item = MonetaryAmount>>(iter: I) -> Self {
        Self {
            holdings: Vec::from_iter(iter),
        }
    }
}
