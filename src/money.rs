//! Monetary amounts tagged with a currency

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in a single currency
///
/// Values are immutable: the arithmetic operations return new instances and
/// never mutate in place.
///
/// # Example
/// ```
/// use fxmoney::{Currency, MonetaryAmount};
///
/// let five_dollars = MonetaryAmount::new(5.0, Currency::usd());
/// let ten_dollars = five_dollars.times(2.0);
///
/// assert_eq!(ten_dollars, MonetaryAmount::new(10.0, Currency::usd()));
/// assert_eq!(format!("{}", five_dollars), "MonetaryAmount(5, 'USD')");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    amount: f64,
    currency: Currency,
}

impl MonetaryAmount {
    /// Create a new monetary amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the numeric amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Multiply by a scalar, returning a new amount in the same currency
    pub fn times(&self, multiplier: f64) -> Self {
        Self::new(self.amount * multiplier, self.currency.clone())
    }

    /// Divide by a scalar, returning a new amount in the same currency
    ///
    /// Division by zero follows IEEE 754 semantics: the result carries
    /// `f64::INFINITY`, `f64::NEG_INFINITY` or `f64::NAN` rather than
    /// failing.
    pub fn divide(&self, divisor: f64) -> Self {
        Self::new(self.amount / divisor, self.currency.clone())
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonetaryAmount({}, '{}')", self.amount, self.currency)
    }
}
