//! # fxmoney
//!
//! Multi-currency monetary amounts, exchange rate tables and portfolio
//! valuation.
//!
//! A [`Portfolio`](portfolio::Portfolio) holds amounts in any mix of
//! currencies and evaluates itself into a single target currency against a
//! [`RateSource`](rates::RateSource). Conversions that fail for a missing
//! rate are collected across the whole portfolio and reported together, so
//! one evaluation surfaces every unresolvable currency pair at once.
//!
//! ## Example
//!
//! ```rust
//! use fxmoney::prelude::*;
//!
//! let mut table = ExchangeRateTable::new();
//! table.add_exchange_rate(Currency::eur(), Currency::usd(), 1.2);
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.add(MonetaryAmount::new(5.0, Currency::usd()));
//! portfolio.add(MonetaryAmount::new(10.0, Currency::eur()));
//!
//! let total = portfolio.evaluate(&table, &Currency::usd())?;
//! assert_eq!(total, MonetaryAmount::new(17.0, Currency::usd()));
//! # Ok::<(), FxError>(())
//! ```

pub mod currency;
pub mod error;
pub mod money;
pub mod portfolio;
pub mod rates;

pub use currency::{Currency, CurrencyPair};
pub use error::{FxError, Result};
pub use money::MonetaryAmount;
pub use portfolio::Portfolio;
pub use rates::{ExchangeRateTable, RateSource};

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::error::{FxError, Result};
    pub use crate::money::MonetaryAmount;
    pub use crate::portfolio::Portfolio;
    pub use crate::rates::{ExchangeRateTable, RateSource};
}
