//! Akkucalc Market Data Crate
//!
//! This crate fetches live foreign exchange rates for the Akkucalc order
//! calculator.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +--------------------+     +----------+
//! |   Core (FxRate-  | --> | MarketDataProvider | --> |  FxRate  |
//! |   Service)       |     | (Frankfurter, ...) |     |          |
//! +------------------+     +--------------------+     +----------+
//! ```
//!
//! A provider answers one currency pair per call. Combining pairs into an
//! atomic snapshot is the caller's job.
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Provider contract
//! - [`FrankfurterProvider`] - HTTP provider backed by api.frankfurter.app
//! - [`FxRate`] - A single provider-sourced exchange rate
//! - [`MarketDataError`] - Provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Currency, FxRate, ProviderId};
pub use provider::frankfurter::FrankfurterProvider;
pub use provider::MarketDataProvider;
