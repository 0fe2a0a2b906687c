//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::FxRate;

/// Trait for exchange-rate providers.
///
/// Implement this trait to add support for a new rate source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use akkucalc_market_data::{FxRate, MarketDataError, MarketDataProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxRate, MarketDataError> {
///         Ok(FxRate::new(from.to_string(), to.to_string(), rust_decimal::Decimal::ONE, "FIXED"))
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "FRANKFURTER".
    /// Used for logging and as the `source` of returned rates.
    fn id(&self) -> &'static str;

    /// Fetch the latest rate for one currency pair.
    ///
    /// # Arguments
    ///
    /// * `from` - ISO 4217 code of the base currency
    /// * `to` - ISO 4217 code of the quote currency
    ///
    /// # Returns
    ///
    /// The rate such that 1 `from` = `rate` `to`, or a `MarketDataError`.
    async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxRate, MarketDataError>;
}
