use super::fx_errors::RateFetchError;
use super::fx_model::RateSnapshot;
use async_trait::async_trait;

/// Source of CHF-denominated rates for every supported billing currency.
///
/// An implementation returns either a complete snapshot or an error, never a
/// partial update.
#[async_trait]
pub trait RateProviderTrait: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateSnapshot, RateFetchError>;
}
