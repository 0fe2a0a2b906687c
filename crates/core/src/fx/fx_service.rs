use super::fx_errors::RateFetchError;
use super::fx_model::{Currency, RateSnapshot};
use super::fx_traits::RateProviderTrait;
use crate::constants::HOME_CURRENCY;
use akkucalc_market_data::MarketDataProvider;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Builds a [`RateSnapshot`] from one pair lookup per foreign currency.
#[derive(Clone)]
pub struct FxRateService {
    provider: Arc<dyn MarketDataProvider>,
}

impl FxRateService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    async fn fetch_pair(&self, currency: Currency) -> Result<Decimal, RateFetchError> {
        self.provider
            .get_latest_rate(currency.as_str(), HOME_CURRENCY)
            .await
            .map(|fx_rate| fx_rate.rate)
            .map_err(|source| {
                log::warn!(
                    "{} failed to deliver {}/{}: {}",
                    self.provider.id(),
                    currency,
                    HOME_CURRENCY,
                    source
                );
                RateFetchError::Provider { currency, source }
            })
    }
}

#[async_trait]
impl RateProviderTrait for FxRateService {
    async fn fetch_rates(&self) -> Result<RateSnapshot, RateFetchError> {
        let (eur, usd) = futures::future::try_join(
            self.fetch_pair(Currency::Eur),
            self.fetch_pair(Currency::Usd),
        )
        .await?;

        let snapshot = RateSnapshot::new(eur, usd, Utc::now())?;
        log::debug!(
            "Fetched rates from {}: EUR/CHF {} USD/CHF {}",
            self.provider.id(),
            snapshot.eur,
            snapshot.usd
        );
        Ok(snapshot)
    }
}
