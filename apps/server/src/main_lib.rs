use std::sync::Arc;

use crate::config::Config;
use akkucalc_core::{
    calculator::{CalculatorService, CalculatorServiceTrait},
    fx::{FxRateService, RateProviderTrait},
};
use akkucalc_market_data::{FrankfurterProvider, MarketDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub calculator: Arc<dyn CalculatorServiceTrait>,
}

impl AppState {
    /// Session backed by an arbitrary rate source. Rates start at parity and
    /// the status stays `Loading` until the first refresh.
    pub fn with_rate_provider(rate_provider: Arc<dyn RateProviderTrait>) -> Arc<Self> {
        Arc::new(Self {
            calculator: Arc::new(CalculatorService::new(rate_provider)),
        })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("AKKU_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(FrankfurterProvider::with_base_url(
        config.rates_api_url.clone(),
        config.request_timeout,
    ));
    tracing::info!("Exchange rates from {}", config.rates_api_url);

    let fx_service: Arc<dyn RateProviderTrait> = Arc::new(FxRateService::new(provider));
    Ok(AppState::with_rate_provider(fx_service))
}
