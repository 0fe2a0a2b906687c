//! Frankfurter provider for foreign exchange rates.
//!
//! Frankfurter publishes the European Central Bank reference rates and needs
//! no API key. A latest-rate lookup is a single request:
//!
//! ```text
//! GET {base_url}/latest?from=EUR&to=CHF
//! {"amount":1.0,"base":"EUR","date":"2024-11-08","rates":{"CHF":0.9412}}
//! ```
//!
//! Only `rates.<to>` is required; `date` is kept when present.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::FxRate;
use crate::provider::MarketDataProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "FRANKFURTER";

/// Public Frankfurter endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body of `/latest`
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    date: Option<NaiveDate>,
    rates: HashMap<String, f64>,
}

/// Frankfurter exchange-rate provider.
///
/// # Example
///
/// ```ignore
/// use akkucalc_market_data::FrankfurterProvider;
///
/// let provider = FrankfurterProvider::new();
/// let rate = provider.get_latest_rate("EUR", "CHF").await?;
/// ```
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterProvider {
    /// Create a provider talking to the public Frankfurter endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a provider for a self-hosted or stubbed Frankfurter instance.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn provider_error(message: impl Into<String>) -> MarketDataError {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }

    fn map_request_error(error: reqwest::Error) -> MarketDataError {
        if error.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(error)
        }
    }

    /// Extract the `to` rate from a decoded response.
    fn parse_latest(body: LatestResponse, from: &str, to: &str) -> Result<FxRate, MarketDataError> {
        let raw = body
            .rates
            .get(to)
            .copied()
            .ok_or_else(|| MarketDataError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        if !raw.is_finite() || raw <= 0.0 {
            return Err(MarketDataError::ValidationFailed {
                message: format!("{}/{} rate must be positive, got {}", from, to, raw),
            });
        }

        let rate = Decimal::try_from(raw).map_err(|_| MarketDataError::ValidationFailed {
            message: "Failed to convert rate to decimal".to_string(),
        })?;

        let fx_rate = FxRate::new(from.to_string(), to.to_string(), rate, PROVIDER_ID);
        Ok(match body.date {
            Some(date) => fx_rate.with_date(date),
            None => fx_rate,
        })
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxRate, MarketDataError> {
        let url = format!("{}/latest?from={}&to={}", self.base_url, from, to);
        debug!("Fetching {}/{} from {}", from, to, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Frankfurter rate limited request for {}/{}", from, to);
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            warn!("Frankfurter returned {} for {}/{}", status, from, to);
            return Err(Self::provider_error(format!("HTTP {}", status)));
        }

        let body: LatestResponse = response
            .json()
            .await
            .map_err(|e| Self::provider_error(e.to_string()))?;

        Self::parse_latest(body, from, to)
    }
}
