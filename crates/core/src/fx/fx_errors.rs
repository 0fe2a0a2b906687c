use akkucalc_market_data::MarketDataError;
use thiserror::Error;

use super::fx_model::Currency;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),
}

/// Failure of a whole rate refresh. The previous snapshot stays in effect.
#[derive(Error, Debug)]
pub enum RateFetchError {
    #[error("rates unavailable: {currency}/CHF - {source}")]
    Provider {
        currency: Currency,
        #[source]
        source: MarketDataError,
    },

    #[error("rates unavailable: {0}")]
    InvalidRate(#[from] FxError),
}
