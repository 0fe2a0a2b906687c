//! FX (Foreign Exchange) module - currencies, rate snapshots and the rate provider seam.

mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;

pub use fx_errors::{FxError, RateFetchError};
pub use fx_model::{Currency, RateSnapshot};
pub use fx_service::FxRateService;
pub use fx_traits::RateProviderTrait;
