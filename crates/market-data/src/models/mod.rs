//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `fx_rate` - A single provider-sourced exchange rate (FxRate)

mod fx_rate;
mod types;

pub use fx_rate::FxRate;
pub use types::{Currency, ProviderId};
