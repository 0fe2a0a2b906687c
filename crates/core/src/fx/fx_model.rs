use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::fx_errors::FxError;

/// Billing currencies an order can be entered in. CHF is the home currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Chf,
    Eur,
    Usd,
}

impl Currency {
    /// Selector order
    pub const ALL: [Currency; 3] = [Currency::Chf, Currency::Eur, Currency::Usd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Chf => "CHF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Currency::Chf)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CHF" => Ok(Currency::Chf),
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            _ => Err(FxError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// CHF-per-unit rates for EUR and USD, replaced as a whole on every
/// successful refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    #[serde(rename = "EUR")]
    pub eur: Decimal,
    #[serde(rename = "USD")]
    pub usd: Decimal,
    /// `None` until the first successful fetch
    #[serde(rename = "fetchedAt")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    /// Fetched snapshot. Both rates must be strictly positive.
    pub fn new(eur: Decimal, usd: Decimal, fetched_at: DateTime<Utc>) -> Result<Self, FxError> {
        for (currency, rate) in [(Currency::Eur, eur), (Currency::Usd, usd)] {
            if rate <= Decimal::ZERO {
                return Err(FxError::InvalidExchangeRate(format!(
                    "{}/CHF must be positive, got {}",
                    currency, rate
                )));
            }
        }
        Ok(Self {
            eur,
            usd,
            fetched_at: Some(fetched_at),
        })
    }

    /// 1:1 rates used before any fetch has succeeded.
    pub fn parity() -> Self {
        Self {
            eur: Decimal::ONE,
            usd: Decimal::ONE,
            fetched_at: None,
        }
    }

    /// CHF per unit of `currency`.
    pub fn rate_for(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Chf => Decimal::ONE,
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        }
    }

    pub fn is_parity_default(&self) -> bool {
        self.fetched_at.is_none()
    }
}

impl Default for RateSnapshot {
    fn default() -> Self {
        Self::parity()
    }
}
