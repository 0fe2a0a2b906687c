use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Currency, ProviderId};

/// Exchange rate quoted by a provider: 1 `from` = `rate` `to`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxRate {
    pub from_currency: Currency,
    pub to_currency: Currency,
    pub rate: Decimal,

    /// Business day the provider reports the rate for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Provider that produced the rate (FRANKFURTER, MANUAL, ...)
    pub source: ProviderId,

    /// When the rate was fetched
    pub timestamp: DateTime<Utc>,
}

impl FxRate {
    /// Create a rate fetched now with no provider date attached
    pub fn new(
        from_currency: impl Into<Currency>,
        to_currency: impl Into<Currency>,
        rate: Decimal,
        source: impl Into<ProviderId>,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
            date: None,
            source: source.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
