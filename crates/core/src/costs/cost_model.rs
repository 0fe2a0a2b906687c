use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived totals in CHF. Unrounded; rounding happens only when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub subtotal: Decimal,
    pub shipping_home: Decimal,
    /// `subtotal + shipping_home`, the amount duty is charged on
    pub base: Decimal,
    pub duty: Decimal,
    pub total: Decimal,
}
