use async_trait::async_trait;
use rust_decimal::Decimal;

use super::calculator_model::{CalculatorView, RateStatus};
use crate::errors::Result;
use crate::fx::Currency;
use crate::orders::{LineItem, LineItemUpdate};

/// Trait defining the contract for calculator session operations.
#[async_trait]
pub trait CalculatorServiceTrait: Send + Sync {
    fn get_view(&self) -> Result<CalculatorView>;
    fn get_summary(&self) -> Result<String>;
    fn add_line_item(&self) -> Result<LineItem>;
    fn remove_line_item(&self, id: u32) -> Result<Option<LineItem>>;
    fn update_line_item(&self, id: u32, update: LineItemUpdate) -> Result<Option<LineItem>>;
    fn set_shipping_cost(&self, shipping_cost: Decimal) -> Result<()>;
    fn set_currency(&self, currency: Currency) -> Result<()>;

    /// Re-enters `Loading`, fetches a fresh snapshot and settles on `Ready`
    /// or `Error`. A failed fetch is reported through the returned status,
    /// not as an `Err`.
    async fn refresh_rates(&self) -> Result<RateStatus>;
}
