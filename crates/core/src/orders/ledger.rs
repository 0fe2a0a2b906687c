use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::orders_model::{validate_amount, LineItem, LineItemUpdate};
use crate::constants::FIRST_LINE_ITEM_ID;
use crate::errors::ValidationError;
use crate::fx::Currency;

/// Mutable order state of one calculator session.
///
/// Line items keep insertion order, which is also display order. Ids are
/// allocated as `max + 1`, so an id freed by a removal of the last item can
/// be handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLedger {
    line_items: Vec<LineItem>,
    shipping_cost: Decimal,
    currency: Currency,
}

impl OrderLedger {
    /// Ledger with no line items, zero shipping, billed in CHF.
    pub fn empty() -> Self {
        Self {
            line_items: Vec::new(),
            shipping_cost: Decimal::ZERO,
            currency: Currency::default(),
        }
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn line_item(&self, id: u32) -> Option<&LineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    pub fn shipping_cost(&self) -> Decimal {
        self.shipping_cost
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Id the next added line item will receive.
    pub fn next_id(&self) -> u32 {
        self.line_items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(FIRST_LINE_ITEM_ID, |max| max + 1)
    }

    /// Appends a default line item and returns it.
    pub fn add_line_item(&mut self) -> &LineItem {
        let item = LineItem::new(self.next_id());
        self.line_items.push(item);
        &self.line_items[self.line_items.len() - 1]
    }

    /// Removes the item with `id`. Unknown ids are a no-op.
    pub fn remove_line_item(&mut self, id: u32) -> Option<LineItem> {
        let index = self.line_items.iter().position(|item| item.id == id)?;
        Some(self.line_items.remove(index))
    }

    /// Applies `update` to the item with `id`.
    ///
    /// Returns `Ok(None)` when no such item exists. Switching the battery type
    /// resets the cell type to the new type's first allowed cell when the
    /// current one is not offered for it.
    pub fn update_line_item(
        &mut self,
        id: u32,
        update: LineItemUpdate,
    ) -> Result<Option<&LineItem>, ValidationError> {
        update.validate()?;

        let Some(item) = self.line_items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        match update {
            LineItemUpdate::SetBatteryType(battery_type) => {
                item.battery_type = battery_type;
                if !battery_type.allows(item.cell_type) {
                    let fallback = battery_type.default_cell_type();
                    log::debug!(
                        "Line item {}: {} not offered for {}, switching to {}",
                        id,
                        item.cell_type,
                        battery_type,
                        fallback
                    );
                    item.cell_type = fallback;
                }
            }
            LineItemUpdate::SetCellType(cell_type) => {
                if !item.battery_type.allows(cell_type) {
                    return Err(ValidationError::CellTypeNotAllowed {
                        battery_type: item.battery_type,
                        cell_type,
                    });
                }
                item.cell_type = cell_type;
            }
            LineItemUpdate::SetQuantity(quantity) => item.quantity = quantity,
            LineItemUpdate::SetUnitPrice(unit_price) => item.unit_price = unit_price,
        }

        Ok(Some(&*item))
    }

    pub fn set_shipping_cost(&mut self, shipping_cost: Decimal) -> Result<(), ValidationError> {
        validate_amount("shippingCost", shipping_cost)?;
        self.shipping_cost = shipping_cost;
        Ok(())
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}

impl Default for OrderLedger {
    /// A fresh session starts with a single default line item.
    fn default() -> Self {
        let mut ledger = Self::empty();
        ledger.add_line_item();
        ledger
    }
}
