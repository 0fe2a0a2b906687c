//! Orders module - battery catalog, line items and the order ledger.

mod ledger;
mod orders_model;

pub use ledger::OrderLedger;
pub use orders_model::{BatteryType, CellType, LineItem, LineItemUpdate};
