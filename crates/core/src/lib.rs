//! Akkucalc Core - order ledger, FX conversion and cost calculation.
//!
//! This crate contains the business logic of the battery order calculator.
//! It is transport-agnostic: rates come in through [`fx::RateProviderTrait`]
//! and the server crate exposes [`calculator::CalculatorServiceTrait`].

pub mod calculator;
pub mod constants;
pub mod costs;
pub mod errors;
pub mod fx;
pub mod labels;
pub mod orders;

// Re-export the types every consumer touches
pub use calculator::{CalculatorService, CalculatorServiceTrait, CalculatorView, RateStatus};
pub use costs::CostBreakdown;
pub use fx::{Currency, RateSnapshot};
pub use orders::{BatteryType, CellType, LineItem, LineItemUpdate, OrderLedger};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
