//! Calculator module - one order session: ledger, rates and the rate loading state machine.

mod calculator_model;
mod calculator_service;
mod calculator_traits;

pub use calculator_model::{CalculatorState, CalculatorView, RateStatus};
pub use calculator_service::CalculatorService;
pub use calculator_traits::CalculatorServiceTrait;
