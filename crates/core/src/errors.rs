//! Core error types for the Akkucalc calculator.
//!
//! Validation errors are raised at the input boundary before the ledger is
//! touched. Rate fetch failures are session state, not errors. Arithmetic
//! overflow surfaces as `AmountOverflow` instead of a panic.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::constants::{MAX_AMOUNT, MAX_QUANTITY};
use crate::fx::FxError;
use crate::orders::{BatteryType, CellType};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Order amounts exceed the supported range")]
    AmountOverflow,

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Rejected user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("Quantity must be between 1 and {max}, got {0}", max = MAX_QUANTITY)]
    InvalidQuantity(u32),

    #[error("{field} must not exceed {max}, got {value}", max = MAX_AMOUNT)]
    AmountTooLarge { field: &'static str, value: Decimal },

    #[error("Cell type {cell_type} is not available for {battery_type}")]
    CellTypeNotAllowed {
        battery_type: BatteryType,
        cell_type: CellType,
    },
}
