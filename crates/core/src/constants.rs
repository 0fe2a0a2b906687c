use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency every total is expressed in
pub const HOME_CURRENCY: &str = "CHF";

/// Customs duty applied to subtotal plus shipping (8.1%)
pub const DUTY_RATE: Decimal = dec!(0.081);

/// Decimal precision for money display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for exchange rate display
pub const RATE_DISPLAY_PRECISION: u32 = 4;

/// Id given to the first line item of a fresh ledger
pub const FIRST_LINE_ITEM_ID: u32 = 1;

/// Largest accepted unit price or shipping cost, in the order currency
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Largest accepted quantity per line item
pub const MAX_QUANTITY: u32 = 1_000_000;
