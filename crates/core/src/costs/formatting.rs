use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, HOME_CURRENCY, RATE_DISPLAY_PRECISION};
use crate::fx::{Currency, RateSnapshot};

fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// Money with exactly two fraction digits, halves rounded away from zero.
pub fn format_amount(value: Decimal) -> String {
    fixed(value, DISPLAY_DECIMAL_PRECISION)
}

/// e.g. `48.65 CHF`
pub fn format_home_amount(value: Decimal) -> String {
    format!("{} {}", format_amount(value), HOME_CURRENCY)
}

/// Exchange rate with exactly four fraction digits.
pub fn format_rate(value: Decimal) -> String {
    fixed(value, RATE_DISPLAY_PRECISION)
}

/// Currency selector entry: `CHF`, or `EUR (1 EUR = 0.9412 CHF)`.
pub fn currency_option_label(currency: Currency, rates: &RateSnapshot) -> String {
    if currency.is_home() {
        return currency.to_string();
    }
    format!(
        "{currency} (1 {currency} = {} {})",
        format_rate(rates.rate_for(currency)),
        HOME_CURRENCY
    )
}
