use std::fmt::Write;

use super::cost_engine::{calculate_costs, line_total};
use super::formatting::{currency_option_label, format_amount, format_home_amount};
use crate::errors::Result;
use crate::fx::RateSnapshot;
use crate::labels;
use crate::orders::OrderLedger;

/// Itemized plain-text rendering of an order, German labels.
///
/// ```text
/// Akku Bestellkalkulator
///
/// Währung: CHF
///
/// Bestellpositionen
/// 1. LiPo / P45B: 10 Stk. × 2.50 CHF = 25.00 CHF
///
/// Zwischensumme: 25.00 CHF
/// Versand: 20.00 CHF
/// Zoll (8.1%): 3.65 CHF
/// Gesamtbetrag: 48.65 CHF
/// ```
pub fn render_summary(ledger: &OrderLedger, rates: &RateSnapshot) -> Result<String> {
    let currency = ledger.currency();
    let costs = calculate_costs(ledger, rates)?;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", labels::APP_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}: {}",
        labels::CURRENCY,
        currency_option_label(currency, rates)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", labels::LINE_ITEMS_HEADING);
    for (position, item) in ledger.line_items().iter().enumerate() {
        let item_total = line_total(item, currency, rates)?;
        let _ = writeln!(
            out,
            "{}. {} / {}: {} {} × {} {} = {}",
            position + 1,
            item.battery_type.label(),
            item.cell_type,
            item.quantity,
            labels::QUANTITY_ABBREVIATION,
            format_amount(item.unit_price),
            currency,
            format_home_amount(item_total)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", labels::SUBTOTAL, format_home_amount(costs.subtotal));
    let _ = writeln!(out, "{}: {}", labels::SHIPPING, format_home_amount(costs.shipping_home));
    let _ = writeln!(out, "{}: {}", labels::DUTY, format_home_amount(costs.duty));
    let _ = writeln!(out, "{}: {}", labels::GRAND_TOTAL, format_home_amount(costs.total));

    Ok(out)
}
