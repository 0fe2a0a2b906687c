use rust_decimal::Decimal;

use super::cost_model::CostBreakdown;
use crate::constants::DUTY_RATE;
use crate::errors::{Error, Result};
use crate::fx::{Currency, RateSnapshot};
use crate::orders::{LineItem, OrderLedger};

fn checked(value: Option<Decimal>) -> Result<Decimal> {
    value.ok_or(Error::AmountOverflow)
}

/// Converts `amount` given in `currency` to CHF.
pub fn convert_to_home(amount: Decimal, currency: Currency, rates: &RateSnapshot) -> Result<Decimal> {
    if currency.is_home() {
        return Ok(amount);
    }
    checked(amount.checked_mul(rates.rate_for(currency)))
}

/// `quantity × unit price` of one item, in CHF.
pub fn line_total(item: &LineItem, currency: Currency, rates: &RateSnapshot) -> Result<Decimal> {
    let unit_price = convert_to_home(item.unit_price, currency, rates)?;
    checked(Decimal::from(item.quantity).checked_mul(unit_price))
}

/// Sum of `quantity × unit price` over all items, in CHF.
pub fn subtotal(line_items: &[LineItem], currency: Currency, rates: &RateSnapshot) -> Result<Decimal> {
    line_items.iter().try_fold(Decimal::ZERO, |sum, item| {
        checked(sum.checked_add(line_total(item, currency, rates)?))
    })
}

/// Full breakdown for a ledger. Duty is charged on subtotal plus shipping.
///
/// Fails with [`Error::AmountOverflow`] instead of panicking when the
/// amounts leave the decimal range.
pub fn calculate_costs(ledger: &OrderLedger, rates: &RateSnapshot) -> Result<CostBreakdown> {
    let subtotal = subtotal(ledger.line_items(), ledger.currency(), rates)?;
    let shipping_home = convert_to_home(ledger.shipping_cost(), ledger.currency(), rates)?;
    let base = checked(subtotal.checked_add(shipping_home))?;
    let duty = checked(base.checked_mul(DUTY_RATE))?;

    Ok(CostBreakdown {
        subtotal,
        shipping_home,
        base,
        duty,
        total: checked(base.checked_add(duty))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::LineItemUpdate;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn rates(eur: Decimal, usd: Decimal) -> RateSnapshot {
        RateSnapshot::new(eur, usd, Utc::now()).unwrap()
    }

    fn ledger_with_item(quantity: u32, unit_price: Decimal) -> OrderLedger {
        let mut ledger = OrderLedger::default();
        ledger
            .update_line_item(1, LineItemUpdate::SetQuantity(quantity))
            .unwrap();
        ledger
            .update_line_item(1, LineItemUpdate::SetUnitPrice(unit_price))
            .unwrap();
        ledger
    }

    #[test]
    fn test_convert_to_home() {
        let rates = rates(dec!(0.95), dec!(0.88));
        assert_eq!(convert_to_home(dec!(10), Currency::Chf, &rates).unwrap(), dec!(10));
        assert_eq!(convert_to_home(dec!(10), Currency::Eur, &rates).unwrap(), dec!(9.5));
        assert_eq!(convert_to_home(dec!(10), Currency::Usd, &rates).unwrap(), dec!(8.8));
    }

    #[test]
    fn test_chf_order_with_shipping() {
        let mut ledger = ledger_with_item(10, dec!(2.50));
        ledger.set_shipping_cost(dec!(20.00)).unwrap();

        let costs = calculate_costs(&ledger, &RateSnapshot::parity()).unwrap();
        assert_eq!(costs.subtotal, dec!(25.00));
        assert_eq!(costs.shipping_home, dec!(20.00));
        assert_eq!(costs.base, dec!(45.00));
        assert_eq!(costs.duty, dec!(3.645));
        assert_eq!(costs.total, dec!(48.645));
    }

    #[test]
    fn test_eur_order_is_converted() {
        let mut ledger = ledger_with_item(2, dec!(10));
        ledger.set_currency(Currency::Eur);

        let costs = calculate_costs(&ledger, &rates(dec!(0.95), dec!(1))).unwrap();
        assert_eq!(costs.subtotal, dec!(19.0));
        assert_eq!(costs.base, dec!(19.0));
        assert_eq!(costs.duty, dec!(1.539));
        assert_eq!(costs.total, dec!(20.539));
    }

    #[test]
    fn test_shipping_is_converted_with_items() {
        let mut ledger = ledger_with_item(1, dec!(100));
        ledger.set_currency(Currency::Usd);
        ledger.set_shipping_cost(dec!(10)).unwrap();

        let costs = calculate_costs(&ledger, &rates(dec!(1), dec!(0.9))).unwrap();
        assert_eq!(costs.subtotal, dec!(90));
        assert_eq!(costs.shipping_home, dec!(9));
        assert_eq!(costs.duty, dec!(99) * DUTY_RATE);
    }

    #[test]
    fn test_empty_ledger_costs_nothing() {
        let mut ledger = OrderLedger::empty();
        ledger.set_currency(Currency::Eur);
        let costs = calculate_costs(&ledger, &rates(dec!(0.95), dec!(0.88))).unwrap();
        assert_eq!(costs, CostBreakdown::default());
    }

    #[test]
    fn test_overflowing_totals_are_an_error() {
        let mut item = LineItem::new(1);
        item.quantity = 2;
        item.unit_price = dec!(40000000000000000000000000000);
        let rates = RateSnapshot::parity();

        assert!(matches!(
            line_total(&item, Currency::Chf, &rates),
            Err(Error::AmountOverflow)
        ));
        assert!(matches!(
            subtotal(&[item], Currency::Chf, &rates),
            Err(Error::AmountOverflow)
        ));
    }

    #[test]
    fn test_overflowing_conversion_is_an_error() {
        let rates = rates(dec!(1000), dec!(1));
        assert!(matches!(
            convert_to_home(dec!(40000000000000000000000000000), Currency::Eur, &rates),
            Err(Error::AmountOverflow)
        ));
    }
}
