use akkucalc_core::{
    costs::{currency_option_label, format_amount, format_home_amount, format_rate},
    labels, BatteryType, CalculatorView, CellType, CostBreakdown, Currency, LineItem,
    RateSnapshot, RateStatus,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub labels: ViewLabels,
    pub line_items: Vec<LineItem>,
    pub shipping_cost: Decimal,
    pub currency: Currency,
    pub currency_options: Vec<CurrencyOption>,
    pub rates: RatesResponse,
    pub status: RateStatus,
    /// Loading or error text to show next to the form, if any.
    pub status_message: Option<String>,
    pub costs: CostsResponse,
}

impl From<CalculatorView> for CalculatorResponse {
    fn from(view: CalculatorView) -> Self {
        let status_message = match &view.status {
            RateStatus::Loading => Some(labels::LOADING_RATES.to_string()),
            RateStatus::Ready => None,
            RateStatus::Error { message } => Some(message.clone()),
        };
        Self {
            labels: ViewLabels::default(),
            line_items: view.ledger.line_items().to_vec(),
            shipping_cost: view.ledger.shipping_cost(),
            currency: view.ledger.currency(),
            currency_options: Currency::ALL
                .iter()
                .map(|c| CurrencyOption {
                    value: *c,
                    label: currency_option_label(*c, &view.rates),
                })
                .collect(),
            rates: RatesResponse::from(&view.rates),
            status: view.status,
            status_message,
            costs: CostsResponse::from(view.costs),
        }
    }
}

/// Fixed German captions for the form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLabels {
    pub title: &'static str,
    pub currency: &'static str,
    pub line_items: &'static str,
    pub add_line_item: &'static str,
    pub subtotal: &'static str,
    pub shipping: &'static str,
    pub duty: &'static str,
    pub grand_total: &'static str,
}

impl Default for ViewLabels {
    fn default() -> Self {
        Self {
            title: labels::APP_TITLE,
            currency: labels::CURRENCY,
            line_items: labels::LINE_ITEMS_HEADING,
            add_line_item: labels::ADD_LINE_ITEM,
            subtotal: labels::SUBTOTAL,
            shipping: labels::SHIPPING,
            duty: labels::DUTY,
            grand_total: labels::GRAND_TOTAL,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyOption {
    pub value: Currency,
    pub label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesResponse {
    pub eur: Decimal,
    pub usd: Decimal,
    pub eur_display: String,
    pub usd_display: String,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl From<&RateSnapshot> for RatesResponse {
    fn from(rates: &RateSnapshot) -> Self {
        Self {
            eur: rates.eur,
            usd: rates.usd,
            eur_display: format_rate(rates.eur),
            usd_display: format_rate(rates.usd),
            fetched_at: rates.fetched_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostsResponse {
    pub subtotal: Decimal,
    pub shipping_home: Decimal,
    pub base: Decimal,
    pub duty: Decimal,
    pub total: Decimal,
    pub subtotal_display: String,
    pub shipping_home_display: String,
    pub duty_display: String,
    pub total_display: String,
}

impl From<CostBreakdown> for CostsResponse {
    fn from(costs: CostBreakdown) -> Self {
        Self {
            subtotal: costs.subtotal,
            shipping_home: costs.shipping_home,
            base: costs.base,
            duty: costs.duty,
            total: costs.total,
            subtotal_display: format_amount(costs.subtotal),
            shipping_home_display: format_amount(costs.shipping_home),
            duty_display: format_amount(costs.duty),
            total_display: format_home_amount(costs.total),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub battery_types: Vec<BatteryTypeOption>,
    pub currencies: Vec<Currency>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryTypeOption {
    pub value: BatteryType,
    pub label: &'static str,
    pub cell_types: Vec<CellType>,
}

impl CatalogResponse {
    pub fn build() -> Self {
        Self {
            battery_types: BatteryType::ALL
                .iter()
                .map(|t| BatteryTypeOption {
                    value: *t,
                    label: t.label(),
                    cell_types: t.allowed_cell_types().to_vec(),
                })
                .collect(),
            currencies: Currency::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    pub shipping_cost: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRequest {
    pub currency: String,
}
