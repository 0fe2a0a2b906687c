//! Fixed German user-facing strings.

pub const APP_TITLE: &str = "Akku Bestellkalkulator";
pub const LOADING_RATES: &str = "Lade Wechselkurse...";
pub const RATES_UNAVAILABLE: &str = "Wechselkurse konnten nicht geladen werden.";
pub const LINE_ITEMS_HEADING: &str = "Bestellpositionen";
pub const ADD_LINE_ITEM: &str = "Position hinzufügen";
pub const SUBTOTAL: &str = "Zwischensumme";
pub const SHIPPING: &str = "Versand";
pub const DUTY: &str = "Zoll (8.1%)";
pub const GRAND_TOTAL: &str = "Gesamtbetrag";
pub const QUANTITY_ABBREVIATION: &str = "Stk.";
pub const CURRENCY: &str = "Währung";
