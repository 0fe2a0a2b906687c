use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_AMOUNT, MAX_QUANTITY};
use crate::errors::ValidationError;

/// Pack configurations that can be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BatteryType {
    #[default]
    #[serde(rename = "lipo")]
    Lipo,
    #[serde(rename = "li-ion-6s")]
    LiIon6s,
    #[serde(rename = "li-ion-6s2p")]
    LiIon6s2p,
    #[serde(rename = "li-ion-6s3p")]
    LiIon6s3p,
}

const ALL_CELL_TYPES: &[CellType] = &[CellType::P45B, CellType::P50B];

impl BatteryType {
    /// Selector order
    pub const ALL: [BatteryType; 4] = [
        BatteryType::Lipo,
        BatteryType::LiIon6s,
        BatteryType::LiIon6s2p,
        BatteryType::LiIon6s3p,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryType::Lipo => "lipo",
            BatteryType::LiIon6s => "li-ion-6s",
            BatteryType::LiIon6s2p => "li-ion-6s2p",
            BatteryType::LiIon6s3p => "li-ion-6s3p",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BatteryType::Lipo => "LiPo",
            BatteryType::LiIon6s => "Li-Ion 6S",
            BatteryType::LiIon6s2p => "Li-Ion 6S2P",
            BatteryType::LiIon6s3p => "Li-Ion 6S3P",
        }
    }

    /// Cell types offered for this pack. Every type currently shares the same set.
    pub fn allowed_cell_types(&self) -> &'static [CellType] {
        match self {
            BatteryType::Lipo
            | BatteryType::LiIon6s
            | BatteryType::LiIon6s2p
            | BatteryType::LiIon6s3p => ALL_CELL_TYPES,
        }
    }

    pub fn allows(&self, cell_type: CellType) -> bool {
        self.allowed_cell_types().contains(&cell_type)
    }

    /// First allowed cell type; the fallback when a pack change invalidates the cell.
    pub fn default_cell_type(&self) -> CellType {
        self.allowed_cell_types()
            .first()
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for BatteryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell models a pack can be built from.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    P45B,
    P50B,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::P45B => "P45B",
            CellType::P50B => "P50B",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One orderable battery configuration. `unit_price` is in the ledger's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u32,
    pub battery_type: BatteryType,
    pub cell_type: CellType,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// A LiPo/P45B item, quantity 1, price 0.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            battery_type: BatteryType::default(),
            cell_type: CellType::default(),
            quantity: 1,
            unit_price: Decimal::ZERO,
        }
    }
}

/// Single-field change to a line item.
///
/// On the wire: `{"field": "quantity", "value": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value")]
pub enum LineItemUpdate {
    #[serde(rename = "batteryType")]
    SetBatteryType(BatteryType),
    #[serde(rename = "cellType")]
    SetCellType(CellType),
    #[serde(rename = "quantity")]
    SetQuantity(u32),
    #[serde(rename = "unitPrice")]
    SetUnitPrice(Decimal),
}

impl LineItemUpdate {
    /// Checks that do not depend on the item being updated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            LineItemUpdate::SetQuantity(quantity)
                if !(1..=MAX_QUANTITY).contains(quantity) =>
            {
                Err(ValidationError::InvalidQuantity(*quantity))
            }
            LineItemUpdate::SetUnitPrice(price) => validate_amount("unitPrice", *price),
            _ => Ok(()),
        }
    }
}

/// Money input must lie in `0..=MAX_AMOUNT`.
pub(crate) fn validate_amount(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_battery_type_wire_names() {
        for battery_type in BatteryType::ALL {
            let json = serde_json::to_string(&battery_type).unwrap();
            assert_eq!(json, format!("\"{}\"", battery_type.as_str()));
            let parsed: BatteryType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, battery_type);
        }
    }

    #[test]
    fn test_battery_type_labels() {
        assert_eq!(BatteryType::Lipo.label(), "LiPo");
        assert_eq!(BatteryType::LiIon6s2p.label(), "Li-Ion 6S2P");
    }

    #[test]
    fn test_every_battery_type_offers_p45b_and_p50b() {
        for battery_type in BatteryType::ALL {
            assert_eq!(
                battery_type.allowed_cell_types(),
                &[CellType::P45B, CellType::P50B]
            );
            assert_eq!(battery_type.default_cell_type(), CellType::P45B);
        }
    }

    #[test]
    fn test_unknown_battery_type_is_rejected() {
        let result: Result<BatteryType, _> = serde_json::from_str("\"nimh\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_line_item_defaults() {
        let item = LineItem::new(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.battery_type, BatteryType::Lipo);
        assert_eq!(item.cell_type, CellType::P45B);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price, Decimal::ZERO);
    }

    #[test]
    fn test_update_wire_format() {
        let update: LineItemUpdate =
            serde_json::from_str(r#"{"field":"batteryType","value":"li-ion-6s3p"}"#).unwrap();
        assert_eq!(update, LineItemUpdate::SetBatteryType(BatteryType::LiIon6s3p));

        let update: LineItemUpdate =
            serde_json::from_str(r#"{"field":"quantity","value":10}"#).unwrap();
        assert_eq!(update, LineItemUpdate::SetQuantity(10));

        let update: LineItemUpdate =
            serde_json::from_str(r#"{"field":"unitPrice","value":2.5}"#).unwrap();
        assert_eq!(update, LineItemUpdate::SetUnitPrice(dec!(2.5)));
    }

    #[test]
    fn test_unknown_update_field_is_rejected() {
        let result: Result<LineItemUpdate, _> =
            serde_json::from_str(r#"{"field":"colour","value":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_update() {
        assert!(LineItemUpdate::SetQuantity(1).validate().is_ok());
        assert_eq!(
            LineItemUpdate::SetQuantity(0).validate(),
            Err(ValidationError::InvalidQuantity(0))
        );
        assert!(LineItemUpdate::SetUnitPrice(dec!(0)).validate().is_ok());
        assert!(LineItemUpdate::SetUnitPrice(dec!(-0.01)).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        assert!(LineItemUpdate::SetQuantity(MAX_QUANTITY).validate().is_ok());
        assert_eq!(
            LineItemUpdate::SetQuantity(MAX_QUANTITY + 1).validate(),
            Err(ValidationError::InvalidQuantity(MAX_QUANTITY + 1))
        );
        assert!(LineItemUpdate::SetUnitPrice(MAX_AMOUNT).validate().is_ok());
        assert_eq!(
            LineItemUpdate::SetUnitPrice(dec!(40000000000000000000000000000)).validate(),
            Err(ValidationError::AmountTooLarge {
                field: "unitPrice",
                value: dec!(40000000000000000000000000000),
            })
        );
    }
}
