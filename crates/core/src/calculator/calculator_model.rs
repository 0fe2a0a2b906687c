use serde::{Deserialize, Serialize};

use crate::costs::{calculate_costs, CostBreakdown};
use crate::errors::Error;
use crate::fx::RateSnapshot;
use crate::orders::OrderLedger;

/// Where the session stands with its exchange rates.
///
/// ```text
/// Loading --ok--> Ready
///    |  <--refresh--'
///    '----err--> Error --refresh--> Loading
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RateStatus {
    Loading,
    Ready,
    Error { message: String },
}

impl RateStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RateStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RateStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Mutable state of a session. Refreshes only touch `rates` and `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub ledger: OrderLedger,
    pub rates: RateSnapshot,
    pub status: RateStatus,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            ledger: OrderLedger::default(),
            rates: RateSnapshot::parity(),
            status: RateStatus::Loading,
        }
    }
}

/// Point-in-time copy of a session with its costs computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorView {
    pub ledger: OrderLedger,
    pub rates: RateSnapshot,
    pub status: RateStatus,
    pub costs: CostBreakdown,
}

impl TryFrom<&CalculatorState> for CalculatorView {
    type Error = Error;

    fn try_from(state: &CalculatorState) -> Result<Self, Self::Error> {
        Ok(Self {
            ledger: state.ledger.clone(),
            rates: state.rates.clone(),
            status: state.status.clone(),
            costs: calculate_costs(&state.ledger, &state.rates)?,
        })
    }
}
