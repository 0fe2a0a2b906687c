use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::calculator_model::{CalculatorState, CalculatorView, RateStatus};
use super::calculator_traits::CalculatorServiceTrait;
use crate::costs::render_summary;
use crate::errors::{Error, Result};
use crate::fx::{Currency, RateProviderTrait};
use crate::labels;
use crate::orders::{LineItem, LineItemUpdate};

/// Owns one calculator session.
///
/// The lock is never held across the rate fetch: a refresh marks the session
/// `Loading`, releases, awaits the provider, then re-locks to apply the
/// result. Overlapping refreshes are allowed; the last one to finish wins.
/// A refresh dropped before its fetch returns leaves the session in `Error`.
#[derive(Clone)]
pub struct CalculatorService {
    rate_provider: Arc<dyn RateProviderTrait>,
    state: Arc<RwLock<CalculatorState>>,
}

impl CalculatorService {
    pub fn new(rate_provider: Arc<dyn RateProviderTrait>) -> Self {
        Self::with_state(rate_provider, CalculatorState::default())
    }

    pub fn with_state(rate_provider: Arc<dyn RateProviderTrait>, state: CalculatorState) -> Self {
        Self {
            rate_provider,
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, CalculatorState>> {
        self.state
            .read()
            .map_err(|e| Error::Unexpected(format!("Calculator state lock poisoned: {}", e)))
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, CalculatorState>> {
        self.state
            .write()
            .map_err(|e| Error::Unexpected(format!("Calculator state lock poisoned: {}", e)))
    }
}

#[async_trait]
impl CalculatorServiceTrait for CalculatorService {
    fn get_view(&self) -> Result<CalculatorView> {
        let state = self.read_state()?;
        CalculatorView::try_from(&*state)
    }

    fn get_summary(&self) -> Result<String> {
        let state = self.read_state()?;
        render_summary(&state.ledger, &state.rates)
    }

    fn add_line_item(&self) -> Result<LineItem> {
        let mut state = self.write_state()?;
        Ok(state.ledger.add_line_item().clone())
    }

    fn remove_line_item(&self, id: u32) -> Result<Option<LineItem>> {
        let mut state = self.write_state()?;
        Ok(state.ledger.remove_line_item(id))
    }

    fn update_line_item(&self, id: u32, update: LineItemUpdate) -> Result<Option<LineItem>> {
        let mut state = self.write_state()?;
        let updated = state.ledger.update_line_item(id, update)?;
        Ok(updated.cloned())
    }

    fn set_shipping_cost(&self, shipping_cost: Decimal) -> Result<()> {
        let mut state = self.write_state()?;
        state.ledger.set_shipping_cost(shipping_cost)?;
        Ok(())
    }

    fn set_currency(&self, currency: Currency) -> Result<()> {
        let mut state = self.write_state()?;
        state.ledger.set_currency(currency);
        Ok(())
    }

    async fn refresh_rates(&self) -> Result<RateStatus> {
        {
            let mut state = self.write_state()?;
            state.status = RateStatus::Loading;
        }

        let mut pending = PendingRefresh::new(&self.state);
        let fetched = self.rate_provider.fetch_rates().await;
        pending.settle();

        let mut state = self.write_state()?;
        match fetched {
            Ok(snapshot) => {
                log::info!(
                    "Exchange rates updated: EUR/CHF {} USD/CHF {}",
                    snapshot.eur,
                    snapshot.usd
                );
                state.rates = snapshot;
                state.status = RateStatus::Ready;
            }
            Err(e) => {
                log::warn!("Keeping previous exchange rates: {}", e);
                state.status = rates_unavailable();
            }
        }
        Ok(state.status.clone())
    }
}

fn rates_unavailable() -> RateStatus {
    RateStatus::Error {
        message: labels::RATES_UNAVAILABLE.to_string(),
    }
}

/// Moves a session out of `Loading` when a refresh is dropped mid-fetch,
/// e.g. by a request timeout or a disconnected client.
struct PendingRefresh<'a> {
    state: &'a RwLock<CalculatorState>,
    settled: bool,
}

impl<'a> PendingRefresh<'a> {
    fn new(state: &'a RwLock<CalculatorState>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for PendingRefresh<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut state) = self.state.write() {
            if state.status.is_loading() {
                log::warn!("Rate refresh cancelled before it settled");
                state.status = rates_unavailable();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_AMOUNT;
    use crate::errors::ValidationError;
    use crate::fx::{RateFetchError, RateSnapshot};
    use crate::orders::{BatteryType, OrderLedger};
    use akkucalc_market_data::MarketDataError;
    use chrono::Utc;
    use futures::FutureExt;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    /// Replays queued outcomes, one per fetch.
    struct ScriptedRateProvider {
        outcomes: Mutex<Vec<std::result::Result<RateSnapshot, RateFetchError>>>,
    }

    impl ScriptedRateProvider {
        fn new(mut outcomes: Vec<std::result::Result<RateSnapshot, RateFetchError>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
            }
        }
    }

    #[async_trait]
    impl RateProviderTrait for ScriptedRateProvider {
        async fn fetch_rates(&self) -> std::result::Result<RateSnapshot, RateFetchError> {
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .expect("no scripted outcome left")
        }
    }

    fn snapshot(eur: Decimal, usd: Decimal) -> RateSnapshot {
        RateSnapshot::new(eur, usd, Utc::now()).unwrap()
    }

    fn eur_http_error() -> RateFetchError {
        RateFetchError::Provider {
            currency: Currency::Eur,
            source: MarketDataError::ProviderError {
                provider: "STUB".to_string(),
                message: "HTTP 500 Internal Server Error".to_string(),
            },
        }
    }

    fn service(outcomes: Vec<std::result::Result<RateSnapshot, RateFetchError>>) -> CalculatorService {
        CalculatorService::new(Arc::new(ScriptedRateProvider::new(outcomes)))
    }

    #[tokio::test]
    async fn test_successful_refresh_is_ready() {
        let service = service(vec![Ok(snapshot(dec!(0.95), dec!(0.88)))]);
        assert!(service.get_view().unwrap().status.is_loading());

        let status = service.refresh_rates().await.unwrap();
        assert_eq!(status, RateStatus::Ready);

        let view = service.get_view().unwrap();
        assert_eq!(view.rates.eur, dec!(0.95));
        assert_eq!(view.rates.usd, dec!(0.88));
    }

    #[tokio::test]
    async fn test_failed_first_fetch_keeps_parity_and_ledger() {
        let service = service(vec![Err(eur_http_error())]);
        service
            .update_line_item(1, LineItemUpdate::SetQuantity(4))
            .unwrap();
        service.set_currency(Currency::Eur).unwrap();
        let before = service.get_view().unwrap();

        let status = service.refresh_rates().await.unwrap();
        assert_eq!(
            status.error_message(),
            Some("Wechselkurse konnten nicht geladen werden.")
        );

        let after = service.get_view().unwrap();
        assert_eq!(after.rates, RateSnapshot::parity());
        assert_eq!(after.ledger, before.ledger);
        assert_eq!(after.ledger.currency(), Currency::Eur);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_known_rates() {
        let service = service(vec![
            Ok(snapshot(dec!(0.95), dec!(0.88))),
            Err(eur_http_error()),
        ]);
        service.refresh_rates().await.unwrap();
        let status = service.refresh_rates().await.unwrap();

        assert!(matches!(status, RateStatus::Error { .. }));
        let view = service.get_view().unwrap();
        assert_eq!(view.rates.eur, dec!(0.95));
        assert_eq!(view.rates.usd, dec!(0.88));
    }

    #[tokio::test]
    async fn test_refresh_after_error_recovers() {
        let service = service(vec![
            Err(eur_http_error()),
            Ok(snapshot(dec!(0.97), dec!(0.90))),
        ]);
        service.refresh_rates().await.unwrap();
        let status = service.refresh_rates().await.unwrap();

        assert_eq!(status, RateStatus::Ready);
        assert_eq!(service.get_view().unwrap().rates.eur, dec!(0.97));
    }

    #[tokio::test]
    async fn test_ledger_survives_refresh() {
        let service = service(vec![Ok(snapshot(dec!(0.95), dec!(0.88)))]);
        service.add_line_item().unwrap();
        service
            .update_line_item(2, LineItemUpdate::SetBatteryType(BatteryType::LiIon6s))
            .unwrap();
        service.set_shipping_cost(dec!(12.5)).unwrap();
        let before = service.get_view().unwrap().ledger;

        service.refresh_rates().await.unwrap();
        assert_eq!(service.get_view().unwrap().ledger, before);
    }

    #[test]
    fn test_view_costs_follow_rates() {
        let mut state = CalculatorState::default();
        state
            .ledger
            .update_line_item(1, LineItemUpdate::SetQuantity(2))
            .unwrap();
        state
            .ledger
            .update_line_item(1, LineItemUpdate::SetUnitPrice(dec!(10)))
            .unwrap();
        state.ledger.set_currency(Currency::Eur);
        state.rates = snapshot(dec!(0.95), dec!(1));
        let service = CalculatorService::with_state(Arc::new(ScriptedRateProvider::new(vec![])), state);

        let costs = service.get_view().unwrap().costs;
        assert_eq!(costs.subtotal, dec!(19.0));
        assert_eq!(costs.total, dec!(20.539));
    }

    #[test]
    fn test_invalid_input_is_rejected_without_change() {
        let service = service(vec![]);
        let before = service.get_view().unwrap().ledger;

        assert!(matches!(
            service.set_shipping_cost(dec!(-1)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service.update_line_item(1, LineItemUpdate::SetQuantity(0)),
            Err(Error::Validation(_))
        ));
        assert_eq!(service.get_view().unwrap().ledger, before);
    }

    #[test]
    fn test_update_and_remove_unknown_ids() {
        let service = service(vec![]);
        assert!(service
            .update_line_item(5, LineItemUpdate::SetQuantity(2))
            .unwrap()
            .is_none());
        assert!(service.remove_line_item(5).unwrap().is_none());
        assert_eq!(service.get_view().unwrap().ledger.line_items().len(), 1);
    }

    /// Fetch that never completes.
    struct StalledRateProvider;

    #[async_trait]
    impl RateProviderTrait for StalledRateProvider {
        async fn fetch_rates(&self) -> std::result::Result<RateSnapshot, RateFetchError> {
            futures::future::pending().await
        }
    }

    #[test]
    fn test_dropped_refresh_settles_on_error() {
        let mut state = CalculatorState::default();
        state.rates = snapshot(dec!(0.95), dec!(0.88));
        state.status = RateStatus::Ready;
        let service = CalculatorService::with_state(Arc::new(StalledRateProvider), state);

        // Polled once, still waiting on the provider, then dropped
        assert!(service.refresh_rates().now_or_never().is_none());

        let view = service.get_view().unwrap();
        assert_eq!(
            view.status.error_message(),
            Some("Wechselkurse konnten nicht geladen werden.")
        );
        assert_eq!(view.rates.eur, dec!(0.95));
    }

    #[tokio::test]
    async fn test_completed_refresh_is_not_overridden() {
        let service = service(vec![Ok(snapshot(dec!(0.95), dec!(0.88)))]);
        assert_eq!(service.refresh_rates().await.unwrap(), RateStatus::Ready);
        assert_eq!(service.get_view().unwrap().status, RateStatus::Ready);
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let service = service(vec![]);
        assert!(matches!(
            service.update_line_item(
                1,
                LineItemUpdate::SetUnitPrice(dec!(40000000000000000000000000000))
            ),
            Err(Error::Validation(ValidationError::AmountTooLarge { .. }))
        ));
        assert!(service.get_view().is_ok());
        assert!(service.get_summary().is_ok());
    }

    #[test]
    fn test_overflowing_state_is_an_error_not_a_panic() {
        let mut state = CalculatorState::default();
        state.ledger = OrderLedger::empty();
        let id = state.ledger.add_line_item().id;
        state
            .ledger
            .update_line_item(id, LineItemUpdate::SetQuantity(2))
            .unwrap();
        // Rates far outside anything the provider serves
        state.rates = snapshot(dec!(100000000000000000), dec!(1));
        state
            .ledger
            .update_line_item(id, LineItemUpdate::SetUnitPrice(MAX_AMOUNT))
            .unwrap();
        state.ledger.set_currency(Currency::Eur);
        let service = CalculatorService::with_state(Arc::new(StalledRateProvider), state);

        assert!(matches!(service.get_view(), Err(Error::AmountOverflow)));
        assert!(matches!(service.get_summary(), Err(Error::AmountOverflow)));
    }
}
