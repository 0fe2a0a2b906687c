//! Background rate fetch on startup.

use std::sync::Arc;
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Spawns the first exchange-rate fetch of the session.
pub fn start_initial_rate_fetch(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!("Fetching initial exchange rates...");
        run_rate_refresh(&state).await;
    })
}

/// Runs a single refresh and logs how it settled.
async fn run_rate_refresh(state: &Arc<AppState>) {
    match state.calculator.refresh_rates().await {
        Ok(status) => match status.error_message() {
            Some(message) => warn!("Initial rate fetch failed: {}", message),
            None => info!("Initial rate fetch settled: {:?}", status),
        },
        Err(e) => warn!("Initial rate fetch could not run: {}", e),
    }
}
