use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::{error::ApiResult, main_lib::AppState, models::CalculatorResponse};

/// Refetches both rates and returns the session once the refresh settled.
/// A failed fetch still answers 200; the status carries the error.
async fn refresh_rates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CalculatorResponse>> {
    let status = state.calculator.refresh_rates().await?;
    tracing::debug!("Rate refresh settled: {:?}", status);
    let view = state.calculator.get_view()?;
    Ok(Json(CalculatorResponse::from(view)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates/refresh", post(refresh_rates))
}
