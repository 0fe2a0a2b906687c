use std::sync::Arc;

use akkucalc_core::{errors::Error as CoreError, Currency};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{CalculatorResponse, CurrencyRequest, ShippingRequest},
};

/// Current session: ledger, rates, status and the computed breakdown.
async fn get_calculator(State(state): State<Arc<AppState>>) -> ApiResult<Json<CalculatorResponse>> {
    let view = state.calculator.get_view()?;
    Ok(Json(CalculatorResponse::from(view)))
}

/// Itemized plain-text rendering of the order.
async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let text = state.calculator.get_summary()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

async fn set_shipping(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ShippingRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(body) = payload?;
    state.calculator.set_shipping_cost(body.shipping_cost)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_currency(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CurrencyRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(body) = payload?;
    let currency: Currency = body.currency.parse().map_err(CoreError::from)?;
    state.calculator.set_currency(currency)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/calculator", get(get_calculator))
        .route("/calculator/summary", get(get_summary))
        .route("/shipping", put(set_shipping))
        .route("/currency", put(set_currency))
}
