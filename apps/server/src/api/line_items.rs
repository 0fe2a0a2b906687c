use std::sync::Arc;

use akkucalc_core::{LineItem, LineItemUpdate};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn add_line_item(
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<LineItem>)> {
    let item = state.calculator.add_line_item()?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Applies one field change, e.g. `{"field": "quantity", "value": 3}`.
async fn update_line_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
    payload: Result<Json<LineItemUpdate>, JsonRejection>,
) -> ApiResult<Json<LineItem>> {
    let Json(update) = payload?;
    match state.calculator.update_line_item(id, update)? {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound),
    }
}

/// Removing an unknown id is not an error.
async fn delete_line_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.calculator.remove_line_item(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/line-items", post(add_line_item))
        .route(
            "/line-items/{id}",
            patch(update_line_item).delete(delete_line_item),
        )
}
