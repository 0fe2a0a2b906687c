use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{main_lib::AppState, models::CatalogResponse};

/// Battery types with their cell types, and the selectable currencies.
async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::build())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/catalog", get(get_catalog))
}
