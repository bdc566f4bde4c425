//! Item endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{Item, NewItem};

/// POST /items/ - insert an item, the store picks the id
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<NewItem>,
) -> Result<Json<Item>, ApiError> {
    if let Some(id) = req.id {
        tracing::debug!(id, "ignoring client-supplied item id");
    }

    let item = ItemRepo::new(&state.db).create(&req.name).await?;
    Ok(Json(item))
}

/// GET /items/ - every stored item, no pagination
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemRepo::new(&state.db).list().await?;
    Ok(Json(items))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items", get(list_items).post(create_item))
}
