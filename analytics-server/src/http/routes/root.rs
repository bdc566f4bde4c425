//! Welcome endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

const WELCOME: &str = "Bienvenue — Random Number App API";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn read_root() -> Json<RootResponse> {
    Json(RootResponse { message: WELCOME })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(read_root))
}
