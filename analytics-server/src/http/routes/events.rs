//! Event endpoints
//!
//! Thin wrappers over the placeholder functions in `models::event`.

use axum::{routing::get, Json, Router};

use crate::http::extractors::EventId;
use crate::models::event::{get_event, list_events};
use crate::models::{Event, EventList};

/// GET /api/events/
async fn read_events() -> Json<EventList> {
    Json(list_events())
}

/// GET /api/events/{event_id}
async fn read_event(EventId(event_id): EventId) -> Json<Event> {
    Json(get_event(event_id))
}

/// Event routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/events/", get(read_events))
        .route("/api/events", get(read_events))
        .route("/api/events/{event_id}", get(read_event))
}
