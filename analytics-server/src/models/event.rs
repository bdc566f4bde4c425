//! Events - placeholder data with no backing store
//!
//! `list_events` and `get_event` return fixed values. There is no event
//! table; swap these functions for real lookups and the routes keep
//! working unchanged.

use serde::{Deserialize, Serialize};

/// Single event record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
}

/// Event listing envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventList {
    pub result: Vec<i64>,
}

/// Always `[1, 2, 3]`.
pub fn list_events() -> EventList {
    EventList {
        result: vec![1, 2, 3],
    }
}

/// Echoes the id back. No lookup, every id is "found".
pub fn get_event(event_id: i64) -> Event {
    Event { id: event_id }
}
