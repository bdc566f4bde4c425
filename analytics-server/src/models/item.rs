//! Item records

use serde::{Deserialize, Serialize};

/// A stored item, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /items/`.
///
/// `id` is accepted so clients can echo a full record back, but the store
/// always assigns the identifier and the supplied value is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}
