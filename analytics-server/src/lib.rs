//! analytics-server: item storage and events over HTTP
//!
//! Serves a small CRUD surface for items persisted through sqlx (SQLite by
//! default, Postgres when `DATABASE_URL` points at one) and a placeholder
//! events listing with no backing store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, Database, DbError, StoreKind, DEFAULT_DATABASE_URL};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
