//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One pool per process, built in `serve` and handed to handlers via state
//! - Connections are borrowed per query, never held across requests
//! - Schema is created once at startup, before the listener binds

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options, Database, StoreKind, DEFAULT_DATABASE_URL};
pub use repos::*;
pub use schema::init_schema;
