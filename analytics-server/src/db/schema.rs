//! Table creation, run once at startup

use super::{Database, DbError, StoreKind};

const SQLITE_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const POSTGRES_ITEMS: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

/// Create every table the service needs.
///
/// Safe to call repeatedly; all statements use IF NOT EXISTS.
pub async fn init_schema(db: &Database) -> Result<(), DbError> {
    tracing::info!(kind = ?db.kind(), "Ensuring database schema");

    let ddl = match db.kind() {
        StoreKind::Sqlite => SQLITE_ITEMS,
        StoreKind::Postgres => POSTGRES_ITEMS,
    };

    sqlx::query(ddl).execute(db.pool()).await?;
    Ok(())
}
