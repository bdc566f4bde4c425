//! Database connection pool management
//!
//! Uses the sqlx `Any` driver so the same repository code runs against the
//! default SQLite file and a Postgres server named by `DATABASE_URL`.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use super::DbError;

/// Store used when `DATABASE_URL` is unset: a local SQLite file,
/// created on first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://test.db?mode=rwc";

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Backend behind a connection string, decided by its scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Postgres,
}

impl StoreKind {
    /// Classify a connection string by its URL scheme.
    ///
    /// # Example
    /// ```
    /// use analytics_server::db::StoreKind;
    ///
    /// assert_eq!(StoreKind::from_url("sqlite://test.db").unwrap(), StoreKind::Sqlite);
    /// assert_eq!(StoreKind::from_url("postgres://localhost/app").unwrap(), StoreKind::Postgres);
    /// assert!(StoreKind::from_url("mysql://localhost/app").is_err());
    /// ```
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        let scheme = database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default();

        match scheme.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(DbError::UnsupportedUrl {
                scheme: scheme.to_owned(),
            }),
        }
    }
}

/// Storage client: the pool plus the backend it talks to.
///
/// Constructed once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    kind: StoreKind,
}

impl Database {
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create a connection pool for `database_url`.
///
/// # Errors
///
/// Returns an error if the scheme is not supported or the connection fails.
///
/// # Example
///
/// ```ignore
/// let db = create_pool("sqlite://test.db?mode=rwc").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<Database, DbError> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite or PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<Database, DbError> {
    let kind = StoreKind::from_url(database_url)?;
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::debug!(?kind, max_connections, "database pool created");
    Ok(Database { pool, kind })
}
