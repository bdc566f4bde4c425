//! Database error type

/// Errors raised by the storage layer
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unsupported database URL scheme '{scheme}' (expected sqlite or postgres)")]
    UnsupportedUrl { scheme: String },
}
