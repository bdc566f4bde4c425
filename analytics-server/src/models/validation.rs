//! Validation error types

use std::fmt;

/// Client input that could not be accepted
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Body is not JSON at all
    MalformedBody { reason: String },

    /// Body is JSON but does not match the expected shape
    /// (missing field, wrong type)
    InvalidBody { reason: String },

    /// Request did not declare a JSON content type
    MissingContentType,

    /// Path segment could not be parsed
    InvalidPath { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed JSON body: {}", reason),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
            Self::MissingContentType => {
                write!(f, "expected request with `Content-Type: application/json`")
            }
            Self::InvalidPath { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
