//! Custom Axum extractors
//!
//! Rejections from axum's built-in extractors are turned into
//! `ApiError::Validation` so every bad request gets the same JSON shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor with validation-error rejections
///
/// The body must be a JSON object; serde would otherwise accept a struct
/// written as an array of its fields.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(classify(rejection)))?;

        if !value.is_object() {
            return Err(ApiError::Validation(ValidationError::InvalidBody {
                reason: "expected a JSON object".to_owned(),
            }));
        }

        let value = serde_json::from_value(value).map_err(|e| {
            ApiError::Validation(ValidationError::InvalidBody {
                reason: e.to_string(),
            })
        })?;

        Ok(Self(value))
    }
}

fn classify(rejection: JsonRejection) -> ValidationError {
    match rejection {
        JsonRejection::JsonDataError(e) => ValidationError::InvalidBody {
            reason: e.body_text(),
        },
        JsonRejection::JsonSyntaxError(e) => ValidationError::MalformedBody {
            reason: e.body_text(),
        },
        JsonRejection::MissingJsonContentType(_) => ValidationError::MissingContentType,
        other => ValidationError::MalformedBody {
            reason: other.body_text(),
        },
    }
}

/// Extract an integer event id from path
pub struct EventId(pub i64);

impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidPath {
                    field: "event_id",
                    value: String::new(),
                })
            })?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidPath {
                field: "event_id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}
