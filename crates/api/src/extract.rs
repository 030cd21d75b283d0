//! Request body decoding.
//!
//! [`JsonBody`] waits for the whole body before anything is parsed, and
//! defers parsing to the handler so query preconditions are checked first.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Largest body accepted, matching axum's default limit.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// The fully buffered request body.
#[derive(Debug, Clone, Default)]
pub struct JsonBody(Bytes);

impl JsonBody {
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Parse the body into `T`.
    ///
    /// An empty body, or a JSON value that is not an object, yields
    /// `T::default()`. Invalid JSON, or fields `T` refuses to read, are
    /// [`AppError::InvalidJson`].
    pub fn decode<T>(&self) -> Result<T, AppError>
    where
        T: DeserializeOwned + Default,
    {
        if self.0.is_empty() {
            return Ok(T::default());
        }

        let value: Value = serde_json::from_slice(&self.0).map_err(|err| {
            tracing::debug!(error = %err, "Rejected malformed JSON body");
            AppError::InvalidJson
        })?;

        if !value.is_object() {
            return Ok(T::default());
        }

        serde_json::from_value(value).map_err(|err| {
            tracing::debug!(error = %err, "Rejected JSON body with unexpected field types");
            AppError::InvalidJson
        })
    }
}

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "Failed to read request body");
                AppError::InvalidJson
            })?;
        Ok(Self(bytes))
    }
}
