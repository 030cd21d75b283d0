//! Query-string decoding for the product routes.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use tienda_core::error::CoreError;
use tienda_core::product::MSG_ID_REQUIRED;

use crate::error::AppError;

/// The `?id=` parameter of a product request.
///
/// An empty value counts as absent. When `id` repeats, the last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub id: Option<String>,
}

impl ProductQuery {
    /// The raw id, or a validation error when the route requires one.
    pub fn require_id(&self) -> Result<&str, CoreError> {
        self.id
            .as_deref()
            .ok_or(CoreError::Validation(MSG_ID_REQUIRED))
    }
}

impl<S> FromRequestParts<S> for ProductQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|err| {
                tracing::debug!(error = %err, "Rejected query string");
                AppError::InvalidQuery
            })?;

        let id = params.remove("id").filter(|id| !id.is_empty());
        Ok(Self { id })
    }
}
