//! Handlers for the `/productos` resource.
//!
//! Query preconditions are checked before the body is decoded, and both
//! before the repository is touched.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tienda_core::error::CoreError;
use tienda_core::product::{
    parse_id, MSG_CREATED, MSG_DELETED, MSG_NOT_FOUND, MSG_NOT_FOUND_FOR_DELETE,
    MSG_NOT_FOUND_FOR_UPDATE, MSG_UPDATED,
};
use tienda_db::models::product::{CreateProduct, UpdateProduct};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::ProductQuery;
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /productos and GET /productos?id={id}
pub async fn fetch(State(state): State<AppState>, query: ProductQuery) -> AppResult<Response> {
    let Some(raw_id) = query.id else {
        let products = state.products.list().await?;
        return Ok(Json(products).into_response());
    };

    let product = match parse_id(&raw_id) {
        Some(id) => state.products.find_by_id(id).await?,
        None => None,
    };
    let product = product.ok_or(CoreError::NotFound(MSG_NOT_FOUND))?;
    Ok(Json(product).into_response())
}

/// POST /productos
pub async fn create(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input: CreateProduct = body.decode()?;
    let product = input.validate()?;

    let id = state.products.create(&product).await?;
    tracing::info!(product_id = id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: MSG_CREATED,
            id,
        }),
    ))
}

/// PUT /productos?id={id}
///
/// Replaces every mutable column; fields missing from the body become `NULL`.
pub async fn update(
    State(state): State<AppState>,
    query: ProductQuery,
    body: JsonBody,
) -> AppResult<Json<MessageResponse>> {
    let raw_id = query.require_id()?;
    let input: UpdateProduct = body.decode()?;

    let updated = match parse_id(raw_id) {
        Some(id) => state.products.update(id, &input).await?,
        None => false,
    };
    if !updated {
        return Err(CoreError::NotFound(MSG_NOT_FOUND_FOR_UPDATE).into());
    }

    tracing::info!(product_id = raw_id, "Product updated");
    Ok(Json(MessageResponse {
        message: MSG_UPDATED,
    }))
}

/// DELETE /productos?id={id}
pub async fn delete(
    State(state): State<AppState>,
    query: ProductQuery,
) -> AppResult<Json<MessageResponse>> {
    let raw_id = query.require_id()?;

    let deleted = match parse_id(raw_id) {
        Some(id) => state.products.delete(id).await?,
        None => false,
    };
    if !deleted {
        return Err(CoreError::NotFound(MSG_NOT_FOUND_FOR_DELETE).into());
    }

    tracing::info!(product_id = raw_id, "Product deleted");
    Ok(Json(MessageResponse {
        message: MSG_DELETED,
    }))
}
