//! Success response bodies for the product routes.

use serde::Serialize;
use tienda_core::types::DbId;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }`, returned by create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}
