use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tienda_core::error::CoreError;

pub const MSG_INVALID_JSON: &str = "JSON inválido";
pub const MSG_INVALID_QUERY: &str = "Parámetros de consulta inválidos";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Método no permitido";
pub const MSG_ROUTE_NOT_FOUND: &str = "Ruta no encontrada (404)";
pub const MSG_INTERNAL: &str = "Error interno del servidor";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error": "<message>" }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tienda_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any failure reported by the repository.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be read or is not the expected JSON.
    #[error("Invalid JSON body")]
    InvalidJson,

    /// The query string could not be decoded.
    #[error("Invalid query string")]
    InvalidQuery,

    /// The path exists but does not accept the method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No route matches the path.
    #[error("Route not found")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => {
                let status = match core {
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                };
                (status, core.message().to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, driver_message(err))
            }
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, MSG_INVALID_JSON.to_string()),
            AppError::InvalidQuery => (StatusCode::BAD_REQUEST, MSG_INVALID_QUERY.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                MSG_METHOD_NOT_ALLOWED.to_string(),
            ),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, MSG_ROUTE_NOT_FOUND.to_string()),
        };

        error_response(status, &message)
    }
}

/// Build a `{ "error": message }` JSON response.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

/// The message the database driver reported.
///
/// Errors raised by the server carry the server's own text; everything else
/// (pool timeouts, I/O, protocol) uses the driver's display string.
fn driver_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
