use crate::error::AppError;

/// Any path other than the product resource.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// A method the product resource does not handle.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
