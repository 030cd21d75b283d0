/// Domain-level failures that carry their own client-facing message.
///
/// Messages are the exact Spanish strings returned in the `error` field of
/// the HTTP response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Zero rows matched or were affected by the operation.
    #[error("{0}")]
    NotFound(&'static str),

    /// A required field or query parameter is missing.
    #[error("{0}")]
    Validation(&'static str),
}

impl CoreError {
    /// The client-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            CoreError::NotFound(msg) | CoreError::Validation(msg) => msg,
        }
    }
}
