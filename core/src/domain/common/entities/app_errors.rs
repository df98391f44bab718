use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,

    /// No credential configured for the completion service.
    #[error("Completion service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The completion service was reachable but the call failed.
    #[error("Completion service error: {0}")]
    UpstreamError(String),

    /// The completion reply held no decodable JSON or failed validation.
    #[error("Unparseable completion: {0}")]
    ParseError(String),
}

impl CoreError {
    /// Errors the orchestration layer absorbs by switching to a fallback result.
    pub fn is_recoverable_by_fallback(&self) -> bool {
        matches!(
            self,
            CoreError::ServiceUnavailable(_) | CoreError::UpstreamError(_) | CoreError::ParseError(_)
        )
    }
}
