use thiserror::Error;

/// Uniform failure value for any operation that can fail past the data layer.
///
/// Built exclusively by the repository's classification table. The underlying
/// cause is logged at the classification site, not carried in the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    pub message: String,
    /// HTTP status code when the failure came from a status response.
    pub code: Option<u16>,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }
}

/// Return contract of every fallible operation; never panics past the
/// repository boundary.
pub type AppResult<T> = Result<T, AppError>;
