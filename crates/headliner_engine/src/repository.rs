use std::sync::Arc;

use headliner_core::{AppError, AppResult, Headline};

use crate::api::{ApiError, NewsApi};
use crate::mapper;

#[async_trait::async_trait]
pub trait HeadlineRepository: Send + Sync {
    async fn get_headlines(&self) -> AppResult<Vec<Headline>>;
}

/// Fetches headlines for the injected source token and classifies every
/// failure into a fixed user-facing message.
pub struct NewsHeadlineRepository {
    api: Arc<dyn NewsApi>,
    source: String,
}

impl NewsHeadlineRepository {
    pub fn new(api: Arc<dyn NewsApi>, source: impl Into<String>) -> Self {
        Self {
            api,
            source: source.into(),
        }
    }
}

#[async_trait::async_trait]
impl HeadlineRepository for NewsHeadlineRepository {
    async fn get_headlines(&self) -> AppResult<Vec<Headline>> {
        match self.api.top_headlines(&self.source).await {
            Ok(response) => Ok(mapper::response_to_domain(response)),
            Err(err) => Err(classify(err)),
        }
    }
}

/// Classification table from transport failures to user-facing errors.
/// Every branch logs the original failure; logging never changes the value.
fn classify(err: ApiError) -> AppError {
    match err {
        ApiError::Status { code, message } => {
            let user_message = match code {
                400 => "Bad request".to_string(),
                401 => "Unauthorized. Please check your API key.".to_string(),
                403 => "Forbidden".to_string(),
                404 => "Resource not found".to_string(),
                408 => "Request timeout".to_string(),
                429 => "Too many requests. Please try again later.".to_string(),
                500..=599 => "Server error. Please try again later.".to_string(),
                _ if message.is_empty() => "HTTP error occurred".to_string(),
                _ => message,
            };
            log::error!("HTTP error [{code}]: {user_message}");
            AppError::with_code(user_message, code)
        }
        ApiError::HostUnreachable(cause) => network_error("No internet connection", &cause),
        ApiError::Timeout(cause) => network_error("Request timeout", &cause),
        ApiError::Io(cause) => network_error("Network error", &cause),
        ApiError::Unexpected(cause) => {
            let message = if cause.is_empty() {
                "An unexpected error occurred".to_string()
            } else {
                cause
            };
            log::error!("Unexpected error: {message}");
            AppError::new(message)
        }
    }
}

fn network_error(user_message: &str, cause: &str) -> AppError {
    log::error!("Network error: {user_message} ({cause})");
    AppError::new(format!("{user_message}. Please check your connection."))
}
