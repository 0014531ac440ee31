use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::dto::HeadlineResponseDto;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Transport-level failure taxonomy; the repository turns these into
/// user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("http status {code}")]
    Status { code: u16, message: String },
    #[error("host unreachable: {0}")]
    HostUnreachable(String),
    #[error("request timeout: {0}")]
    Timeout(String),
    #[error("network io: {0}")]
    Io(String),
    #[error("{0}")]
    Unexpected(String),
}

#[async_trait::async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch top headlines for a single source token.
    async fn top_headlines(&self, source: &str) -> Result<HeadlineResponseDto, ApiError>;
}

/// reqwest-backed client; sends the `X-Api-Key` header on every request.
pub struct ReqwestNewsApi {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl ReqwestNewsApi {
    pub fn new(settings: ApiSettings, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let base =
            Url::parse(&settings.base_url).map_err(|err| ApiError::Unexpected(err.to_string()))?;
        let endpoint = base
            .join("v2/top-headlines")
            .map_err(|err| ApiError::Unexpected(err.to_string()))?;
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Unexpected(err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }
}

#[async_trait::async_trait]
impl NewsApi for ReqwestNewsApi {
    async fn top_headlines(&self, source: &str) -> Result<HeadlineResponseDto, ApiError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("sources", source)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<HeadlineResponseDto>()
            .await
            .map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout(err.to_string())
    } else if err.is_connect() {
        ApiError::HostUnreachable(err.to_string())
    } else if err.is_request() || err.is_body() {
        ApiError::Io(err.to_string())
    } else {
        ApiError::Unexpected(err.to_string())
    }
}
