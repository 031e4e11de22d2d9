//! HTTP adapter for the oracle backend.

use std::time::Duration;

use async_trait::async_trait;

use crate::classify::Classification;
use crate::request::InterpretationRequest;
use crate::service::{OracleInterpreter, QuestionClassifier, ServiceError, ServiceResult};

/// Default timeout applied to every request; expiry counts as failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the oracle backend's classification and interpretation
/// endpoints.
#[derive(Debug, Clone)]
pub struct OracleClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(serde::Serialize)]
struct ClassifyBody<'a> {
    question: &'a str,
}

impl OracleClient {
    /// Create a client for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> ServiceResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn check(response: reqwest::Response) -> ServiceResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("request failed")
            )
        } else {
            body.trim().to_string()
        };
        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl QuestionClassifier for OracleClient {
    async fn classify(&self, question: &str) -> ServiceResult<Classification> {
        let url = format!("{}/api/classify_question", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&ClassifyBody { question })
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OracleInterpreter for OracleClient {
    async fn interpret(&self, request: &InterpretationRequest) -> ServiceResult<String> {
        let url = format!("{}/api/interpret_mystical", self.base_url);
        let response = self.client.post(url).json(request).send().await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }
}
