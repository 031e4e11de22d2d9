//! Contracts for the two remote collaborators.
//!
//! Classification and interpretation are external services; the workflow
//! only depends on these traits. [`crate::http::OracleClient`] implements
//! both over HTTP, and tests substitute in-process mocks.

use async_trait::async_trait;
use thiserror::Error;

use crate::classify::Classification;
use crate::request::InterpretationRequest;

/// Alias for `Result<T, ServiceError>`.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors from the remote classification and interpretation services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never completed: connection failure, bad URL, or
    /// timeout expiry.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. The message is the
    /// server-provided body when present, else a generic status line.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Server body text, or a generic description of the status.
        message: String,
    },
}

/// Classifies a question's type and topic.
#[async_trait]
pub trait QuestionClassifier: Send + Sync {
    /// Classify the question. Any failure is recovered by the workflow
    /// with [`Classification::fallback`].
    async fn classify(&self, question: &str) -> ServiceResult<Classification>;
}

/// Produces interpretive text for a resolved reading.
#[async_trait]
pub trait OracleInterpreter: Send + Sync {
    /// Request an interpretation. The returned text is opaque and is
    /// displayed verbatim, never parsed.
    async fn interpret(&self, request: &InterpretationRequest) -> ServiceResult<String>;
}
