//! Error types for both lambdas. `PipelineError` never leaves the image pipeline: it is
//! turned into a status code at the orchestrator boundary. `AuthorizerError` is returned to
//! the Lambda runtime, which reports its message to API Gateway.

use http::StatusCode;
use lambda_runtime::Error as LambdaRuntimeError;
use providers::google::GoogleApiError;
use providers::kms::KeyDecryptorError;

pub type Result<T> = std::result::Result<T, PipelineError>;
pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("request body is missing")]
    MissingBody,
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("credential decryption failed: {0:#}")]
    Decryption(#[source] anyhow::Error),
    #[error("vision service error: {0:#}")]
    VisionService(#[source] anyhow::Error),
    #[error("natural language service error: {0:#}")]
    NlpService(#[source] anyhow::Error),
}

impl PipelineError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingBody | Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_)
            | Self::Decryption(_)
            | Self::VisionService(_)
            | Self::NlpService(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<KeyDecryptorError> for PipelineError {
    fn from(e: KeyDecryptorError) -> Self {
        Self::Decryption(anyhow::Error::new(e))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorizerError {
    /// API Gateway answers 401 only when the error message is exactly `Unauthorized`.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("malformed method arn: {0}")]
    MalformedMethodArn(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LambdaError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}

/// Wraps a Google client failure for the stage that called it.
pub fn vision_error(e: GoogleApiError) -> PipelineError {
    PipelineError::VisionService(anyhow::Error::new(e))
}

pub fn nlp_error(e: GoogleApiError) -> PipelineError {
    PipelineError::NlpService(anyhow::Error::new(e))
}
