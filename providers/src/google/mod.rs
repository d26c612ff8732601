pub mod auth;
pub mod dtos;
pub mod language;
pub mod vision;

pub use auth::{AccessTokenProvider, GoogleAuthError, ServiceAccountTokenProvider};
pub use language::{EntityAnalyzer, GoogleLanguageClient};
pub use vision::{GoogleVisionClient, TextDetector};

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum GoogleApiError {
    #[error("{0}")]
    Authentication(#[from] GoogleAuthError),
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

/// Sends an authorized JSON POST to a Google Cloud REST endpoint and decodes the response.
///
/// Non-success statuses are errors carrying the response body. Nothing is retried.
pub(crate) async fn post_json<B, R>(
    http_client: &reqwest::Client,
    url: &str,
    access_token: &str,
    body: &B,
    operation: &str,
) -> Result<R, GoogleApiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = http_client
        .post(url)
        .bearer_auth(access_token)
        .json(body)
        .send()
        .await
        .map_err(|e| GoogleApiError::Unknown(anyhow!(e).context(format!("Error calling {operation}"))))?;

    let response_status = response.status();
    let response_body = response.text().await.map_err(|e| {
        GoogleApiError::Unknown(anyhow!(e).context("Error obtaining http response"))
    })?;

    if !response_status.is_success() {
        return Err(GoogleApiError::Unknown(anyhow!(
            "{} failed with status {}. Response: {}",
            operation,
            response_status,
            response_body
        )));
    }

    serde_json::from_str(&response_body).map_err(|e| {
        GoogleApiError::Unknown(
            anyhow!(e).context(format!("Error deserializing {operation} response")),
        )
    })
}
