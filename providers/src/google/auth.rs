use anyhow::anyhow;
use async_trait::async_trait;
use model::credential::ServiceCredential;
use serde_json::json;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

#[cfg(any(test, feature = "test_mocks"))]
use mockall::mock;

/// Scope granting access to both the Vision and the Natural Language APIs.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, thiserror::Error)]
pub enum GoogleAuthError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

#[async_trait]
pub trait AccessTokenProvider
where
    Self: Sync + Send,
{
    /// Exchanges the service account credential for an OAuth2 bearer token.
    async fn access_token(&self, credential: &ServiceCredential)
        -> Result<String, GoogleAuthError>;
}

/// Signs a JWT with the service account key and exchanges it at `token_uri`.
///
/// A new authenticator is built for each call, so tokens are never shared between
/// invocations.
pub struct ServiceAccountTokenProvider {
    token_uri: String,
}

impl ServiceAccountTokenProvider {
    pub fn new(token_uri: String) -> Self {
        Self { token_uri }
    }

    fn service_account_key(
        &self,
        credential: &ServiceCredential,
    ) -> Result<ServiceAccountKey, GoogleAuthError> {
        serde_json::from_value(json!({
            "type": "service_account",
            "client_email": credential.client_email,
            "private_key": credential.private_key,
            "token_uri": self.token_uri,
        }))
        .map_err(|e| {
            GoogleAuthError::Unknown(anyhow!(e).context("Error building service account key"))
        })
    }
}

impl Default for ServiceAccountTokenProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_URI.to_owned())
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(
        &self,
        credential: &ServiceCredential,
    ) -> Result<String, GoogleAuthError> {
        let key = self.service_account_key(credential)?;

        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                GoogleAuthError::Unknown(anyhow!(e).context(format!(
                    "Error building authenticator for {}",
                    credential.client_email
                )))
            })?;

        let token = authenticator
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| {
                GoogleAuthError::Unknown(anyhow!(e).context(format!(
                    "Error obtaining access token for {}",
                    credential.client_email
                )))
            })?;

        Ok(token.as_str().to_owned())
    }
}

#[cfg(any(test, feature = "test_mocks"))]
mock! {
    pub AccessTokenProvider {}
    #[async_trait]
    impl AccessTokenProvider for AccessTokenProvider {
        async fn access_token(&self, credential: &ServiceCredential)
            -> Result<String, GoogleAuthError>;
    }
}
