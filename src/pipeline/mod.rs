//! Image to identity pipeline: credential, payload, OCR, entity recognition. Each stage
//! short-circuits on failure and the failure becomes the response status.

pub mod entity_extractor;
pub mod request_validator;
pub mod secret_resolver;
pub mod vision_extractor;

use crate::http::errors::pipeline_error_response;
use crate::http::lambda_proxy::ResponseEnvelope;
use crate::result::error::Result;
use entity_extractor::extract_person_name;
use http::StatusCode;
use model::entity::NameResult;
use providers::google::{EntityAnalyzer, TextDetector};
use providers::kms::KeyDecryptor;
use request_validator::validate_request;
use secret_resolver::resolve_service_credential;
use vision_extractor::extract_text;

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// KMS ciphertext of the Google service account key, base64 encoded.
    pub encrypted_credential: Option<String>,
}

pub struct ImagePipeline<D, V, E>
where
    D: KeyDecryptor,
    V: TextDetector,
    E: EntityAnalyzer,
{
    config: PipelineConfig,
    key_decryptor: D,
    text_detector: V,
    entity_analyzer: E,
}

impl<D, V, E> ImagePipeline<D, V, E>
where
    D: KeyDecryptor,
    V: TextDetector,
    E: EntityAnalyzer,
{
    pub fn new(config: PipelineConfig, key_decryptor: D, text_detector: V, entity_analyzer: E) -> Self {
        Self {
            config,
            key_decryptor,
            text_detector,
            entity_analyzer,
        }
    }

    /// Runs one invocation. Always produces an envelope: failures are logged and mapped to
    /// their status code with the `unknown` name pair as body.
    pub async fn handle(&self, body: Option<&str>) -> ResponseEnvelope {
        match self.extract_name(body).await {
            Ok(name) => ResponseEnvelope::json(StatusCode::OK, &name),
            Err(e) => pipeline_error_response(e),
        }
    }

    async fn extract_name(&self, body: Option<&str>) -> Result<NameResult> {
        let credential = resolve_service_credential(
            self.config.encrypted_credential.as_deref(),
            &self.key_decryptor,
        )
        .await?;
        tracing::info!(client_email = %credential.client_email, "Service credential resolved");

        let image = validate_request(body)?;
        tracing::info!(
            image_size = image.image_data_base64.len(),
            "Request validated"
        );

        let text = extract_text(&self.text_detector, &image, &credential).await?;
        tracing::info!(text = %text.text, "Text recognized");

        let name = extract_person_name(&self.entity_analyzer, &text, &credential).await?;
        tracing::info!(
            first_name = %name.first_name,
            last_name = %name.last_name,
            "Name extracted"
        );

        Ok(name)
    }
}
