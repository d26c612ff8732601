use crate::google::dtos::{
    AnnotateImageRequest, AnnotateImagesRequest, AnnotateImagesResponse, Feature, ImageContent,
    TEXT_DETECTION_FEATURE,
};
use crate::google::{post_json, AccessTokenProvider, GoogleApiError};
use anyhow::anyhow;
use async_trait::async_trait;
use model::credential::ServiceCredential;
use model::image::{ImagePayload, TextAnnotation};
use std::sync::Arc;

#[cfg(any(test, feature = "test_mocks"))]
use mockall::mock;

pub const DEFAULT_VISION_API_URL: &str = "https://vision.googleapis.com";

#[async_trait]
pub trait TextDetector
where
    Self: Sync + Send,
{
    /// Runs text detection over the image and returns the annotations in the order the
    /// service produced them.
    async fn detect_text(
        &self,
        image: &ImagePayload,
        credential: &ServiceCredential,
    ) -> Result<Vec<TextAnnotation>, GoogleApiError>;
}

pub struct GoogleVisionClient<A: AccessTokenProvider> {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<A>,
}

impl<A: AccessTokenProvider> GoogleVisionClient<A> {
    pub fn new(http_client: reqwest::Client, base_url: String, token_provider: Arc<A>) -> Self {
        Self {
            http_client,
            base_url,
            token_provider,
        }
    }
}

#[async_trait]
impl<A: AccessTokenProvider> TextDetector for GoogleVisionClient<A> {
    async fn detect_text(
        &self,
        image: &ImagePayload,
        credential: &ServiceCredential,
    ) -> Result<Vec<TextAnnotation>, GoogleApiError> {
        let access_token = self.token_provider.access_token(credential).await?;

        let request = AnnotateImagesRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: &image.image_data_base64,
                },
                features: vec![Feature {
                    feature_type: TEXT_DETECTION_FEATURE,
                }],
            }],
        };

        let response: AnnotateImagesResponse = post_json(
            &self.http_client,
            &format!("{}/v1/images:annotate", self.base_url),
            &access_token,
            &request,
            "Vision images:annotate",
        )
        .await?;

        let image_response = response.responses.into_iter().next().unwrap_or_default();

        if let Some(error) = image_response.error {
            return Err(GoogleApiError::Unknown(anyhow!(
                "Vision could not annotate image: code {}, message: {}",
                error.code,
                error.message
            )));
        }

        Ok(image_response.text_annotations)
    }
}

#[cfg(any(test, feature = "test_mocks"))]
mock! {
    pub TextDetector {}
    #[async_trait]
    impl TextDetector for TextDetector {
        async fn detect_text(
            &self,
            image: &ImagePayload,
            credential: &ServiceCredential,
        ) -> Result<Vec<TextAnnotation>, GoogleApiError>;
    }
}
