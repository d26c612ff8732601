use crate::result::error::{vision_error, Result};
use model::credential::ServiceCredential;
use model::image::{ImagePayload, RecognizedText};
use providers::google::TextDetector;

/// Runs OCR over the image and keeps only the first annotation, which holds the whole text
/// found in the image. No annotations means no text, which is not an error.
pub async fn extract_text(
    text_detector: &impl TextDetector,
    image: &ImagePayload,
    credential: &ServiceCredential,
) -> Result<RecognizedText> {
    let annotations = text_detector
        .detect_text(image, credential)
        .await
        .map_err(vision_error)?;

    let text = annotations
        .into_iter()
        .next()
        .map(|annotation| annotation.description)
        .unwrap_or_default();

    Ok(RecognizedText::from(text))
}

#[cfg(test)]
mod tests {
    use super::extract_text;
    use crate::result::error::PipelineError;
    use anyhow::anyhow;
    use model::credential::ServiceCredential;
    use model::image::{ImagePayload, TextAnnotation};
    use providers::google::vision::MockTextDetector;
    use providers::google::GoogleApiError;
    use rstest::*;

    struct TestFixture {
        pub text_detector: MockTextDetector,
        pub image: ImagePayload,
        pub credential: ServiceCredential,
    }

    #[fixture]
    fn fixture() -> TestFixture {
        TestFixture {
            text_detector: MockTextDetector::new(),
            image: ImagePayload {
                image_data_base64: "aW1hZ2U=".to_owned(),
            },
            credential: ServiceCredential {
                client_email: "reader@p.iam.gserviceaccount.com".to_owned(),
                private_key: "pk".to_owned(),
            },
        }
    }

    fn annotation(description: &str) -> TextAnnotation {
        TextAnnotation {
            description: description.to_owned(),
            locale: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn keeps_only_the_first_annotation(mut fixture: TestFixture) {
        fixture
            .text_detector
            .expect_detect_text()
            .once()
            .returning(|_, _| {
                Ok(vec![
                    annotation("JANE Q PUBLIC\n1 MAIN ST"),
                    annotation("JANE"),
                    annotation("PUBLIC"),
                ])
            });

        let text = extract_text(&fixture.text_detector, &fixture.image, &fixture.credential)
            .await
            .unwrap();

        assert_eq!("JANE Q PUBLIC\n1 MAIN ST", text.text);
    }

    #[rstest]
    #[tokio::test]
    async fn no_annotations_is_empty_text(mut fixture: TestFixture) {
        fixture
            .text_detector
            .expect_detect_text()
            .once()
            .returning(|_, _| Ok(vec![]));

        let text = extract_text(&fixture.text_detector, &fixture.image, &fixture.credential)
            .await
            .unwrap();

        assert!(text.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn service_failure_is_a_vision_error(mut fixture: TestFixture) {
        fixture
            .text_detector
            .expect_detect_text()
            .once()
            .returning(|_, _| Err(GoogleApiError::Unknown(anyhow!("deadline exceeded"))));

        let error = extract_text(&fixture.text_detector, &fixture.image, &fixture.credential)
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::VisionService(_)));
    }
}
