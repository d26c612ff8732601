use std::sync::Arc;

use common::aws_clients::kms::get_kms_client;
use lambda_http::Request;

use config::Config;
use image_identity_sm::http_lambda_main;
use image_identity_sm::lambda_structure::http_lambda_main::{HttpLambdaResponse, RequestExtractor};
use image_identity_sm::pipeline::{ImagePipeline, PipelineConfig};
use providers::google::{
    EntityAnalyzer, GoogleLanguageClient, GoogleVisionClient, ServiceAccountTokenProvider,
    TextDetector,
};
use providers::kms::{KeyDecryptor, KmsKeyDecryptor};

mod config;

pub struct State<D: KeyDecryptor, V: TextDetector, E: EntityAnalyzer> {
    pub pipeline: ImagePipeline<D, V, E>,
}

http_lambda_main!(
    {
        let config = ConfigLoader::load_default::<Config>();
        let http_client = reqwest::Client::new();
        let token_provider = Arc::new(ServiceAccountTokenProvider::new(
            config.google_token_uri.clone(),
        ));

        let pipeline = ImagePipeline::new(
            PipelineConfig {
                encrypted_credential: config.google_api_key.clone(),
            },
            KmsKeyDecryptor::new(get_kms_client()),
            GoogleVisionClient::new(
                http_client.clone(),
                config.vision_api_url.clone(),
                token_provider.clone(),
            ),
            GoogleLanguageClient::new(http_client, config.language_api_url, token_provider),
        );

        State { pipeline }
    },
    process_image
);

async fn process_image(
    request: Request,
    state: &State<impl KeyDecryptor, impl TextDetector, impl EntityAnalyzer>,
) -> HttpLambdaResponse {
    let body = request.extract_body_text();

    state.pipeline.handle(body.as_deref()).await.try_into()
}

#[cfg(test)]
mod tests {
    use common::config::ConfigLoader;
    use lambda_http::Body;
    use mockall::predicate::eq;
    use reqwest::StatusCode;
    use rstest::*;
    use serde_json::json;

    use common::test_tools::http::constants::{
        CLIENT_EMAIL_FOR_MOCK_REQUESTS, IMAGE_DATA_FOR_MOCK_REQUESTS,
        PRIVATE_KEY_FOR_MOCK_REQUESTS,
    };
    use common::test_tools::http::helpers::{build_json_proxy_request, build_proxy_request};
    use model::entity::Entity;
    use model::image::{ImagePayload, TextAnnotation};
    use providers::google::language::MockEntityAnalyzer;
    use providers::google::vision::MockTextDetector;
    use providers::kms::MockKeyDecryptor;

    use super::*;

    const UNKNOWN_BODY: &str = r#"{"first_name":"unknown","last_name":"unknown"}"#;

    struct TestFixture {
        pub config: Config,
        pub key_decryptor: MockKeyDecryptor,
        pub text_detector: MockTextDetector,
        pub entity_analyzer: MockEntityAnalyzer,
    }

    impl TestFixture {
        fn state(self) -> State<MockKeyDecryptor, MockTextDetector, MockEntityAnalyzer> {
            State {
                pipeline: ImagePipeline::new(
                    PipelineConfig {
                        encrypted_credential: Some(base64::encode(b"ciphertext")),
                    },
                    self.key_decryptor,
                    self.text_detector,
                    self.entity_analyzer,
                ),
            }
        }
    }

    #[fixture]
    fn fixture() -> TestFixture {
        let config = ConfigLoader::load_test::<Config>();

        let mut key_decryptor = MockKeyDecryptor::new();
        key_decryptor
            .expect_decrypt()
            .with(eq(b"ciphertext".to_vec()))
            .returning(|_| {
                Ok(json!({
                    "type": "service_account",
                    "client_email": CLIENT_EMAIL_FOR_MOCK_REQUESTS,
                    "private_key": PRIVATE_KEY_FOR_MOCK_REQUESTS,
                })
                .to_string()
                .into_bytes())
            });

        TestFixture {
            config,
            key_decryptor,
            text_detector: MockTextDetector::new(),
            entity_analyzer: MockEntityAnalyzer::new(),
        }
    }

    #[rstest]
    fn config_defaults_to_google_endpoints(fixture: TestFixture) {
        assert!(fixture.config.vision_api_url.starts_with("http"));
        assert!(fixture.config.language_api_url.starts_with("http"));
        assert!(fixture.config.google_token_uri.starts_with("http"));
    }

    #[rstest]
    #[tokio::test]
    async fn responds_with_the_person_name(mut fixture: TestFixture) {
        fixture
            .text_detector
            .expect_detect_text()
            .with(
                eq(ImagePayload {
                    image_data_base64: IMAGE_DATA_FOR_MOCK_REQUESTS.to_owned(),
                }),
                mockall::predicate::always(),
            )
            .once()
            .returning(|_, _| {
                Ok(vec![TextAnnotation {
                    description: "DRIVER LICENSE\nJANE Q PUBLIC".to_owned(),
                    locale: Some("en".to_owned()),
                }])
            });
        fixture
            .entity_analyzer
            .expect_analyze_entities()
            .once()
            .returning(|_, _| Ok(vec![Entity::new("Jane Q Public", "PERSON")]));

        let request = build_json_proxy_request(json!({ "imgdata": IMAGE_DATA_FOR_MOCK_REQUESTS }));
        let response = process_image(request, &fixture.state()).await.unwrap();

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!("*", response.headers()["Access-Control-Allow-Origin"]);
        assert_eq!("POST,OPTIONS", response.headers()["Access-Control-Allow-Methods"]);
        assert_eq!("application/json", response.headers()["Content-Type"]);
        assert_eq!(
            r#"{"first_name":"Jane","last_name":"Q Public"}"#,
            response.body().as_str()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_request_is_a_bad_request(mut fixture: TestFixture) {
        fixture.text_detector.expect_detect_text().never();
        fixture.entity_analyzer.expect_analyze_entities().never();

        let request = build_proxy_request(Body::Empty);
        let response = process_image(request, &fixture.state()).await.unwrap();

        assert_eq!(StatusCode::BAD_REQUEST, response.status());
        assert_eq!(
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token",
            response.headers()["Access-Control-Allow-Headers"]
        );
        assert_eq!(UNKNOWN_BODY, response.body().as_str());
    }

    #[rstest]
    #[tokio::test]
    async fn binary_body_is_read_as_text(mut fixture: TestFixture) {
        fixture
            .text_detector
            .expect_detect_text()
            .once()
            .returning(|_, _| Ok(vec![]));
        fixture
            .entity_analyzer
            .expect_analyze_entities()
            .once()
            .returning(|_, _| Ok(vec![]));

        let body = json!({ "imgdata": IMAGE_DATA_FOR_MOCK_REQUESTS }).to_string();
        let request = build_proxy_request(Body::Binary(body.into_bytes()));
        let response = process_image(request, &fixture.state()).await.unwrap();

        assert_eq!(StatusCode::OK, response.status());
        assert_eq!(r#"{"first_name":"","last_name":""}"#, response.body().as_str());
    }
}
