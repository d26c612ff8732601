use crate::google::dtos::{
    AnalyzeEntitiesRequest, AnalyzeEntitiesResponse, Document, PLAIN_TEXT_DOCUMENT,
    UTF8_ENCODING,
};
use crate::google::{post_json, AccessTokenProvider, GoogleApiError};
use async_trait::async_trait;
use model::credential::ServiceCredential;
use model::entity::Entity;
use model::image::RecognizedText;
use std::sync::Arc;

#[cfg(any(test, feature = "test_mocks"))]
use mockall::mock;

pub const DEFAULT_LANGUAGE_API_URL: &str = "https://language.googleapis.com";

#[async_trait]
pub trait EntityAnalyzer
where
    Self: Sync + Send,
{
    /// Runs entity analysis over plain text. Entities keep the service's ordering.
    async fn analyze_entities(
        &self,
        text: &RecognizedText,
        credential: &ServiceCredential,
    ) -> Result<Vec<Entity>, GoogleApiError>;
}

pub struct GoogleLanguageClient<A: AccessTokenProvider> {
    http_client: reqwest::Client,
    base_url: String,
    token_provider: Arc<A>,
}

impl<A: AccessTokenProvider> GoogleLanguageClient<A> {
    pub fn new(http_client: reqwest::Client, base_url: String, token_provider: Arc<A>) -> Self {
        Self {
            http_client,
            base_url,
            token_provider,
        }
    }
}

#[async_trait]
impl<A: AccessTokenProvider> EntityAnalyzer for GoogleLanguageClient<A> {
    async fn analyze_entities(
        &self,
        text: &RecognizedText,
        credential: &ServiceCredential,
    ) -> Result<Vec<Entity>, GoogleApiError> {
        let access_token = self.token_provider.access_token(credential).await?;

        let request = AnalyzeEntitiesRequest {
            document: Document {
                document_type: PLAIN_TEXT_DOCUMENT,
                content: &text.text,
            },
            encoding_type: UTF8_ENCODING,
        };

        let response: AnalyzeEntitiesResponse = post_json(
            &self.http_client,
            &format!("{}/v1/documents:analyzeEntities", self.base_url),
            &access_token,
            &request,
            "Natural Language documents:analyzeEntities",
        )
        .await?;

        Ok(response.entities)
    }
}

#[cfg(any(test, feature = "test_mocks"))]
mock! {
    pub EntityAnalyzer {}
    #[async_trait]
    impl EntityAnalyzer for EntityAnalyzer {
        async fn analyze_entities(
            &self,
            text: &RecognizedText,
            credential: &ServiceCredential,
        ) -> Result<Vec<Entity>, GoogleApiError>;
    }
}

#[cfg(test)]
mod tests {
    use crate::google::auth::MockAccessTokenProvider;
    use crate::google::{EntityAnalyzer, GoogleLanguageClient};
    use model::credential::ServiceCredential;
    use model::entity::Entity;
    use model::image::RecognizedText;
    use rstest::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ACCESS_TOKEN: &str = "ya29.language-token";
    const TEXT: &str = "ACME CORP\nJane Q Public";

    struct TestFixture {
        pub mock_server: MockServer,
        pub client: GoogleLanguageClient<MockAccessTokenProvider>,
        pub credential: ServiceCredential,
    }

    #[fixture]
    async fn fixture() -> TestFixture {
        let mock_server = MockServer::start().await;
        let mut token_provider = MockAccessTokenProvider::new();
        token_provider
            .expect_access_token()
            .once()
            .returning(|_| Ok(ACCESS_TOKEN.to_owned()));

        let client = GoogleLanguageClient::new(
            reqwest::Client::new(),
            mock_server.uri(),
            Arc::new(token_provider),
        );

        TestFixture {
            mock_server,
            client,
            credential: ServiceCredential {
                client_email: "reader@project.iam.gserviceaccount.com".to_owned(),
                private_key: "key".to_owned(),
            },
        }
    }

    async fn mock_language_response(status: u16, body: Value, fixture: &TestFixture) {
        Mock::given(method("POST"))
            .and(path("/v1/documents:analyzeEntities"))
            .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
            .and(body_json(json!({
                "document": { "type": "PLAIN_TEXT", "content": TEXT },
                "encodingType": "UTF8"
            })))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&fixture.mock_server)
            .await;
    }

    #[rstest]
    #[tokio::test]
    async fn returns_entities_in_service_order(#[future] fixture: TestFixture) {
        let fixture = fixture.await;
        mock_language_response(
            200,
            json!({
                "entities": [
                    { "name": "ACME CORP", "type": "ORGANIZATION", "salience": 0.7, "mentions": [] },
                    { "name": "Jane Q Public", "type": "PERSON", "salience": 0.3, "mentions": [] }
                ],
                "language": "en"
            }),
            &fixture,
        )
        .await;

        let entities = fixture
            .client
            .analyze_entities(&RecognizedText::from(TEXT.to_owned()), &fixture.credential)
            .await
            .unwrap();

        assert_eq!(
            vec![
                Entity::new("ACME CORP", "ORGANIZATION"),
                Entity::new("Jane Q Public", "PERSON"),
            ],
            entities
        );
    }

    #[rstest]
    #[tokio::test]
    async fn missing_entities_field_is_empty(#[future] fixture: TestFixture) {
        let fixture = fixture.await;
        mock_language_response(200, json!({ "language": "en" }), &fixture).await;

        let entities = fixture
            .client
            .analyze_entities(&RecognizedText::from(TEXT.to_owned()), &fixture.credential)
            .await
            .unwrap();

        assert!(entities.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn service_error_is_reported(#[future] fixture: TestFixture) {
        let fixture = fixture.await;
        mock_language_response(
            400,
            json!({ "error": { "code": 400, "message": "The document is empty." } }),
            &fixture,
        )
        .await;

        let error = fixture
            .client
            .analyze_entities(&RecognizedText::from(TEXT.to_owned()), &fixture.credential)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("The document is empty."));
    }
}
