use async_trait::async_trait;
use aws_lambda_events::apigw::{
    ApiGatewayCustomAuthorizerRequest, ApiGatewayCustomAuthorizerResponse,
};
use common::config::ConfigLoader;

use image_identity_sm::authorizer::{AuthorizerConfig, TokenAuthorizer};
use image_identity_sm::lambda_main;
use image_identity_sm::lambda_structure::lambda_trait::Lambda;
use image_identity_sm::result::error::AuthorizerError;

pub struct TokenAuthorizerLambda;

#[async_trait]
impl Lambda for TokenAuthorizerLambda {
    type PersistedMemory = TokenAuthorizer;
    type InputBody = ApiGatewayCustomAuthorizerRequest;
    type Output = ApiGatewayCustomAuthorizerResponse;
    type Error = AuthorizerError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<AuthorizerConfig>();
        TokenAuthorizer::new(config)
    }

    async fn run(
        request: Self::InputBody,
        authorizer: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        authorizer.authorize(&request)
    }
}

lambda_main!(TokenAuthorizerLambda);
