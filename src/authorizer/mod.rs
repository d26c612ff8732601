//! Shared-secret token authorizer for API Gateway TOKEN authorizer events.

pub mod method_arn;
pub mod policy_builder;

use crate::result::error::AuthorizerError;
use aws_lambda_events::apigw::{
    ApiGatewayCustomAuthorizerRequest, ApiGatewayCustomAuthorizerResponse,
};
use method_arn::MethodArn;
use policy_builder::ApiGatewayPolicyBuilder;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AuthorizerConfig {
    pub allowed_security_token: Option<String>,
}

pub struct TokenAuthorizer {
    allowed_security_token: String,
}

impl TokenAuthorizer {
    pub fn new(config: AuthorizerConfig) -> Result<Self, AuthorizerError> {
        let allowed_security_token = config
            .allowed_security_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AuthorizerError::Configuration("ALLOWED_SECURITY_TOKEN is not set".to_owned())
            })?;

        Ok(Self {
            allowed_security_token: allowed_security_token.to_lowercase(),
        })
    }

    /// Allows the call when the bearer token matches the configured one, ignoring case.
    /// The token is checked before the method ARN is looked at.
    pub fn authorize(
        &self,
        request: &ApiGatewayCustomAuthorizerRequest,
    ) -> Result<ApiGatewayCustomAuthorizerResponse, AuthorizerError> {
        let token_matches = request
            .authorization_token
            .as_deref()
            .map(|token| token.to_lowercase() == self.allowed_security_token)
            .unwrap_or(false);

        if !token_matches {
            tracing::warn!(method_arn = ?request.method_arn, "Token rejected");
            return Err(AuthorizerError::Unauthorized);
        }

        let method_arn = request.method_arn.as_deref().ok_or_else(|| {
            AuthorizerError::MalformedMethodArn("event has no method arn".to_owned())
        })?;
        let principal_id = MethodArn::parse(method_arn)?.principal_id();

        let policy = ApiGatewayPolicyBuilder::new().allow(method_arn).build();
        tracing::info!(principal_id = %principal_id, policy = ?policy, "Access allowed");

        Ok(ApiGatewayCustomAuthorizerResponse {
            principal_id: Some(principal_id),
            policy_document: policy,
            context: json!({}),
            usage_identifier_key: None,
        })
    }
}
