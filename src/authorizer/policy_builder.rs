use aws_lambda_events::apigw::{ApiGatewayCustomAuthorizerPolicy, IamPolicyStatement};

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
pub const ALLOW_EFFECT: &str = "Allow";

pub struct ApiGatewayPolicyBuilder {
    policy: ApiGatewayCustomAuthorizerPolicy,
}

impl ApiGatewayPolicyBuilder {
    pub fn new() -> ApiGatewayPolicyBuilder {
        Self {
            policy: ApiGatewayCustomAuthorizerPolicy {
                version: Some(POLICY_VERSION.to_owned()),
                statement: vec![],
            },
        }
    }

    pub fn add_statement<T: Into<String>>(mut self, effect: &str, resource_arn: T) -> Self {
        let stmt = IamPolicyStatement {
            effect: Some(effect.to_owned()),
            action: vec![INVOKE_ACTION.to_owned()],
            resource: vec![resource_arn.into()],
        };

        self.policy.statement.push(stmt);
        self
    }

    pub fn allow<T: Into<String>>(self, resource_arn: T) -> Self {
        self.add_statement(ALLOW_EFFECT, resource_arn)
    }

    pub fn build(self) -> ApiGatewayCustomAuthorizerPolicy {
        self.policy
    }
}

impl Default for ApiGatewayPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
