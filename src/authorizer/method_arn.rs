use crate::result::error::AuthorizerError;

const REGION_INDEX: usize = 3;
const ACCOUNT_ID_INDEX: usize = 4;
const API_RESOURCE_INDEX: usize = 5;
const RESOURCE_PATH_INDEX: usize = 6;

/// The parts of an API Gateway method ARN
/// (`arn:aws:execute-api:<region>:<account>:<apiId>/<path>`) the authorizer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodArn {
    pub region: String,
    pub account_id: String,
    pub resource_path: String,
}

impl MethodArn {
    pub fn parse(method_arn: &str) -> Result<Self, AuthorizerError> {
        let fields: Vec<&str> = method_arn.split(':').collect();
        if fields.len() <= API_RESOURCE_INDEX {
            return Err(malformed(method_arn, "not enough fields"));
        }

        let region = fields[REGION_INDEX];
        let account_id = fields[ACCOUNT_ID_INDEX];
        if region.is_empty() || account_id.is_empty() {
            return Err(malformed(method_arn, "missing region or account id"));
        }

        let resource_path = match fields.get(RESOURCE_PATH_INDEX) {
            Some(path) => Some(*path),
            None => fields[API_RESOURCE_INDEX]
                .split_once('/')
                .map(|(_api_id, path)| path),
        }
        .filter(|path| !path.is_empty())
        .ok_or_else(|| malformed(method_arn, "missing resource path"))?;

        Ok(Self {
            region: region.to_owned(),
            account_id: account_id.to_owned(),
            resource_path: resource_path.to_owned(),
        })
    }

    pub fn principal_id(&self) -> String {
        format!(
            "apiUser-{}-{}-{}",
            self.region, self.account_id, self.resource_path
        )
    }
}

fn malformed(method_arn: &str, reason: &str) -> AuthorizerError {
    AuthorizerError::MalformedMethodArn(format!("{reason}: {method_arn}"))
}
