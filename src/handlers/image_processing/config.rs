use providers::google::auth::DEFAULT_TOKEN_URI;
use providers::google::language::DEFAULT_LANGUAGE_API_URL;
use providers::google::vision::DEFAULT_VISION_API_URL;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// KMS encrypted Google service account key, base64 encoded. Checked on every
    /// invocation so a missing value is reported as a server error, not a failed deploy.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Base URL of Google Cloud Vision.
    #[serde(default = "default_vision_api_url")]
    pub vision_api_url: String,

    /// Base URL of Google Cloud Natural Language.
    #[serde(default = "default_language_api_url")]
    pub language_api_url: String,

    /// OAuth2 endpoint service account keys are exchanged at.
    #[serde(default = "default_google_token_uri")]
    pub google_token_uri: String,
}

fn default_vision_api_url() -> String {
    DEFAULT_VISION_API_URL.to_owned()
}

fn default_language_api_url() -> String {
    DEFAULT_LANGUAGE_API_URL.to_owned()
}

fn default_google_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_owned()
}
