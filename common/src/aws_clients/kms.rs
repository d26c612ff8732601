use crate::config::aws_client_config::AwsClientConfig;
use crate::config::ConfigLoader;
use rusoto_core::credential::ChainProvider;
use rusoto_kms::KmsClient;

/// Builds a KMS client for the configured region, or for LocalStack when its endpoint is set.
pub fn get_kms_client() -> KmsClient {
    let config = ConfigLoader::load_default::<AwsClientConfig>();
    let request_dispatcher = rusoto_core::request::HttpClient::new()
        .unwrap_or_else(|e| panic!("Unable to build Rusoto HTTP Client: {e}"));

    KmsClient::new_with(
        request_dispatcher,
        ChainProvider::default(),
        config.region(),
    )
}
