use serde::{self, Deserialize};

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Current AWS region.
    pub aws_region: String,

    /// Logs at INFO instead of WARN.
    #[serde(default)]
    pub verbose_log_mode: bool,

    /// Only used for development. LocalStack endpoint
    #[serde(default)]
    pub localstack_test_mode_endpoint: Option<String>,
}
