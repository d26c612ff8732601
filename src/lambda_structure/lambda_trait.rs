use crate::config::GlobalConfig;
use crate::lambda_structure::logging::init_tracing;
use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// Builds the state kept between executions of the same container.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// Business logic of the lambda.
    async fn run(
        payload: Self::InputBody,
        persisted: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// A pre-configured main function that bootstraps an instance of this lambda and starts
    /// the runtime loop. Call this from the top-level main function for a given lambda.
    async fn main() -> Result<(), Error> {
        let global_config = ConfigLoader::load_default::<GlobalConfig>();
        let _guard = init_tracing(global_config.verbose_log_mode)?;

        // Get a reference to avoid moving the persisted state into the below closure.
        let persisted = &Self::bootstrap().await?;

        let service = move |event: LambdaEvent<Self::InputBody>| async move {
            Self::service(event, persisted).await
        };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Called on every execution; logs the event context and delegates to `run`.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        persisted: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::info!(request_id = %context.request_id, "Execution started");

        Self::run(payload, persisted).await
    }
}

#[macro_export]
macro_rules! lambda_main {
    ($lambda: ty) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use $crate::lambda_structure::lambda_trait::Lambda;
            <$lambda>::main().await
        }
    };
}
