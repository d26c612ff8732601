use http::Response;
use lambda_http::{Body, Request};

pub type HttpLambdaResponse = Result<Response<String>, Response<String>>;

// This macro is intended for lambdas that sit behind an API Gateway proxy integration
// (internally named 'http lambdas'). It sets up logging, builds the state that is preserved
// between executions and runs the handler, which may return errors as HTTP responses with
// the `?` operator.
//
// Example usage:
// ```
// http_lambda_main!(
//     { .. State },
//     handler_fn
// );
// ```
#[macro_export]
macro_rules! http_lambda_main {
    ($persisted_block:block, $handler: ident) => {
        #[tokio::main]
        async fn main() -> Result<(), lambda_http::Error> {
            use common::config::ConfigLoader;
            use http::Response;
            use lambda_http::{run, service_fn, Request};
            use $crate::config::GlobalConfig;
            use $crate::lambda_structure::logging::init_tracing;

            let global_config = ConfigLoader::load_default::<GlobalConfig>();
            let _guard = init_tracing(global_config.verbose_log_mode)?;

            let persisted = &{ $persisted_block };

            let service = move |request: Request| async move {
                tracing::info!(
                    method = %request.method(),
                    path = %request.uri().path(),
                    "Execution started"
                );

                let response: Result<Response<String>, lambda_http::Error> =
                    match $handler(request, persisted).await {
                        Ok(response) => Ok(response),
                        Err(response) => Ok(response),
                    };

                response
            };

            run(service_fn(service)).await
        }
    };
}

pub trait RequestExtractor {
    /// Raw request body as text. `None` when the request carries no body.
    ///
    /// Binary bodies are decoded as UTF-8, replacing invalid sequences, and are left for
    /// the payload validation to reject.
    fn extract_body_text(&self) -> Option<String>;
}

impl RequestExtractor for Request {
    fn extract_body_text(&self) -> Option<String> {
        match self.body() {
            Body::Empty => None,
            Body::Text(text) => Some(text.clone()),
            Body::Binary(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}
