use crate::http::lambda_proxy::ResponseEnvelope;
use crate::result::error::{LambdaError, PipelineError};
use lambda_http::http::header::{HeaderName, HeaderValue};
use lambda_http::Response;
use model::entity::NameResult;
use reqwest::StatusCode;

// error codes
pub const BAD_REQUEST_ERROR_CODE: &str = "bad_request";
pub const SERVER_ERROR_CODE: &str = "server_error";

/// Status and log code for a pipeline failure.
pub struct HttpError {
    pub code: &'static str,
    pub status_code: StatusCode,
}

impl From<&PipelineError> for HttpError {
    fn from(error: &PipelineError) -> Self {
        let status_code = error.status_code();
        let code = if status_code.is_client_error() {
            BAD_REQUEST_ERROR_CODE
        } else {
            SERVER_ERROR_CODE
        };

        Self { code, status_code }
    }
}

/// Logs the failure and builds its envelope. The body is always the `unknown` name pair;
/// error details are never sent to the client.
pub fn pipeline_error_response(error: PipelineError) -> ResponseEnvelope {
    let HttpError { code, status_code } = HttpError::from(&error);

    if status_code.is_server_error() {
        tracing::error!(code, error = ?error, "{error}");
    } else {
        tracing::warn!(code, error = ?error, "{error}");
    }

    ResponseEnvelope::json(status_code, &NameResult::unknown())
}

/// Last resort when an envelope cannot be turned into an HTTP response.
pub fn unknown_error_response(cause: LambdaError) -> Response<String> {
    tracing::error!(error = ?cause, "{:?}", cause);

    let envelope =
        ResponseEnvelope::json(StatusCode::INTERNAL_SERVER_ERROR, &NameResult::unknown());
    let mut response = Response::new(envelope.body);
    *response.status_mut() = envelope.status_code;

    for (k, v) in envelope.headers {
        let header = (HeaderName::from_bytes(k.as_bytes()), HeaderValue::from_str(&v));
        if let (Ok(name), Ok(value)) = header {
            response.headers_mut().insert(name, value);
        }
    }

    response
}
