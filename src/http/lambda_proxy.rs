use crate::http::errors::unknown_error_response;
use crate::result::error::LambdaError;
use anyhow::anyhow;
use lambda_http::http::StatusCode;
use lambda_http::Response;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOWED_METHODS: &str = "POST,OPTIONS";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Lambda proxy integration response. Every envelope carries the CORS headers because the
/// proxy integration does not add them on its own.
///
/// Headers are kept ordered so identical responses serialize to identical bytes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[serde(serialize_with = "serialize_status_code")]
    pub status_code: StatusCode,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self {
            status_code: StatusCode::OK,
            headers: BTreeMap::from([
                (
                    "Access-Control-Allow-Origin".to_owned(),
                    ALLOWED_ORIGIN.to_owned(),
                ),
                (
                    "Access-Control-Allow-Headers".to_owned(),
                    ALLOWED_HEADERS.to_owned(),
                ),
                (
                    "Access-Control-Allow-Methods".to_owned(),
                    ALLOWED_METHODS.to_owned(),
                ),
                ("Content-Type".to_owned(), JSON_CONTENT_TYPE.to_owned()),
            ]),
            body: "{}".to_owned(),
        }
    }
}

impl ResponseEnvelope {
    /// Builds an envelope with `value` as its JSON body.
    pub fn json<T: Serialize>(status_code: StatusCode, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap_or_else(|e| {
            tracing::error!(error = ?e, "Error serializing response body: {e}");
            "{}".to_owned()
        });

        Self {
            status_code,
            body,
            ..Self::default()
        }
    }
}

fn serialize_status_code<S: Serializer>(
    status_code: &StatusCode,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status_code.as_u16())
}

impl TryFrom<ResponseEnvelope> for Response<String> {
    type Error = Response<String>;

    fn try_from(envelope: ResponseEnvelope) -> Result<Self, Self::Error> {
        let mut response = Response::builder().status(envelope.status_code);

        for (k, v) in envelope.headers {
            response = response.header(k, v);
        }

        response.body(envelope.body).map_err(|e| {
            unknown_error_response(LambdaError::Unknown(anyhow!(
                "Error building response: {e}"
            )))
        })
    }
}
