use crate::result::error::{PipelineError, Result};
use model::image::ImagePayload;
use serde_json::Value;

/// Name of the JSON field holding the base64 image.
pub const IMAGE_DATA_FIELD: &str = "imgdata";

/// Extracts the image from the request body.
///
/// A body that is not JSON and a JSON body without a usable `imgdata` are both
/// `MalformedPayload`.
pub fn validate_request(body: Option<&str>) -> Result<ImagePayload> {
    let body = body
        .filter(|body| !body.is_empty())
        .ok_or(PipelineError::MissingBody)?;

    let payload: Value = serde_json::from_str(body).map_err(|_| {
        PipelineError::MalformedPayload("body failed to be converted to a json object".to_owned())
    })?;

    let image_data = payload
        .get(IMAGE_DATA_FIELD)
        .and_then(Value::as_str)
        .filter(|image_data| !image_data.is_empty())
        .ok_or_else(|| {
            PipelineError::MalformedPayload(format!(
                "{IMAGE_DATA_FIELD} not found in request body"
            ))
        })?;

    Ok(ImagePayload {
        image_data_base64: image_data.to_owned(),
    })
}
