use crate::memegen::consts::{INSTANCE_IMAGE_URL_KEY, RESULT_KEY};
use crate::memegen::errors::UpstreamError;
use serde_json::Value;

/// Pulls `result.instanceImageUrl` out of an upstream response body.
///
/// The body is decoded as a generic [`Value`] first and then walked one level at a time, so
/// any shape the API did not promise ends up as [`UpstreamError::Schema`] carrying the whole
/// document.
pub fn extract_image_url(body: &[u8]) -> Result<String, UpstreamError> {
    let document: Value = serde_json::from_slice(body)?;
    match instance_image_url(&document) {
        Some(image_url) => Ok(image_url.to_string()),
        None => Err(UpstreamError::Schema { document }),
    }
}

fn instance_image_url(document: &Value) -> Option<&str> {
    document
        .as_object()?
        .get(RESULT_KEY)?
        .as_object()?
        .get(INSTANCE_IMAGE_URL_KEY)?
        .as_str()
}
