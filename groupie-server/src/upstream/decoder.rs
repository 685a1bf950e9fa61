use serde::de::DeserializeOwned;

use super::error::{Resource, UpstreamError};

/// Decode a raw upstream payload into `T`.
///
/// Malformed JSON or a payload of the wrong shape is a decode error. Fields
/// missing from an otherwise well-shaped payload take their default value.
pub fn decode<T: DeserializeOwned>(resource: Resource, bytes: &[u8]) -> Result<T, UpstreamError> {
    serde_json::from_slice(bytes).map_err(|source| UpstreamError::Decode { resource, source })
}
