use crate::errors::EndpointError;
use crate::request::JsonBody;

/// Picks the request body: raw bytes when set, otherwise the serialized JSON
/// value, otherwise nothing.
///
/// A JSON value shadowed by a raw body is never serialized.
pub fn encode_body(raw: Option<Vec<u8>>, json: Option<JsonBody<'_>>) -> Result<Option<Vec<u8>>, EndpointError> {
    if let Some(raw) = raw {
        return Ok(Some(raw));
    }

    match json {
        Some(json) => json.encode().map(Some).map_err(EndpointError::Encoding),
        None => Ok(None),
    }
}
