//! Buffered HTTP response model.
//!
//! A [`Response`] is what every endpoint call returns on success. The
//! transport's body stream has already been read to the end and closed by
//! the time a `Response` exists, so holding on to one never keeps a
//! connection busy.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. It is empty for `204 No Content`
//!   and for responses that declare `Content-Length: 0`.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is the canonical reason phrase and may be `"Unknown"` for
//!   non-standard codes.
//!
use std::io::{self, Read};

use http::{HeaderMap, StatusCode};
use url::Url;

use crate::decode::ERROR_STATUS_THRESHOLD;
use crate::errors::EndpointError;
use crate::net::transport::RawResponse;

/// Fully buffered response of an endpoint call.
#[derive(Debug, Clone)]
pub struct Response {
    /// URL the request was sent to.
    pub url: Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// True for statuses of [`ERROR_STATUS_THRESHOLD`] and above.
    pub fn is_error(&self) -> bool {
        self.status >= ERROR_STATUS_THRESHOLD
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Reads `raw` into a [`Response`].
///
/// The body stream is consumed to the end and dropped on every path,
/// including when reading fails.
pub fn read_response(url: Url, raw: RawResponse) -> Result<Response, EndpointError> {
    let RawResponse {
        status,
        headers,
        content_length,
        mut body,
    } = raw;

    let mut resp = Response {
        url,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        headers,
        body: Vec::new(),
    };

    if status == StatusCode::NO_CONTENT || content_length == Some(0) {
        // Nothing of interest, but the stream still has to be emptied.
        if let Err(e) = io::copy(&mut body, &mut io::sink()) {
            log::debug!("discarding body of {} response failed: {}", resp.status, e);
        }
        return Ok(resp);
    }

    body.read_to_end(&mut resp.body)?;
    Ok(resp)
}
