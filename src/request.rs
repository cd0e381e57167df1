//! Per-call request options.
//!
//! A call is configured by an ordered list of [`RequestOption`]s which are
//! folded over [`RequestOptions::default()`]. Single-valued fields (bodies,
//! receivers, a given path parameter) keep the last value set; header values
//! accumulate.
//!
//! ```rust,no_run
//! use http_endpoint::{Endpoint, Receiver};
//! use http_endpoint::request::{with_path_param, with_json_receivers, with_request_header};
//! # fn main() -> Result<(), http_endpoint::EndpointError> {
//! #[derive(serde::Deserialize, Default)]
//! struct User { id: u64, name: String }
//!
//! let users = Endpoint::new("https://api.example.com/users/{id}", []);
//! let mut user = User::default();
//! let resp = users.get([
//!     with_path_param("id", 42),
//!     with_request_header("Accept", ["application/json"]),
//!     with_json_receivers(&mut user, Receiver::none()),
//! ])?;
//! # Ok(()) }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::headers::HeaderSet;

type DecodeFn<'a> = Box<dyn FnOnce(&[u8]) -> serde_json::Result<()> + 'a>;
type EncodeFn<'a> = Box<dyn FnOnce() -> serde_json::Result<Vec<u8>> + 'a>;

/// A caller-owned destination that a JSON response body is decoded into.
///
/// Built from `&mut T` for any `T: DeserializeOwned`, or [`Receiver::none`].
#[derive(Default)]
pub struct Receiver<'a> {
    decode: Option<DecodeFn<'a>>,
}

impl<'a> Receiver<'a> {
    /// No receiver: the body is left undecoded on the response.
    pub fn none() -> Self {
        Self { decode: None }
    }

    /// Decodes into `target`, replacing its previous value.
    pub fn new<T: DeserializeOwned + 'a>(target: &'a mut T) -> Self {
        Self {
            decode: Some(Box::new(move |body: &[u8]| -> serde_json::Result<()> {
                *target = serde_json::from_slice(body)?;
                Ok(())
            })),
        }
    }

    pub fn is_some(&self) -> bool {
        self.decode.is_some()
    }

    /// Decodes `body` into the target. Returns `Ok(false)` when there is no
    /// target.
    pub(crate) fn receive(self, body: &[u8]) -> serde_json::Result<bool> {
        match self.decode {
            Some(decode) => decode(body).map(|_| true),
            None => Ok(false),
        }
    }
}

impl<'a, T: DeserializeOwned + 'a> From<&'a mut T> for Receiver<'a> {
    fn from(target: &'a mut T) -> Self {
        Receiver::new(target)
    }
}

impl fmt::Debug for Receiver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_some() { "Receiver(..)" } else { "Receiver(none)" })
    }
}

/// A value to be sent as a JSON body. Serialization happens only if the
/// body is actually used.
pub struct JsonBody<'a> {
    encode: EncodeFn<'a>,
}

impl<'a> JsonBody<'a> {
    pub fn new<T: Serialize + 'a>(value: T) -> Self {
        Self {
            encode: Box::new(move || serde_json::to_vec(&value)),
        }
    }

    pub(crate) fn encode(self) -> serde_json::Result<Vec<u8>> {
        (self.encode)()
    }
}

impl fmt::Debug for JsonBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonBody(..)")
    }
}

/// Resolved configuration for a single call.
#[derive(Debug, Default)]
pub struct RequestOptions<'a> {
    pub path_params: HashMap<String, String>,
    pub headers: HeaderSet,
    pub success_receiver: Receiver<'a>,
    pub error_receiver: Receiver<'a>,
    pub json_body: Option<JsonBody<'a>>,
    pub raw_body: Option<Vec<u8>>,
}

impl<'a> RequestOptions<'a> {
    /// Applies `opts` in order on top of the defaults.
    pub fn fold<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = RequestOption<'a>>,
    {
        let mut options = Self::default();
        for opt in opts {
            opt(&mut options);
        }
        options
    }
}

/// A single request-level setter.
pub type RequestOption<'a> = Box<dyn FnOnce(&mut RequestOptions<'a>) + 'a>;

/// Sets path parameter `key`, used to fill `{key}` in the URL template.
///
/// The value is rendered with its `Display` form.
pub fn with_path_param<'a>(key: impl Into<String>, value: impl fmt::Display) -> RequestOption<'a> {
    let key = key.into();
    let value = value.to_string();
    Box::new(move |o| {
        o.path_params.insert(key, value);
    })
}

/// Sets both receivers at once. Pass [`Receiver::none()`] for a side that
/// should stay undecoded.
///
/// A decoded body replaces the target as a whole. Fields missing from a
/// partial JSON body need `#[serde(default)]` on the target type.
pub fn with_json_receivers<'a>(
    success: impl Into<Receiver<'a>>,
    error: impl Into<Receiver<'a>>,
) -> RequestOption<'a> {
    let success = success.into();
    let error = error.into();
    Box::new(move |o| {
        o.success_receiver = success;
        o.error_receiver = error;
    })
}

/// Sets only the receiver used for statuses below 400.
pub fn with_success_receiver<'a, T: DeserializeOwned + 'a>(target: &'a mut T) -> RequestOption<'a> {
    Box::new(move |o| o.success_receiver = Receiver::new(target))
}

/// Sets only the receiver used for statuses of 400 and above.
pub fn with_error_receiver<'a, T: DeserializeOwned + 'a>(target: &'a mut T) -> RequestOption<'a> {
    Box::new(move |o| o.error_receiver = Receiver::new(target))
}

/// Adds header values for this call only. A name given here replaces the
/// endpoint's default values for that name.
pub fn with_request_header<'a, I, V>(name: impl Into<String>, values: I) -> RequestOption<'a>
where
    I: IntoIterator<Item = V> + 'a,
    V: AsRef<str>,
{
    let name = name.into();
    Box::new(move |o| o.headers.add(&name, values))
}

/// Sends `value` serialized as JSON. Ignored when a raw body is also set.
pub fn with_json_body<'a, T: Serialize + 'a>(value: T) -> RequestOption<'a> {
    Box::new(move |o| o.json_body = Some(JsonBody::new(value)))
}

/// Sends `body` verbatim.
pub fn with_body<'a>(body: impl Into<Vec<u8>>) -> RequestOption<'a> {
    let body = body.into();
    Box::new(move |o| o.raw_body = Some(body))
}
