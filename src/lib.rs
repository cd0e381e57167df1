//! Reusable HTTP endpoints with templated URLs and JSON receivers.
//!
//! An [`Endpoint`] binds a URL template such as
//! `https://api.example.com/users/{id}` to a transport and default headers.
//! Each call fills in path parameters, adds per-call headers and an optional
//! JSON or raw body, sends the request, buffers the response and decodes its
//! body into a caller-supplied receiver: the success receiver below status
//! 400, the error receiver from 400 up.
//!
//! ```rust,no_run
//! use http_endpoint::{Endpoint, Receiver};
//! use http_endpoint::request::{with_json_receivers, with_path_param};
//! # fn main() -> Result<(), http_endpoint::EndpointError> {
//! #[derive(serde::Deserialize, Default, Debug)]
//! struct User { id: u64, name: String }
//! #[derive(serde::Deserialize, Default, Debug)]
//! struct ApiError { message: String }
//!
//! let users = Endpoint::new("https://api.example.com/users/{id}", []);
//!
//! let mut user = User::default();
//! let mut problem = ApiError::default();
//! let resp = users.get([
//!     with_path_param("id", 42),
//!     with_json_receivers(&mut user, &mut problem),
//! ])?;
//! if resp.is_error() {
//!     eprintln!("failed: {problem:?}");
//! }
//! # let _ = Receiver::none();
//! # Ok(()) }
//! ```
//!
//! Requests go through the [`net::Transport`] trait. The blocking `reqwest`
//! client is used when no transport is given (feature `reqwest_transport`,
//! enabled by default).

pub mod body;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod errors;
pub mod headers;
pub mod net;
pub mod request;
pub mod template;

pub use config::{with_client, with_header, EndpointBuilder, EndpointOption, EndpointOptions};
pub use endpoint::Endpoint;
pub use errors::EndpointError;
pub use net::{Response, Transport};
pub use request::{
    with_body, with_error_receiver, with_json_body, with_json_receivers, with_path_param, with_request_header,
    with_success_receiver, Receiver, RequestOption, RequestOptions,
};
