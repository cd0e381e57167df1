//! The endpoint handle and its request pipeline.
//!
//! An [`Endpoint`] is bound to one URL template and a set of defaults. It is
//! built once and then called any number of times, from any number of
//! threads, through its verb methods. Each call runs the same pipeline:
//!
//! 1. fold the request options,
//! 2. resolve the URL template against the path parameters,
//! 3. validate headers and encode the body,
//! 4. send through the transport,
//! 5. buffer the response and decode it into the matching receiver.
//!
//! ```rust,no_run
//! use http_endpoint::{Endpoint, Receiver};
//! use http_endpoint::request::{with_json_body, with_json_receivers};
//! # fn main() -> Result<(), http_endpoint::EndpointError> {
//! #[derive(serde::Serialize)]
//! struct NewTodo<'a> { title: &'a str }
//! #[derive(serde::Deserialize, Default)]
//! struct Created { id: u64 }
//!
//! let todos = Endpoint::new("https://jsonplaceholder.typicode.com/todos", []);
//! let mut created = Created::default();
//! todos.post([
//!     with_json_body(NewTodo { title: "write docs" }),
//!     with_json_receivers(&mut created, Receiver::none()),
//! ])?;
//! # Ok(()) }
//! ```
use std::fmt;
use std::sync::Arc;

use http::Method;

use crate::body::encode_body;
use crate::config::{EndpointBuilder, EndpointOption, EndpointOptions};
use crate::decode::decode_response;
use crate::errors::EndpointError;
use crate::headers::{merge_headers, HeaderSet};
use crate::net::{read_response, Request, Response, Transport};
use crate::request::{RequestOption, RequestOptions};
use crate::template::resolve_url;

/// Reusable handle bound to a URL template and default configuration.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Endpoint {
    url_template: String,
    transport: Option<Arc<dyn Transport>>,
    headers: HeaderSet,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("url_template", &self.url_template)
            .field("has_transport", &self.transport.is_some())
            .field("headers", &self.headers)
            .finish()
    }
}

impl Endpoint {
    /// Creates an endpoint from a URL template and endpoint-level options,
    /// applied in order.
    ///
    /// The template is only parsed when a request is made; a malformed
    /// template surfaces as [`EndpointError::Configuration`] on each call.
    pub fn new<I>(url_template: impl Into<String>, opts: I) -> Self
    where
        I: IntoIterator<Item = EndpointOption>,
    {
        Self::from_options(url_template.into(), EndpointOptions::fold(opts))
    }

    pub fn builder(url_template: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder::new(url_template)
    }

    pub(crate) fn from_options(url_template: String, options: EndpointOptions) -> Self {
        Self {
            url_template,
            transport: options.transport.or_else(default_transport),
            headers: options.headers,
        }
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn default_headers(&self) -> &http::HeaderMap {
        self.headers.map()
    }

    pub fn head<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::HEAD, opts)
    }

    pub fn get<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::GET, opts)
    }

    pub fn post<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::POST, opts)
    }

    pub fn put<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::PUT, opts)
    }

    pub fn patch<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::PATCH, opts)
    }

    pub fn delete<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::DELETE, opts)
    }

    pub fn options<'a>(&self, opts: impl IntoIterator<Item = RequestOption<'a>>) -> Result<Response, EndpointError> {
        self.execute(Method::OPTIONS, opts)
    }

    /// Runs one request with an arbitrary method.
    ///
    /// Either a fully read [`Response`] is returned, with the matching
    /// receiver filled, or an error; never both.
    pub fn execute<'a>(
        &self,
        method: Method,
        opts: impl IntoIterator<Item = RequestOption<'a>>,
    ) -> Result<Response, EndpointError> {
        let RequestOptions {
            path_params,
            headers,
            success_receiver,
            error_receiver,
            json_body,
            raw_body,
        } = RequestOptions::fold(opts);

        let url = resolve_url(&self.url_template, &path_params)?;
        self.headers.validate()?;
        let request_headers = headers.into_map()?;
        let body = encode_body(raw_body, json_body)?;

        let transport = self
            .transport
            .as_ref()
            .ok_or_else(|| EndpointError::configuration("no transport configured for endpoint"))?;

        let request = Request {
            method: method.clone(),
            url: url.clone(),
            headers: merge_headers(self.headers.map(), &request_headers),
            body,
        };

        log::debug!("{} {}", method, url);
        let raw = transport.send(request).map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            EndpointError::Transport(e)
        })?;

        let resp = read_response(url, raw)?;
        log::debug!("{} {} -> {} ({} bytes)", method, resp.url, resp.status, resp.body.len());

        decode_response(&resp, success_receiver, error_receiver)?;
        Ok(resp)
    }
}

#[cfg(feature = "reqwest_transport")]
fn default_transport() -> Option<Arc<dyn Transport>> {
    Some(Arc::new(crate::net::ReqwestTransport::new()))
}

#[cfg(not(feature = "reqwest_transport"))]
fn default_transport() -> Option<Arc<dyn Transport>> {
    None
}
