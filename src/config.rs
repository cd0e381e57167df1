//! Endpoint configuration.
//!
//! `EndpointOptions` holds what an [`Endpoint`] is built from: the transport
//! to send requests through and the headers every request carries by
//! default. It is produced either by folding a list of
//! [`EndpointOption`] setters over [`EndpointOptions::default()`] or by the
//! fluent [`EndpointBuilder`]. Both routes run the same setters.
//!
//! # Examples
//!
//! ## Setter list
//! ```rust,no_run
//! use http_endpoint::Endpoint;
//! use http_endpoint::config::with_header;
//!
//! let todos = Endpoint::new(
//!     "https://jsonplaceholder.typicode.com/todos/{id}",
//!     [with_header("Accept", ["application/json"])],
//! );
//! ```
//!
//! ## Builder
//! ```rust,no_run
//! use http_endpoint::Endpoint;
//! use http_endpoint::net::ReqwestTransport;
//!
//! let todos = Endpoint::builder("https://jsonplaceholder.typicode.com/todos/{id}")
//!     .client(ReqwestTransport::new())
//!     .header("Accept", ["application/json"])
//!     .header("X-Client", ["docs"])
//!     .build();
//! ```
//!
//! # Defaults
//! - transport: none chosen; the endpoint falls back to
//!   `ReqwestTransport` when the `reqwest_transport` feature is enabled.
//! - headers: empty.

use std::fmt;
use std::sync::Arc;

use crate::endpoint::Endpoint;
use crate::headers::HeaderSet;
use crate::net::Transport;

#[derive(Clone, Default)]
pub struct EndpointOptions {
    /// Transport override. `None` means the default transport.
    pub transport: Option<Arc<dyn Transport>>,
    /// Headers sent with every request of the endpoint.
    pub headers: HeaderSet,
}

impl fmt::Debug for EndpointOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointOptions")
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("headers", &self.headers)
            .finish()
    }
}

impl EndpointOptions {
    /// Applies `opts` in order on top of the defaults.
    pub fn fold<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = EndpointOption>,
    {
        let mut options = Self::default();
        for opt in opts {
            opt(&mut options);
        }
        options
    }
}

/// A single endpoint-level setter.
pub type EndpointOption = Box<dyn FnOnce(&mut EndpointOptions)>;

/// Sends the endpoint's requests through `transport`.
pub fn with_client<T: Transport + 'static>(transport: T) -> EndpointOption {
    let transport: Arc<dyn Transport> = Arc::new(transport);
    Box::new(move |o| o.transport = Some(transport))
}

/// Adds default header values. Repeated calls for the same name add values.
pub fn with_header<I, V>(name: impl Into<String>, values: I) -> EndpointOption
where
    I: IntoIterator<Item = V> + 'static,
    V: AsRef<str>,
{
    let name = name.into();
    Box::new(move |o| o.headers.add(&name, values))
}

/// Fluent builder for an [`Endpoint`].
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    url_template: String,
    inner: EndpointOptions,
}

impl EndpointBuilder {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            inner: EndpointOptions::default(),
        }
    }

    #[inline]
    fn map(mut self, f: impl FnOnce(&mut EndpointOptions)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn client<T: Transport + 'static>(self, transport: T) -> Self { self.map(with_client(transport)) }
    pub fn header<I, V>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V> + 'static,
        V: AsRef<str>,
    {
        self.map(with_header(name, values))
    }

    /// Apply a setter produced elsewhere, e.g. a shared list of options.
    pub fn option(self, opt: EndpointOption) -> Self { self.map(opt) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut EndpointOptions)) -> Self { self.map(f) }

    pub fn build(self) -> Endpoint {
        Endpoint::from_options(self.url_template, self.inner)
    }
}
