//! The transport contract.
//!
//! A [`Transport`] takes a fully assembled [`Request`] and performs the
//! network round trip. The endpoint layer only ever talks to this trait,
//! so tests can plug in doubles and callers can bring their own client.
//!
//! With the `reqwest_transport` feature (on by default) a blocking
//! [`ReqwestTransport`] is available and used when an endpoint is built
//! without an explicit client.
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// Opaque error produced by a transport.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// What a transport hands back: status line, headers and an unread body.
///
/// Dropping the response closes the body stream.
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Declared `Content-Length`, if the transport knows it.
    pub content_length: Option<u64>,
    pub body: Box<dyn Read + Send>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, content_length: Option<u64>, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            headers,
            content_length,
            body: Box::new(body),
        }
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Sends a request and returns the raw response.
///
/// Implementations must be safe to share between threads; an endpoint may be
/// used from many threads at once.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
        (**self).send(request)
    }
}

#[cfg(feature = "reqwest_transport")]
pub use self::reqwest_impl::ReqwestTransport;

#[cfg(feature = "reqwest_transport")]
mod reqwest_impl {
    use std::sync::OnceLock;

    use super::{RawResponse, Request, Transport, TransportError};

    /// Blocking transport backed by `reqwest`.
    ///
    /// Timeouts, TLS and proxies are whatever the wrapped client is
    /// configured with. Without an explicit client, a default one is created
    /// on first use.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: OnceLock<reqwest::blocking::Client>,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: reqwest::blocking::Client) -> Self {
            Self { client: OnceLock::from(client) }
        }

        fn client(&self) -> &reqwest::blocking::Client {
            self.client.get_or_init(reqwest::blocking::Client::new)
        }
    }

    impl Transport for ReqwestTransport {
        fn send(&self, request: Request) -> Result<RawResponse, TransportError> {
            let mut builder = self
                .client()
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let res = builder.send()?;
            let status = res.status();
            let headers = res.headers().clone();
            let content_length = res.content_length();

            // The blocking response is itself the body reader.
            Ok(RawResponse::new(status, headers, content_length, res))
        }
    }
}
