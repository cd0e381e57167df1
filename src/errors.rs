use crate::net::transport::TransportError;

/// Everything that can go wrong while executing a call against an endpoint.
///
/// Every variant is terminal for the call that produced it. Nothing is
/// retried internally and no partial [`Response`](crate::net::Response) is
/// handed out alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The endpoint or request is misconfigured (bad URL template, invalid
    /// header, no transport available).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The JSON body could not be serialized.
    #[error("Cannot encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The transport failed to deliver the request or produce a response.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// The response body stream could not be read.
    #[error("Cannot read response body: {0}")]
    Read(#[from] std::io::Error),

    /// The response body is not valid JSON for the receiver.
    #[error("Cannot decode response body: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl EndpointError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        EndpointError::Configuration(msg.into())
    }
}
