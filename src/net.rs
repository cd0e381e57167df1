//! Network layer: the transport contract and the buffered response model.

pub mod response;
pub mod transport;

pub use response::{read_response, Response};
pub use transport::{RawResponse, Request, Transport, TransportError};
#[cfg(feature = "reqwest_transport")]
pub use transport::ReqwestTransport;
