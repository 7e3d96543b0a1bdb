#![allow(async_fn_in_trait)]

mod client;
mod connection;
mod headers;

use embedded_io_async::{ErrorKind, Read, Write};

pub use client::HttpClient;
pub use connection::{HttpConnection, HttpResponse};
pub use headers::{CacheControl, ContentHeaders, ContentType, HttpMethod, RequestHeaders};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    /// Could not open a connection to the device
    Connect,
    /// Socket read or write failed
    Io(ErrorKind),
    /// Peer closed the connection before a full response
    Closed,
    /// Malformed response head
    Parse,
    /// Response does not fit the receive buffers
    TooLarge,
    FormatHeaders,
    /// Request body does not fit the send buffer
    Serialize,
}

impl From<core::fmt::Error> for HttpError {
    fn from(_error: core::fmt::Error) -> Self {
        HttpError::FormatHeaders
    }
}

pub(crate) fn io_error<E: embedded_io_async::Error>(err: E) -> HttpError {
    HttpError::Io(err.kind())
}

pub type HttpResult = Result<(), HttpError>;

/// Opens byte streams to the device.
///
/// Every request gets its own connection, closed by the server after the response.
pub trait Connector {
    type Connection<'a>: Read + Write
    where
        Self: 'a;

    async fn connect(&mut self) -> Result<Self::Connection<'_>, HttpError>;
}
