//! Tenant API client runtime
//!
//! This crate holds the hand-written contract every generated operation is
//! hosted on: the `MaybeUnset` sentinel, the `Response` envelope, the
//! transport clients, request/query/path encoding, the model discipline and
//! the single library-defined failure, "unexpected status".
//!
//! Generated operation modules implement [`Operation`] and expose the four
//! entry points by delegating to [`operation::sync_detailed`],
//! [`operation::sync`], [`operation::asyncio_detailed`] and
//! [`operation::asyncio`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod encoding;
pub mod model;
pub mod operation;
pub mod request;
pub mod transport;
pub mod types;
pub mod unset;

pub use client::{ApiClient, AuthenticatedClient, Authorization, Client, ClientConfig, TlsVerify};
pub use encoding::{encode_path, QueryValue};
pub use model::{AdditionalProperties, Model};
pub use operation::Operation;
pub use request::{ApiRequest, MultipartForm, MultipartPart, RequestBody};
pub use transport::RawResponse;
pub use types::{BinaryPart, Response};
pub use unset::MaybeUnset;

pub use bytes::Bytes;
pub use reqwest::header::HeaderMap;
pub use reqwest::{Method, StatusCode};

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// A documented-status miss on a client configured to raise
///
/// Carries the status code and the raw body exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Unexpected status code: {status_code}\n\nResponse content:\n{}",
    String::from_utf8_lossy(.content)
)]
pub struct UnexpectedStatus {
    /// HTTP status code
    pub status_code: StatusCode,
    /// Raw response body
    pub content: Bytes,
}

/// Error types for client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a status the operation does not document
    #[error(transparent)]
    UnexpectedStatus(#[from] UnexpectedStatus),

    /// Transport failure (DNS, connect, TLS, timeout, read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body did not match the declared schema
    #[error("Shape error: {0}")]
    Shape(#[from] serde_json::Error),

    /// A configured header name cannot be sent
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A configured header value cannot be sent
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    /// A path parameter would be removed by URL normalization (`.` or `..`)
    #[error("Invalid path parameter: {0:?}")]
    InvalidPathParameter(String),

    /// Reading a trust store or an upload file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The unexpected-status payload, if this is that failure
    pub fn as_unexpected_status(&self) -> Option<&UnexpectedStatus> {
        match self {
            Error::UnexpectedStatus(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether this error came from the HTTP engine
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
