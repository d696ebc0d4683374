//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The session endpoint answered with a non-200 status.
    #[error("authentication failed with status {status}")]
    Auth { status: StatusCode },

    /// The conversation endpoint answered with a non-200 status.
    #[error("conversation request failed with status {status}")]
    Request { status: StatusCode },

    /// Connection or read failure in the underlying HTTP transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The session endpoint returned a body that is not valid JSON or
    /// lacks the `accessToken` field.
    #[error("malformed session response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A credential or user agent cannot be encoded as an HTTP header value.
    #[error("{0} contains characters not permitted in an HTTP header")]
    InvalidHeader(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
