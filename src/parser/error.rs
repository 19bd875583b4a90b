//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while parsing an HTTP request line.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token does not name a known HTTP method.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request line has fewer than two tokens.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The connection delivered no request line at all.
    #[error("Empty request")]
    EmptyRequest,
}
