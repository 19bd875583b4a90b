//! Error types for the static file server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while handling a connection.
///
/// These never propagate past the accept loop; the handler has already
/// written the matching HTTP response (or deliberately stayed silent)
/// before returning one of them.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error on the connection or the filesystem.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The resolved path names nothing servable.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The resolved path is a directory without a default document.
    #[error("Directory access denied: {0}")]
    Forbidden(String),

    /// The request used a method other than GET.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}
