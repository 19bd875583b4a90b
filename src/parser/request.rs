//! Request-line parsing and representation.

use std::str::FromStr;

use crate::parser::error::Error;
use crate::parser::method::Method;

/// A parsed HTTP request line.
///
/// Only the pieces the static-file pipeline needs are kept: the method and
/// the raw request target (path plus optional query). The request is
/// constructed per connection and discarded after one response.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The raw request target, e.g. `/about.html` or `/search?q=term`.
    pub target: String,
}

/// Parse the first line of an HTTP request.
///
/// Accepts `<METHOD> <target> <http-version>`. The version token is
/// tolerated but not interpreted, so a bare `GET /index.html` is also
/// accepted. Extra whitespace between tokens is ignored.
///
/// # Errors
///
/// - [`Error::EmptyRequest`] when the line is empty or whitespace-only
/// - [`Error::MalformedRequestLine`] when fewer than two tokens are present
/// - [`Error::UnsupportedMethod`] when the method token is not a known verb
pub fn parse_request_line(line: &str) -> Result<Request, Error> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Err(Error::EmptyRequest);
    }

    let mut tokens = line.split_whitespace();
    let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
        return Err(Error::MalformedRequestLine(line.to_string()));
    };

    let method = Method::from_str(method)?;

    Ok(Request {
        method,
        target: target.to_string(),
    })
}
