//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// HTTP methods recognized on the wire.
///
/// Only [`Method::GET`] is served; the others parse so the handler can name
/// them in a 405 response instead of treating the line as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: the single supported retrieval verb.
    GET,
    /// POST method: recognized, rejected with 405.
    POST,
    /// PUT method: recognized, rejected with 405.
    PUT,
    /// DELETE method: recognized, rejected with 405.
    DELETE,
    /// HEAD method: recognized, rejected with 405.
    HEAD,
    /// OPTIONS method: recognized, rejected with 405.
    OPTIONS,
    /// PATCH method: recognized, rejected with 405.
    PATCH,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            "PATCH" => Ok(Method::PATCH),
            _ => Err(Error::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
