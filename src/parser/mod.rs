//! Request-line parsing.
//!
//! The server only interprets the first line of each request; header lines
//! after it are read up to the blank separator and discarded by the
//! connection handler.

mod error;
mod method;
mod request;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::Request;

// Re-export the parse_request_line function
pub use request::parse_request_line;
