//! A minimal static-content HTTP server library.
//!
//! This library serves files from a content root over HTTP with a focus on
//! simplicity, correctness, and safe path handling.
//!
//! # Features
//!
//! - Request-line parsing for the supported retrieval verb (GET)
//! - Path resolution confined to the content root (directory traversal is
//!   normalized away, never served)
//! - Default-document substitution for directory targets (`/` serves
//!   `index.html`)
//! - Content-type inference from file extensions with an
//!   `application/octet-stream` fallback
//! - Status-code-driven responses (200, 400, 403, 404, 405, 500) with
//!   generated HTML error pages
//! - A sequential accept loop with graceful Ctrl+C shutdown
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use microserve_rs::{parse_request_line, Method};
//!
//! let request = parse_request_line("GET /about.html HTTP/1.1").unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.target, "/about.html");
//! ```
//!
//! ## Error handling
//!
//! ```
//! use microserve_rs::{parse_request_line, ParserError};
//!
//! match parse_request_line("BREW /coffee HTTP/1.1") {
//!     Ok(_) => println!("Request accepted"),
//!     Err(ParserError::UnsupportedMethod(method)) => println!("Rejected method: {method}"),
//!     Err(err) => println!("Other error: {err}"),
//! }
//! ```
//!
//! ## Running a server
//!
//! ```no_run
//! use microserve_rs::{HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), microserve_rs::ServerError> {
//!     let config = ServerConfig {
//!         addr: "127.0.0.1:8081".parse().unwrap(),
//!         content_root: "webroot".into(),
//!         ..ServerConfig::default()
//!     };
//!
//!     HttpServer::new(config).start().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, Method, Request, parse_request_line};
pub use server::{
    Error as ServerError, HttpResponse, HttpServer, PathKind, PathResolver, RequestHandler,
    ResolvedPath, ServerConfig, StatusCode,
};
