//! Static-content HTTP server.
//!
//! This module resolves request targets to files under a content root and
//! emits status-code-driven responses. Connections are handled one at a
//! time; the handler itself keeps no shared mutable state, so it is equally
//! safe to run one handler per connection in parallel.

mod config;
mod error;
mod handler;
mod http_server;
pub mod mime;
mod resolver;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use handler::RequestHandler;
pub use http_server::HttpServer;
pub use resolver::{PathKind, PathResolver, ResolvedPath};
pub use response::{HttpResponse, StatusCode};
