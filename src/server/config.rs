//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Static file server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The directory all servable files are resolved under.
    pub content_root: PathBuf,
    /// The file substituted when a request targets a directory.
    pub default_document: String,
    /// The value sent in the `Server` response header.
    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8081".parse().unwrap(),
            content_root: PathBuf::from("webroot"),
            default_document: "index.html".to_string(),
            server_name: concat!("microserve-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
