//! Sequential accept loop with graceful shutdown.

use log::{debug, error, info};
use tokio::net::TcpListener;
use tokio::signal;

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::RequestHandler;

/// A static file server that handles connections one at a time.
///
/// Each accepted connection is handled to completion before the next accept,
/// and closed after exactly one response. The handler touches no shared
/// mutable state, so callers that want parallelism can instead spawn one
/// [`RequestHandler::handle_connection`] call per connection without further
/// synchronization.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    handler: RequestHandler,
}

impl HttpServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let handler = RequestHandler::new(&config);
        Self { config, handler }
    }

    /// Bind the configured address and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!(
            "Serving {} on http://{}",
            self.config.content_root.display(),
            self.config.addr
        );

        loop {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down");
                    break;
                }

                accepted = listener.accept() => {
                    match accepted {
                        Ok((mut socket, addr)) => {
                            debug!("Accepted connection from {addr}");
                            if let Err(err) = self.handler.handle_connection(&mut socket).await {
                                error!("Error handling connection from {addr}: {err}");
                            }
                            debug!("Connection from {addr} closed");
                            // The socket drops here, closing the connection
                        }
                        Err(err) => {
                            error!("Error accepting connection: {err}");
                            // Back off briefly so a persistent accept failure
                            // cannot spin the loop
                            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
