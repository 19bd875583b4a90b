//! Per-connection request handling.

use std::io::ErrorKind;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::parser::{Error as ParserError, Method, parse_request_line};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::mime;
use crate::server::resolver::{PathKind, PathResolver};
use crate::server::response::{HttpResponse, StatusCode};

/// Handles one connection: reads the request line, discards the header
/// lines, resolves the target under the content root, and writes exactly
/// one response. The caller closes the connection afterwards.
///
/// A handler holds only read-only state, so a single instance can serve any
/// number of connections, sequentially or in parallel.
pub struct RequestHandler {
    resolver: PathResolver,
    server_name: String,
}

impl RequestHandler {
    /// Create a handler for the given configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            resolver: PathResolver::new(&config.content_root, &config.default_document),
            server_name: config.server_name.clone(),
        }
    }

    /// Handle a single connection.
    ///
    /// Produces exactly one HTTP response, except when no request line
    /// arrives at all, in which case the connection is closed silently (the
    /// protocol offers nothing to respond to). The returned error describes
    /// what went wrong for the caller's log; the matching response has
    /// already been written by the time it is returned.
    pub async fn handle_connection(
        &self,
        stream: &mut (impl AsyncRead + AsyncWrite + Unpin),
    ) -> Result<(), Error> {
        let mut stream = BufReader::new(stream);

        let mut request_line = String::new();
        match stream.read_line(&mut request_line).await {
            Ok(0) => {
                debug!("Connection closed before sending a request line");
                return Ok(());
            }
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                // Binary garbage where the request line should be
                let response = self.error_response(StatusCode::BadRequest, "Malformed HTTP request");
                send(&mut stream, &response).await;
                return Err(Error::IoError(err));
            }
            Err(err) => return Err(Error::IoError(err)),
        }

        if request_line.trim().is_empty() {
            debug!("Empty request line, closing without a response");
            return Ok(());
        }

        let request = match parse_request_line(&request_line) {
            Ok(request) => request,
            Err(ParserError::UnsupportedMethod(method)) => {
                let response = self.error_response(
                    StatusCode::MethodNotAllowed,
                    &format!("Method not supported: {method}"),
                );
                send(&mut stream, &response).await;
                return Err(Error::MethodNotAllowed(method));
            }
            Err(err) => {
                let response =
                    self.error_response(StatusCode::BadRequest, "Malformed HTTP request line");
                send(&mut stream, &response).await;
                return Err(Error::ParseError(err));
            }
        };

        info!("Request: {} {}", request.method, request.target);

        if request.method != Method::GET {
            let response = self.error_response(
                StatusCode::MethodNotAllowed,
                &format!("Method not supported: {}", request.method),
            );
            send(&mut stream, &response).await;
            return Err(Error::MethodNotAllowed(request.method.to_string()));
        }

        // Headers are not interpreted; consume them up to the blank line
        discard_headers(&mut stream).await?;

        self.serve(&mut stream, &request.target).await
    }

    /// Resolve the target and write the success or error response.
    async fn serve(
        &self,
        stream: &mut (impl AsyncWrite + Unpin),
        target: &str,
    ) -> Result<(), Error> {
        let resolved = self.resolver.resolve(target);
        debug!("Resolved {target} -> {}", resolved.absolute.display());

        match resolved.kind {
            PathKind::Missing => {
                let response = self.error_response(
                    StatusCode::NotFound,
                    &format!("The requested file was not found: /{}", resolved.relative),
                );
                send(stream, &response).await;
                Err(Error::NotFound(resolved.relative))
            }
            PathKind::Directory => {
                let response = self.error_response(
                    StatusCode::Forbidden,
                    &format!("Directory access is not allowed: /{}", resolved.relative),
                );
                send(stream, &response).await;
                Err(Error::Forbidden(resolved.relative))
            }
            PathKind::File => {
                let body = match tokio::fs::read(&resolved.absolute).await {
                    Ok(body) => body,
                    Err(err)
                        if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) =>
                    {
                        let response = self.error_response(
                            StatusCode::NotFound,
                            &format!("The requested file was not found: /{}", resolved.relative),
                        );
                        send(stream, &response).await;
                        return Err(Error::NotFound(resolved.relative));
                    }
                    Err(err) => {
                        // The file vanished or broke between classification and read
                        warn!("Failed to read {}: {err}", resolved.absolute.display());
                        let response = self.error_response(
                            StatusCode::InternalServerError,
                            "Error reading the requested file",
                        );
                        send(stream, &response).await;
                        return Err(Error::IoError(err));
                    }
                };

                let content_type = mime::lookup(&resolved.absolute);
                let response = HttpResponse::new(StatusCode::Ok, &self.server_name)
                    .with_content_type(content_type)
                    .with_body_bytes(body);

                info!(
                    "Serving /{} ({} bytes, {content_type})",
                    resolved.relative,
                    response.body.len()
                );
                send(stream, &response).await;
                Ok(())
            }
        }
    }

    fn error_response(&self, status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::error(status, message, &self.server_name)
    }
}

/// Read and discard header lines up to the first blank line.
async fn discard_headers(stream: &mut (impl AsyncBufRead + Unpin)) -> Result<(), Error> {
    let mut line = String::new();
    loop {
        line.clear();
        let n = stream.read_line(&mut line).await?;
        if n == 0 || line == "\r\n" || line == "\n" {
            return Ok(());
        }
    }
}

/// Write a fully materialized response to the peer.
///
/// A failed write means the peer went away mid-response, which is an
/// expected condition: it is logged and otherwise ignored.
async fn send(stream: &mut (impl AsyncWrite + Unpin), response: &HttpResponse) {
    if let Err(err) = stream.write_all(&response.to_bytes()).await {
        warn!("Failed to write response: {err}");
        return;
    }
    if let Err(err) = stream.flush().await {
        warn!("Failed to flush response: {err}");
    }
}
