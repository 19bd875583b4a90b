//! HTTP response construction and serialization.

use chrono::Utc;

/// Status codes this server produces, with their standard reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    InternalServerError = 500,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A fully materialized HTTP response.
///
/// The body is complete before any bytes are written, so `Content-Length`
/// is always exact. Headers are emitted in insertion order; setting a
/// header that already exists (case-insensitively) replaces its value in
/// place.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    headers: Vec<(String, String)>,
    /// The response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response carrying the standard informational headers
    /// (`Date` and `Server`).
    pub fn new(status: StatusCode, server_name: &str) -> Self {
        let mut response = Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        };
        response.set_header("Date", http_date_now());
        response.set_header("Server", server_name);
        response
    }

    /// Build an error response with a generated HTML body naming the status
    /// code, reason phrase, and a human-readable message.
    pub fn error(status: StatusCode, message: &str, server_name: &str) -> Self {
        let html = error_page(status, message, server_name);
        Self::new(status, server_name)
            .with_content_type("text/html; charset=utf-8")
            .with_body_string(html)
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    /// Set the content type.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Set the response body, along with `Content-Length` and
    /// `Connection: close`.
    pub fn with_body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        let content_length = self.body.len().to_string();
        self.with_header("Content-Length", content_length)
            .with_header("Connection", "close")
    }

    /// Set the response body from a string.
    pub fn with_body_string(self, body: impl Into<String>) -> Self {
        self.with_body_bytes(body.into().into_bytes())
    }

    /// Get a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn set_header(&mut self, name: &str, value: impl Into<String>) {
        if let Some(existing) = self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            existing.1 = value.into();
        } else {
            self.headers.push((name.to_string(), value.into()));
        }
    }

    /// Serialize the status line, headers, blank line, and body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.body.len() + 256);

        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status as u16,
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Empty line separates headers from the body
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&self.body);

        bytes
    }
}

/// Current time formatted for the `Date` header (RFC 1123).
fn http_date_now() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn error_page(status: StatusCode, message: &str, server_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Error {code} - {text}</title>
    <style>
        body {{ font-family: sans-serif; margin: 40px; color: #333; }}
        .code {{ font-size: 72px; font-weight: bold; color: #d32f2f; margin: 0; }}
    </style>
</head>
<body>
    <p class="code">{code}</p>
    <h1>{text}</h1>
    <p>{message}</p>
    <hr>
    <p><small>{server_name}</small></p>
</body>
</html>"#,
        code = status as u16,
        text = status.reason_phrase(),
    )
}
