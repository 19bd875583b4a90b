//! Content-type inference from file extensions.

use std::path::Path;

/// Fallback type for missing or unrecognized extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Map a file's extension to its MIME type.
///
/// Lookup is case-insensitive and never fails; anything without a
/// recognized extension is served as `application/octet-stream`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use microserve_rs::server::mime;
///
/// assert_eq!(mime::lookup(Path::new("index.html")), "text/html");
/// assert_eq!(mime::lookup(Path::new("data.bin")), "application/octet-stream");
/// ```
pub fn lookup(path: &Path) -> &'static str {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    match extension.to_ascii_lowercase().as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "xml" => "application/xml",

        // JavaScript / JSON
        "js" => "application/javascript",
        "json" => "application/json",

        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",

        // Default
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_table_round_trip() {
        let table = [
            ("html", "text/html"),
            ("htm", "text/html"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("txt", "text/plain"),
            ("xml", "application/xml"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("png", "image/png"),
            ("gif", "image/gif"),
            ("ico", "image/x-icon"),
            ("svg", "image/svg+xml"),
            ("webp", "image/webp"),
            ("pdf", "application/pdf"),
            ("zip", "application/zip"),
        ];

        for (extension, expected) in table {
            let path = format!("file.{extension}");
            assert_eq!(lookup(Path::new(&path)), expected, "extension {extension}");
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(lookup(Path::new("INDEX.HTML")), "text/html");
        assert_eq!(lookup(Path::new("photo.JPeG")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(lookup(Path::new("archive.xyz")), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_missing_extension_falls_back() {
        assert_eq!(lookup(Path::new("Makefile")), DEFAULT_CONTENT_TYPE);
        assert_eq!(lookup(Path::new("trailing.")), DEFAULT_CONTENT_TYPE);
    }
}
