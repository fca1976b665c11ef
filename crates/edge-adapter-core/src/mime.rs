//! MIME type lookup for static assets.
//!
//! Returns the Content-Type for a request path based on its file extension.
//! Used to overwrite whatever the asset facility guessed, since the
//! platform's default inference can be wrong or absent.

use std::path::Path;

/// Look up the Content-Type for a request path.
///
/// Returns `None` when the extension is unrecognized or absent; the caller
/// applies its configured fallback (`text/plain` by default).
pub fn from_path(path: &str) -> Option<&'static str> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)?;

    let content_type = match extension.as_str() {
        // Text
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "xml" => "application/xml",

        // JavaScript/WASM
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",
        "map" => "application/json",
        "wasm" => "application/wasm",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "avif" => "image/avif",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" | "ogv" => "video/ogg",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "eot" => "application/vnd.ms-fontobject",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",

        _ => return None,
    };

    Some(content_type)
}
