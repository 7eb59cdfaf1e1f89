//! Image content types keyed by file extension.

/// Fallback for unrecognised extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Guess a Content-Type from a key or path's extension.
pub fn content_type_for_extension(path: &str) -> &'static str {
    let ext = match path.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return OCTET_STREAM,
    };
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => OCTET_STREAM,
    }
}

/// File extension used when storing an upload of the given MIME type.
///
/// Returns `None` for anything that is not an accepted image type.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/svg+xml" => Some("svg"),
        "image/avif" => Some("avif"),
        _ => None,
    }
}
