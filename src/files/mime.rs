use std::path::Path;

/// Served when the extension is missing or not in the table below.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Content-Type for a served file, chosen by extension (case-insensitive).
///
/// Covers the page assets a viewer needs (HTML, scripts, styles, fonts) plus
/// the media it plays. Anything else is sent as opaque bytes.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return FALLBACK_MIME,
    };

    match ext.as_str() {
        // Page assets
        "html" | "htm" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "text/xml",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "wasm" => "application/wasm",

        // Video
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "ts" | "m2ts" => "video/MP2T",
        "mpg" | "mpeg" => "video/mpeg",

        // Audio
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "oga" | "opus" => "audio/ogg",

        // Image
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",

        // Captions
        "vtt" => "text/vtt",
        "srt" => "text/plain; charset=utf-8",

        _ => FALLBACK_MIME,
    }
}
