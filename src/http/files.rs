use std::path::Path;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use http_range_header::parse_range_header;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;
use crate::files::{mime::mime_for, resolve::find_file};
use crate::http::route::Route;
use crate::http::state::AppState;
use crate::http::sync;

const NOT_FOUND_BODY: &str = "File Not Found";

/// Fallback for every path without a registered route.
///
/// Picks up the prefix-matched status route (e.g. `/api/sync-status.json.bak`)
/// and otherwise hands the path to static passthrough. Also serves HEAD on the
/// admin paths, which must never run the mutating handlers.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    req_headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    match Route::classify(uri.path()) {
        Route::SyncStatus => sync::sync_status(State(state)).await,
        // Exact admin and root paths only land here for HEAD
        _ => serve_file(&state, &method, &uri, &req_headers).await,
    }
}

async fn serve_file(state: &AppState, method: &Method, uri: &Uri, req_headers: &HeaderMap) -> Response {
    let path = match find_file(&state.root, uri.path()).await {
        Some(p) => p,
        None => {
            tracing::warn!("ERROR: 404 Not Found - {}", uri);
            return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
        }
    };

    let file = match tokio::fs::File::open(&path).await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("Failed to open file {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let file_size = match file.metadata().await {
        Ok(m) => m.len(),
        Err(e) => {
            tracing::error!("Failed to stat file {}: {}", path.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let headers = file_headers(&path, file_size);

    if method == Method::HEAD {
        return (StatusCode::OK, headers).into_response();
    }

    if let Some(range_val) = req_headers.get(header::RANGE) {
        return match range_val.to_str() {
            Ok(range_str) => range_response(file, &path, file_size, range_str, headers).await,
            Err(_) => not_satisfiable(file_size),
        };
    }

    // Streamed, so a slow client only ever holds its own file handle.
    let body = Body::from_stream(ReaderStream::new(file));
    (StatusCode::OK, headers, body).into_response()
}

fn file_headers(path: &Path, file_size: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime_for(path)));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(file_size));
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    headers
}

fn not_satisfiable(file_size: u64) -> Response {
    (
        StatusCode::RANGE_NOT_SATISFIABLE,
        [(header::CONTENT_RANGE, format!("bytes */{}", file_size))],
    )
        .into_response()
}

/// 206 for the first satisfiable range, 416 otherwise. Multi-range requests
/// are answered with their first range only.
async fn range_response(
    mut file: tokio::fs::File,
    path: &Path,
    file_size: u64,
    range_str: &str,
    mut headers: HeaderMap,
) -> Response {
    let ranges = match parse_range_header(range_str).and_then(|p| p.validate(file_size)) {
        Ok(r) => r,
        Err(_) => return not_satisfiable(file_size),
    };
    let first = match ranges.into_iter().next() {
        Some(r) => r,
        None => return not_satisfiable(file_size),
    };

    let start = *first.start();
    let end = *first.end(); // inclusive
    let length = end - start + 1;

    if let Err(e) = file.seek(std::io::SeekFrom::Start(start)).await {
        tracing::error!("Range response: failed to seek in file {}: {}", path.display(), e);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let content_range = format!("bytes {}-{}/{}", start, end, file_size);
    headers.insert(
        header::CONTENT_RANGE,
        HeaderValue::from_str(&content_range)
            .unwrap_or_else(|_| HeaderValue::from_static("bytes 0-0/0")),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));

    let body = Body::from_stream(ReaderStream::new(file.take(length)));
    (StatusCode::PARTIAL_CONTENT, headers, body).into_response()
}
