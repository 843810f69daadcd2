use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use crate::http::route::VIEWER_PATH;
use crate::http::state::AppState;

const STARTED_HTML: &str =
    "<h1>OK: Track Started.</h1><a href='/viewer-video.html'>Go to Viewer</a>";
const STOPPED_HTML: &str = "<h1>OK: Track Stopped.</h1>";

/// GET /api/sync-status.json — current snapshot for polling viewers.
/// Open to any origin so a viewer served elsewhere can still poll.
pub async fn sync_status(State(state): State<AppState>) -> Response {
    let snapshot = state.sync.read();
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(snapshot),
    )
        .into_response()
}

/// GET /admin/start
pub async fn admin_start(State(state): State<AppState>) -> Html<&'static str> {
    let started = state.sync.start();
    tracing::info!("COMMAND: Track STARTED at {}", started.track_start_time);
    Html(STARTED_HTML)
}

/// GET /admin/stop
pub async fn admin_stop(State(state): State<AppState>) -> Html<&'static str> {
    let stopped = state.sync.stop();
    tracing::info!(
        "COMMAND: Track STOPPED (started at {})",
        stopped.track_start_time
    );
    Html(STOPPED_HTML)
}

/// GET / — always 301 to the viewer page.
pub async fn redirect_root() -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, VIEWER_PATH)],
    )
        .into_response()
}
