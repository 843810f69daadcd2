pub mod files;
pub mod route;
pub mod state;
pub mod sync;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::http::route::{ADMIN_START_PATH, ADMIN_STOP_PATH, SYNC_STATUS_PATH};
use crate::http::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Sync state: polled by viewers, mutated by the operator
        .route(SYNC_STATUS_PATH, get(sync::sync_status))
        // axum answers HEAD with the GET handler unless HEAD has its own
        .route(ADMIN_START_PATH, get(sync::admin_start).head(files::dispatch))
        .route(ADMIN_STOP_PATH, get(sync::admin_stop).head(files::dispatch))
        .route("/", get(sync::redirect_root))
        // Prefix-matched status paths and static passthrough
        .fallback(files::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
