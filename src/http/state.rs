use std::path::PathBuf;
use crate::sync::SyncStore;

/// Shared application state injected into all route handlers via axum::extract::State.
/// SyncStore is itself an Arc handle, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub sync: SyncStore,
    pub root: PathBuf,   // Serving root for static passthrough
}

impl AppState {
    pub fn new(sync: SyncStore, root: impl Into<PathBuf>) -> Self {
        Self { sync, root: root.into() }
    }
}
