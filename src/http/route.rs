use crate::files::resolve::strip_query;

pub const SYNC_STATUS_PATH: &str = "/api/sync-status.json";
pub const ADMIN_START_PATH: &str = "/admin/start";
pub const ADMIN_STOP_PATH: &str = "/admin/stop";
pub const VIEWER_PATH: &str = "/viewer-video.html";

/// Where a request goes, decided from its path alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    SyncStatus,
    AdminStart,
    AdminStop,
    Root,
    File,
}

impl Route {
    /// The status route matches by prefix; the others need an exact path.
    /// A query string, if still attached, is ignored.
    pub fn classify(path: &str) -> Route {
        let path = strip_query(path);
        if path.starts_with(SYNC_STATUS_PATH) {
            return Route::SyncStatus;
        }
        match path {
            ADMIN_START_PATH => Route::AdminStart,
            ADMIN_STOP_PATH => Route::AdminStop,
            "/" => Route::Root,
            _ => Route::File,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_matches_by_prefix() {
        assert_eq!(Route::classify("/api/sync-status.json"), Route::SyncStatus);
        assert_eq!(Route::classify("/api/sync-status.json?foo=1"), Route::SyncStatus);
        assert_eq!(Route::classify("/api/sync-status.jsonp"), Route::SyncStatus);
    }

    #[test]
    fn admin_routes_are_exact() {
        assert_eq!(Route::classify("/admin/start"), Route::AdminStart);
        assert_eq!(Route::classify("/admin/stop?now"), Route::AdminStop);
        assert_eq!(Route::classify("/admin/start/"), Route::File);
        assert_eq!(Route::classify("/admin/stopped"), Route::File);
    }

    #[test]
    fn root_ignores_query() {
        assert_eq!(Route::classify("/"), Route::Root);
        assert_eq!(Route::classify("/?songId=15A01"), Route::Root);
    }

    #[test]
    fn everything_else_is_a_file() {
        assert_eq!(Route::classify("/viewer-video.html"), Route::File);
        assert_eq!(Route::classify("/api/other.json"), Route::File);
    }
}
