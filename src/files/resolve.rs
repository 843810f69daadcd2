use std::path::{Component, Path, PathBuf};

/// Drop everything from the first `?` onward so a query string is never
/// mistaken for part of a filename.
pub fn strip_query(raw: &str) -> &str {
    raw.split('?').next().unwrap_or(raw)
}

/// Map a request path onto a candidate file under `root`.
///
/// Returns `None` for paths that could escape the serving root: any `..`,
/// absolute, or drive-prefix component after the leading slashes are trimmed.
/// The result is not checked for existence.
pub fn resolve_under(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = strip_query(request_path).trim_start_matches('/');
    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Resolve and keep only paths that name an existing regular file
/// (symlinks are followed).
pub async fn find_file(root: &Path, request_path: &str) -> Option<PathBuf> {
    let candidate = resolve_under(root, request_path)?;
    match tokio::fs::metadata(&candidate).await {
        Ok(meta) if meta.is_file() => Some(candidate),
        _ => None,
    }
}
