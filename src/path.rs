//! Resolution of user arguments against the simulated current directory.

use std::path::{Component, Path, PathBuf};

/// Resolve a raw argument against `current`.
///
/// Special tokens are checked before anything else, so entries literally
/// named `~` or `..` cannot be addressed through this function:
///
/// - `~`  -> the invoking user's home directory
/// - `/`  -> the filesystem root
/// - `..` -> parent of `current` (root stays root)
/// - absolute paths are returned verbatim
/// - anything else is joined onto `current` and normalized
///
/// Returns `None` only when `~` is requested and `home` cannot supply a
/// directory. Empty arguments are the caller's business: each verb has its
/// own default.
pub fn resolve<F>(raw: &str, current: &Path, home: F) -> Option<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    match raw {
        "~" => home(),
        "/" => Some(PathBuf::from("/")),
        ".." => Some(parent_of(current)),
        _ if Path::new(raw).is_absolute() => Some(PathBuf::from(raw)),
        _ => Some(normalize(&current.join(raw))),
    }
}

/// String-level parent, not symlink aware.
pub fn parent_of(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| path.to_path_buf())
}

/// Lexically remove `.` and `..` segments. `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
