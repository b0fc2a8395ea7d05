//! Persistence of the simulated current directory.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Manages the single-line state file holding the simulated current directory.
///
/// File layout:
/// ```text
/// <invocation dir>/shell_state.txt    # one absolute path, no trailing newline
/// ```
///
/// There is no locking. Two invocations racing on the same file are
/// last-writer-wins; callers are expected to run verbs one at a time.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the simulated current directory.
    ///
    /// Falls back to the real process working directory when nothing has been
    /// stored yet. Never fails: a missing, empty or unreadable state file all
    /// mean "no session yet".
    pub fn load(&self) -> PathBuf {
        match fs::read(&self.path) {
            Ok(content) => {
                let stored = content.trim_ascii_end();
                if !stored.is_empty() {
                    return path_from_bytes(stored);
                }
                debug!(path = ?self.path, "empty state file, using process directory");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = ?self.path, error = %e, "unreadable state file, using process directory");
            }
        }
        process_dir()
    }

    /// Overwrite the stored path.
    ///
    /// The value is written as given, byte for byte; callers validate it first.
    pub fn save(&self, current: &Path) -> Result<()> {
        write_atomic(&self.path, current.as_os_str().as_encoded_bytes())
            .with_context(|| format!("Failed to save state to {}", self.path.display()))
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Real working directory of this process, or the filesystem root if even
/// that cannot be determined.
fn process_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|e| {
        warn!(error = %e, "cannot determine process directory, using root");
        PathBuf::from("/")
    })
}

/// Write content atomically using temp file + rename.
///
/// This ensures the target file is never partially written.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).context("Failed to write temp file")?;
    fs::rename(&tmp, path).context("Failed to rename temp file")?;
    Ok(())
}
