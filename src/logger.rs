//! Diagnostic log: one `[YYYY-MM-DD HH:MM:SS] message` line per event,
//! appended to the configured log file.

use anyhow::{Context, Result, anyhow};
use std::fmt;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::LOG_FILTER_ENV;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timestamp in square brackets.
struct BracketedLocalTime;

impl FormatTime for BracketedLocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Install the global subscriber writing to `log_file`.
///
/// Fails, rather than panicking, when the file cannot be opened for append.
pub fn init(log_file: &Path) -> Result<()> {
    let appender = file_appender(log_file)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(subscriber(appender, filter))
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

/// Append-only writer on `log_file`; the file is created if missing.
fn file_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let file_name = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid log file path: {}", log_file.display()))?;
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))
}

fn subscriber(appender: RollingFileAppender, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_timer(BracketedLocalTime)
        .with_ansi(false)
        .with_level(false)
        .with_target(false)
        .finish()
}
