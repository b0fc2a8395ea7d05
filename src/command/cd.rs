//! `cd` - the only verb that changes the simulated current directory.

use tracing::info;

use super::Context;
use crate::error::ShellError;

/// Move the session to `path` (home when omitted).
///
/// The state changes only if the candidate exists and is a directory. On
/// success the new location is printed.
pub fn run(ctx: &mut Context<'_>, path: Option<&str>) -> Result<(), ShellError> {
    let raw = path.filter(|p| !p.is_empty()).unwrap_or("~");
    let candidate = ctx.resolve("cd", raw)?;

    if !candidate.is_dir() {
        return Err(ShellError::CdIncorrectPath(candidate));
    }

    ctx.store().save(&candidate).map_err(ShellError::CdState)?;
    ctx.println(&candidate.display().to_string())?;

    info!(path = %candidate.display(), "Complete cd");
    Ok(())
}
