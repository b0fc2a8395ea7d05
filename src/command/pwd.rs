//! `pwd` - print the simulated current directory.

use tracing::info;

use super::Context;
use crate::error::ShellError;

/// Prints the stored path verbatim, without checking it still exists.
pub fn run(ctx: &mut Context<'_>) -> Result<(), ShellError> {
    let current = ctx.current_dir();
    ctx.println(&current.display().to_string())?;
    info!("Complete pwd");
    Ok(())
}
