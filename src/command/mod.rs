//! The shell verbs and the dispatcher that routes their outcome to the
//! terminal or the log.

pub mod cat;
pub mod cd;
pub mod cp;
pub mod ls;
pub mod mv;
pub mod pwd;
pub mod rm;

use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::cli::Command;
use crate::error::ShellError;
use crate::path;
use crate::prompt::Confirm;
use crate::state::StateStore;

/// Everything a verb needs for one invocation.
pub struct Context<'a> {
    store: &'a StateStore,
    out: &'a mut dyn Write,
    confirm: &'a mut dyn Confirm,
}

impl<'a> Context<'a> {
    pub fn new(
        store: &'a StateStore,
        out: &'a mut dyn Write,
        confirm: &'a mut dyn Confirm,
    ) -> Self {
        Self {
            store,
            out,
            confirm,
        }
    }

    pub fn store(&self) -> &StateStore {
        self.store
    }

    /// The simulated current directory.
    pub fn current_dir(&self) -> PathBuf {
        self.store.load()
    }

    /// Resolve a user argument against the simulated current directory.
    pub fn resolve(&self, verb: &'static str, raw: &str) -> Result<PathBuf, ShellError> {
        path::resolve(raw, &self.current_dir(), home::home_dir)
            .ok_or(ShellError::NoHomeDir { verb })
    }

    /// Print one line.
    pub fn println(&mut self, line: &str) -> Result<(), ShellError> {
        writeln!(self.out, "{}", line).map_err(ShellError::Output)
    }

    /// Print text as-is, adding a newline only if it lacks one.
    pub fn print_text(&mut self, text: &str) -> Result<(), ShellError> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| {
                if text.ends_with('\n') {
                    Ok(())
                } else {
                    self.out.write_all(b"\n")
                }
            })
            .map_err(ShellError::Output)
    }

    pub fn confirm(&mut self, question: &str) -> bool {
        self.confirm.confirm(question)
    }
}

/// Run one verb and report its failure, if any.
///
/// Every failure is logged. Silent failures (`cd` to an unusable target,
/// anything going wrong in `ls`) stop there; the rest are also printed.
/// Only output errors escape as `Err`.
pub fn dispatch(command: Command, ctx: &mut Context<'_>) -> Result<()> {
    let result = match command {
        Command::Ls { path, long } => ls::run(ctx, path.as_deref(), long),
        Command::Cd { path } => cd::run(ctx, path.as_deref()),
        Command::Pwd => pwd::run(ctx),
        Command::Cat { file } => cat::run(ctx, file.as_deref()),
        Command::Cp {
            source,
            destination,
            recursive,
        } => cp::run(ctx, &source, &destination, recursive),
        Command::Mv {
            source,
            destination,
        } => mv::run(ctx, &source, &destination),
        Command::Rm {
            path,
            recursive,
            force,
        } => rm::run(ctx, &path, recursive, force),
    };

    match result {
        Ok(()) => Ok(()),
        Err(ShellError::Output(e)) => Err(e).context("Failed to write output"),
        Err(err) => {
            info!("{}", err);
            if !err.is_silent() {
                writeln!(ctx.out, "{}", err).context("Failed to write output")?;
            }
            Ok(())
        }
    }
}
