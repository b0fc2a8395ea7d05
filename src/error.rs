//! Expected failures of the shell verbs.
//!
//! The `Display` text of each variant is exactly the message shown to the
//! user (or written to the log for silent failures).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to write output: {0}")]
    Output(io::Error),

    #[error("{verb}: cannot determine home directory")]
    NoHomeDir { verb: &'static str },

    // cd
    #[error("cd: Incorrect path {}", .0.display())]
    CdIncorrectPath(PathBuf),

    #[error("cd: {0:#}")]
    CdState(anyhow::Error),

    // ls
    #[error("ls: cannot access '{}': {source}", .path.display())]
    LsAccess { path: PathBuf, source: io::Error },

    // cat
    #[error("cat: missing file operand")]
    CatMissingOperand,

    #[error("cat: {0}: No such file or directory")]
    CatNotFound(String),

    #[error("cat: {0}: Is a directory")]
    CatIsDirectory(String),

    #[error("cat: {name}: {source}")]
    CatRead { name: String, source: io::Error },

    // cp
    #[error("cp: cannot stat '{0}': No such file or directory")]
    CpNotFound(String),

    #[error("cp: -r not specified; omitting directory '{0}'")]
    CpOmitDirectory(String),

    #[error("cp: cannot copy '{0}': Destination already exists")]
    CpDestinationExists(String),

    #[error("cp: '{source_arg}' and '{dest_arg}' are the same file")]
    CpSameFile {
        source_arg: String,
        dest_arg: String,
    },

    #[error("cp: cannot copy a directory, '{source_arg}', into itself, '{dest_arg}'")]
    CpIntoItself {
        source_arg: String,
        dest_arg: String,
    },

    #[error("cp: cannot copy '{source_arg}' to '{dest_arg}': {error}")]
    CpFailed {
        source_arg: String,
        dest_arg: String,
        error: io::Error,
    },

    // mv
    #[error("mv: cannot stat '{0}': No such file or directory")]
    MvNotFound(String),

    #[error("mv: cannot move '{0}' to a subdirectory of itself")]
    MvIntoItself(String),

    #[error("mv: '{source_arg}' and '{dest_arg}' are the same file")]
    MvSameFile {
        source_arg: String,
        dest_arg: String,
    },

    #[error("mv: cannot move '{0}': Permission denied")]
    MvPermissionDenied(String),

    #[error("mv: cannot move '{0}': Directory not empty")]
    MvDirectoryNotEmpty(String),

    #[error("mv: cannot move '{name}': {error}")]
    MvFailed { name: String, error: io::Error },

    // rm
    #[error("rm: cannot remove '{0}': Protected directory")]
    RmProtected(String),

    #[error("rm: cannot remove '{0}': No such file or directory")]
    RmNotFound(String),

    #[error("rm: cannot remove '{0}': Is a directory (use -r)")]
    RmIsDirectory(String),

    #[error("rm: cannot remove '{0}': Permission denied")]
    RmPermissionDenied(String),

    #[error("rm: cannot remove '{name}': {error}")]
    RmFailed { name: String, error: io::Error },
}

impl ShellError {
    /// Failures that only reach the log, never the terminal.
    ///
    /// `cd` to an unusable target and every `ls` failure behave this way.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            ShellError::CdIncorrectPath(_)
                | ShellError::LsAccess { .. }
                | ShellError::NoHomeDir { verb: "cd" | "ls" }
        )
    }
}
