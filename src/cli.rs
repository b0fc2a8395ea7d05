use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_LOG_FILE, DEFAULT_STATE_FILE};

#[derive(Debug, Parser)]
#[command(name = "minish")]
#[command(about = "File shell verbs with a working directory that survives between invocations")]
#[command(version)]
pub struct Cli {
    /// File holding the simulated current directory
    #[arg(long, global = true, env = "MINISH_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,

    /// Append-only diagnostic log
    #[arg(long, global = true, env = "MINISH_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List directory contents (hidden entries are skipped)
    Ls {
        /// Directory to list (defaults to the current directory)
        path: Option<String>,

        /// Long format
        #[arg(short = 'l')]
        long: bool,
    },
    /// Change the current directory
    Cd {
        /// Target directory (defaults to ~)
        path: Option<String>,
    },
    /// Print the current directory
    Pwd,
    /// Print the contents of a file
    Cat {
        /// File to print
        file: Option<String>,
    },
    /// Copy a file or directory
    Cp {
        /// Source file/directory
        source: String,

        /// Destination path
        destination: String,

        /// Copy directories recursively
        #[arg(short, long)]
        recursive: bool,
    },
    /// Move or rename a file or directory
    Mv {
        /// Source file/directory
        source: String,

        /// Destination path
        destination: String,
    },
    /// Remove a file or directory
    Rm {
        /// File or directory to remove
        path: String,

        /// Remove directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Remove without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ls { .. } => "ls",
            Command::Cd { .. } => "cd",
            Command::Pwd => "pwd",
            Command::Cat { .. } => "cat",
            Command::Cp { .. } => "cp",
            Command::Mv { .. } => "mv",
            Command::Rm { .. } => "rm",
        }
    }
}
