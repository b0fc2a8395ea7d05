//! Where the state and log files live.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const DEFAULT_STATE_FILE: &str = "shell_state.txt";
pub const DEFAULT_LOG_FILE: &str = "shell.log";

/// Environment variable holding the log filter (`info`, `debug`, ...).
pub const LOG_FILTER_ENV: &str = "MINISH_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_file: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    /// Build the configuration from parsed flags.
    ///
    /// Relative paths are anchored on the directory the process was
    /// invoked from, so later verbs agree on the files no matter what the
    /// simulated directory is.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let invocation_dir =
            std::env::current_dir().context("Could not determine invocation directory")?;
        Ok(Self::anchored(&invocation_dir, &cli.state_file, &cli.log_file))
    }

    fn anchored(base: &Path, state_file: &Path, log_file: &Path) -> Self {
        Self {
            state_file: base.join(state_file),
            log_file: base.join(log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_land_in_invocation_dir() {
        let config = Config::anchored(
            Path::new("/work"),
            Path::new(DEFAULT_STATE_FILE),
            Path::new(DEFAULT_LOG_FILE),
        );
        assert_eq!(config.state_file, PathBuf::from("/work/shell_state.txt"));
        assert_eq!(config.log_file, PathBuf::from("/work/shell.log"));
    }

    #[test]
    fn absolute_overrides_are_kept() {
        let config = Config::anchored(
            Path::new("/work"),
            Path::new("/var/lib/minish/state"),
            Path::new("logs/minish.log"),
        );
        assert_eq!(config.state_file, PathBuf::from("/var/lib/minish/state"));
        assert_eq!(config.log_file, PathBuf::from("/work/logs/minish.log"));
    }

    #[test]
    fn from_cli_reads_flags() {
        let cli = Cli::try_parse_from([
            "minish",
            "--state-file",
            "/tmp/state.txt",
            "--log-file",
            "/tmp/shell.log",
            "pwd",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.state_file, PathBuf::from("/tmp/state.txt"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/shell.log"));
    }
}
