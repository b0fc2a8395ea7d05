//! `mv` - move into a directory, or rename.

use std::fs;
use std::io;
use tracing::info;

use super::Context;
use crate::error::ShellError;
use crate::fsops::{self, canon_entry, canon_or_self};

pub fn run(ctx: &mut Context<'_>, source: &str, destination: &str) -> Result<(), ShellError> {
    let src = ctx.resolve("mv", source)?;
    let dst = ctx.resolve("mv", destination)?;

    if fs::symlink_metadata(&src).is_err() {
        return Err(ShellError::MvNotFound(source.to_string()));
    }

    if dst.is_dir() {
        let Some(name) = src.file_name() else {
            return Err(ShellError::MvIntoItself(source.to_string()));
        };
        let target = dst.join(name);
        if canon_or_self(&dst).join(name).starts_with(canon_entry(&src)) {
            return Err(ShellError::MvIntoItself(source.to_string()));
        }

        fsops::move_path(&src, &target).map_err(|e| move_error(source, e))?;
        info!("Moved '{}' to '{}'", source, target.display());
    } else {
        if canon_entry(&src) == canon_entry(&dst) {
            return Err(ShellError::MvSameFile {
                source_arg: source.to_string(),
                dest_arg: destination.to_string(),
            });
        }

        fsops::move_path(&src, &dst).map_err(|e| move_error(source, e))?;
        info!("Moved and renamed '{}' to '{}'", source, destination);
    }
    Ok(())
}

fn move_error(source: &str, error: io::Error) -> ShellError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => ShellError::MvPermissionDenied(source.to_string()),
        io::ErrorKind::DirectoryNotEmpty => ShellError::MvDirectoryNotEmpty(source.to_string()),
        _ => ShellError::MvFailed {
            name: source.to_string(),
            error,
        },
    }
}
