//! `cp` - copy a file, or a directory tree with `-r`.

use std::fs;
use std::io;
use tracing::info;

use super::Context;
use crate::error::ShellError;
use crate::fsops::{self, canon_or_self};

pub fn run(
    ctx: &mut Context<'_>,
    source: &str,
    destination: &str,
    recursive: bool,
) -> Result<(), ShellError> {
    let src = ctx.resolve("cp", source)?;
    let dst = ctx.resolve("cp", destination)?;
    let failed = |error: io::Error| ShellError::CpFailed {
        source_arg: source.to_string(),
        dest_arg: destination.to_string(),
        error,
    };

    let meta = match fs::metadata(&src) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ShellError::CpNotFound(source.to_string()));
        }
        Err(e) => return Err(failed(e)),
    };

    if meta.is_dir() {
        if !recursive {
            return Err(ShellError::CpOmitDirectory(source.to_string()));
        }
        if fs::symlink_metadata(&dst).is_ok() {
            return Err(ShellError::CpDestinationExists(source.to_string()));
        }
        if fsops::canon_entry(&dst).starts_with(canon_or_self(&src)) {
            return Err(ShellError::CpIntoItself {
                source_arg: source.to_string(),
                dest_arg: destination.to_string(),
            });
        }

        fsops::copy_tree(&src, &dst).map_err(failed)?;
        ctx.println(&format!(
            "Copied directory '{}' to '{}'",
            source, destination
        ))?;
        info!(from = %src.display(), to = %dst.display(), "Complete cp -r");
        return Ok(());
    }

    // Copying into an existing directory keeps the file name.
    let target = match (dst.is_dir(), src.file_name()) {
        (true, Some(name)) => dst.join(name),
        _ => dst,
    };
    if canon_or_self(&src) == canon_or_self(&target) {
        return Err(ShellError::CpSameFile {
            source_arg: source.to_string(),
            dest_arg: destination.to_string(),
        });
    }

    fsops::copy_file(&src, &target).map_err(failed)?;
    ctx.println(&format!("Copied '{}' to '{}'", source, destination))?;
    info!(from = %src.display(), to = %target.display(), "Complete cp");
    Ok(())
}
