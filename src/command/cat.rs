//! `cat` - print a text file.

use std::fs;
use std::io;
use tracing::info;

use super::Context;
use crate::error::ShellError;

pub fn run(ctx: &mut Context<'_>, file: Option<&str>) -> Result<(), ShellError> {
    let Some(name) = file.filter(|f| !f.is_empty()) else {
        return Err(ShellError::CatMissingOperand);
    };
    let path = ctx.resolve("cat", name)?;

    let meta = fs::metadata(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ShellError::CatNotFound(name.to_string()),
        _ => ShellError::CatRead {
            name: name.to_string(),
            source: e,
        },
    })?;
    if meta.is_dir() {
        return Err(ShellError::CatIsDirectory(name.to_string()));
    }

    let bytes = fs::read(&path).map_err(|e| ShellError::CatRead {
        name: name.to_string(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => {
            ctx.print_text(&text)?;
            info!(file = name, "Complete cat");
        }
        Err(e) => {
            let size = e.as_bytes().len();
            ctx.println(&format!("cat: {}: Binary file ({} bytes)", name, size))?;
            info!(file = name, size, "cat: binary file");
        }
    }
    Ok(())
}
