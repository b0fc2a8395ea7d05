//! `ls` - list the visible children of a directory.

use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fs::{self, FileType, Metadata};
use std::io;
use std::path::Path;
use tracing::info;

use super::Context;
use crate::error::ShellError;

const COLUMNS: usize = 3;
const COLUMN_WIDTH: usize = 20;

pub fn run(ctx: &mut Context<'_>, path: Option<&str>, long: bool) -> Result<(), ShellError> {
    let target = match path.filter(|p| !p.is_empty()) {
        Some(raw) => ctx.resolve("ls", raw)?,
        None => ctx.current_dir(),
    };
    let access = |source: io::Error| ShellError::LsAccess {
        path: target.clone(),
        source,
    };

    let names = visible_entries(&target).map_err(access)?;

    // Build everything first: a failure halfway must not leave partial output.
    let lines = if long {
        names
            .iter()
            .map(|name| long_line(&target.join(name), &name.to_string_lossy()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(access)?
    } else {
        grid(&names)
    };

    for line in &lines {
        ctx.println(line)?;
    }

    info!(path = %target.display(), "Complete ls{}", if long { " -l" } else { "" });
    Ok(())
}

/// Child names not starting with `.`, sorted.
fn visible_entries(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        if !name.to_string_lossy().starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Three names per row, each padded to a fixed column width. A final row
/// with fewer names is still printed.
fn grid(names: &[OsString]) -> Vec<String> {
    names
        .chunks(COLUMNS)
        .map(|row| {
            row.iter()
                .map(|name| format!("{:<width$}", name.to_string_lossy(), width = COLUMN_WIDTH))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Metadata shown by `ls -l` for a single entry.
struct EntryInfo {
    mode: String,
    links: u64,
    owner: String,
    group: String,
    size: u64,
    modified: String,
}

fn long_line(path: &Path, name: &str) -> io::Result<String> {
    let info = entry_info(path)?;
    Ok(format!(
        "{} {:>2} {:<8} {} {:>8} {} {}",
        info.mode, info.links, info.owner, info.group, info.size, info.modified, name
    ))
}

fn entry_info(path: &Path) -> io::Result<EntryInfo> {
    let link = fs::symlink_metadata(path)?;
    let kind = type_char(&link.file_type());
    // Columns describe the link target; a dangling link describes itself.
    let meta = fs::metadata(path).unwrap_or_else(|_| link.clone());

    let modified: DateTime<Local> = meta.modified()?.into();
    let (mode, links, owner, group) = ownership(&meta);

    Ok(EntryInfo {
        mode: format_mode(kind, mode),
        links,
        owner,
        group,
        size: meta.len(),
        modified: modified.format("%b %d %H:%M").to_string(),
    })
}

fn type_char(file_type: &FileType) -> char {
    if file_type.is_symlink() {
        'l'
    } else if file_type.is_dir() {
        'd'
    } else if file_type.is_file() {
        '-'
    } else {
        '?'
    }
}

fn format_mode(kind: char, mode: u32) -> String {
    let perms = [
        if mode & 0o400 != 0 { 'r' } else { '-' },
        if mode & 0o200 != 0 { 'w' } else { '-' },
        if mode & 0o100 != 0 { 'x' } else { '-' },
        if mode & 0o040 != 0 { 'r' } else { '-' },
        if mode & 0o020 != 0 { 'w' } else { '-' },
        if mode & 0o010 != 0 { 'x' } else { '-' },
        if mode & 0o004 != 0 { 'r' } else { '-' },
        if mode & 0o002 != 0 { 'w' } else { '-' },
        if mode & 0o001 != 0 { 'x' } else { '-' },
    ];

    format!("{}{}", kind, perms.iter().collect::<String>())
}

/// Permission bits, hard links, owner and group names.
#[cfg(unix)]
fn ownership(meta: &Metadata) -> (u32, u64, String, String) {
    use nix::unistd::{Gid, Group, Uid, User};
    use std::os::unix::fs::MetadataExt;

    let owner = match User::from_uid(Uid::from_raw(meta.uid())) {
        Ok(Some(user)) => user.name,
        _ => meta.uid().to_string(),
    };
    let group = match Group::from_gid(Gid::from_raw(meta.gid())) {
        Ok(Some(group)) => group.name,
        _ => meta.gid().to_string(),
    };

    (meta.mode(), meta.nlink(), owner, group)
}

/// No POSIX ownership here: derive the bits from the read-only flag and
/// stub the rest.
#[cfg(not(unix))]
fn ownership(meta: &Metadata) -> (u32, u64, String, String) {
    let mut mode = if meta.permissions().readonly() { 0o444 } else { 0o644 };
    if meta.is_dir() {
        mode |= 0o111;
    }
    (mode, 1, "-".to_string(), "-".to_string())
}
