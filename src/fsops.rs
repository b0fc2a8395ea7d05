//! Filesystem primitives behind `cp`, `mv` and `rm`.

use filetime::FileTime;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize a path, falling back to the original if canonicalization fails.
pub fn canon_or_self(p: &Path) -> PathBuf {
    p.canonicalize().unwrap_or_else(|_| p.to_path_buf())
}

/// Canonicalize the deepest existing ancestor of `p` and re-attach the
/// components below it, so paths that do not exist yet still compare
/// against their real location.
pub fn canon_prefix(p: &Path) -> PathBuf {
    let mut missing = Vec::new();
    let mut head = p;
    loop {
        if let Ok(canon) = head.canonicalize() {
            return missing.iter().rev().fold(canon, |acc, name| acc.join(name));
        }
        match (head.parent(), head.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                head = parent;
            }
            _ => return p.to_path_buf(),
        }
    }
}

/// Canonicalize everything but the final component, so a symlink is
/// identified by where it lives rather than where it points.
pub fn canon_entry(p: &Path) -> PathBuf {
    match (p.parent(), p.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            canon_prefix(parent).join(name)
        }
        _ => canon_or_self(p),
    }
}

/// Copy one file, keeping permission bits and access/modification times.
/// An existing destination file is overwritten.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;
    preserve_times(&fs::metadata(src)?, dst)
}

/// Recursively copy a directory tree into `dst`, which must not exist yet.
///
/// Symlinks are recreated rather than followed. Directory permissions are
/// applied after the contents are in place so read-only trees copy cleanly.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            copy_symlink(&from, &to)?;
        } else if file_type.is_dir() {
            copy_tree(&from, &to)?;
        } else {
            copy_file(&from, &to)?;
        }
    }

    fs::set_permissions(dst, meta.permissions())?;
    preserve_times(&meta, dst)
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    if from.is_dir() {
        copy_tree(from, to)
    } else {
        copy_file(from, to)
    }
}

fn preserve_times(meta: &Metadata, dst: &Path) -> io::Result<()> {
    let atime = FileTime::from_last_access_time(meta);
    let mtime = FileTime::from_last_modification_time(meta);
    filetime::set_file_times(dst, atime, mtime)
}

/// Rename `src` to `dst`, falling back to copy-then-delete when the two live
/// on different filesystems.
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            let meta = fs::symlink_metadata(src)?;
            if meta.file_type().is_symlink() {
                copy_symlink(src, dst)?;
                fs::remove_file(src)
            } else if meta.is_dir() {
                copy_tree(src, dst)?;
                fs::remove_dir_all(src)
            } else {
                copy_file(src, dst)?;
                fs::remove_file(src)
            }
        }
        other => other,
    }
}

/// Count files and directories below `dir`, recursively. Symlinked
/// directories count as one entry and are not descended into.
pub fn count_entries(dir: &Path) -> io::Result<u64> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        count += 1;
        if entry.file_type()?.is_dir() {
            count += count_entries(&entry.path())?;
        }
    }
    Ok(count)
}
