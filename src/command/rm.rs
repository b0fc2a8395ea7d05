//! `rm` - remove a file, or a directory tree with `-r`.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::Context;
use crate::error::ShellError;
use crate::fsops;
use crate::path::{normalize, parent_of};

/// Shown in the confirmation prompt when the tree cannot be walked.
const UNKNOWN_COUNT: i64 = -1;

pub fn run(
    ctx: &mut Context<'_>,
    path: &str,
    recursive: bool,
    force: bool,
) -> Result<(), ShellError> {
    let current = ctx.current_dir();
    let target = ctx.resolve("rm", path)?;

    if is_protected(&target, &current) {
        return Err(ShellError::RmProtected(path.to_string()));
    }

    let meta = match fs::symlink_metadata(&target) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ShellError::RmNotFound(path.to_string()));
        }
        Err(e) => return Err(remove_error(path, e)),
    };

    if meta.is_dir() {
        if !recursive {
            return Err(ShellError::RmIsDirectory(path.to_string()));
        }
        if !force {
            let count = match fsops::count_entries(&target) {
                Ok(n) => i64::try_from(n).unwrap_or(i64::MAX),
                Err(e) => {
                    warn!(path = %target.display(), error = %e, "cannot count entries");
                    UNKNOWN_COUNT
                }
            };
            let question = format!(
                "Recursively remove directory '{}' with {} items?",
                path, count
            );
            if !ctx.confirm(&question) {
                return cancelled(ctx);
            }
        }

        fs::remove_dir_all(&target).map_err(|e| remove_error(path, e))?;
        let message = format!("Removed directory '{}'", path);
        ctx.println(&message)?;
        info!("{}", message);
    } else {
        if !force && !ctx.confirm(&format!("Remove file '{}'?", path)) {
            return cancelled(ctx);
        }

        // Symlinks land here too and are unlinked, never followed.
        fs::remove_file(&target).map_err(|e| remove_error(path, e))?;
        let message = format!("Removed file '{}'", path);
        ctx.println(&message)?;
        info!("{}", message);
    }
    Ok(())
}

/// Root, anything normalizing to root, and the parent of the current
/// directory are never removed.
fn is_protected(target: &Path, current: &Path) -> bool {
    let target = normalize(target);
    target == Path::new("/") || target == parent_of(&normalize(current))
}

fn cancelled(ctx: &mut Context<'_>) -> Result<(), ShellError> {
    ctx.println("Operation cancelled")?;
    info!("rm: Operation cancelled");
    Ok(())
}

fn remove_error(path: &str, error: io::Error) -> ShellError {
    match error.kind() {
        io::ErrorKind::PermissionDenied => ShellError::RmPermissionDenied(path.to_string()),
        _ => ShellError::RmFailed {
            name: path.to_string(),
            error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;
    use crate::command::testing::TestShell;

    fn rm(shell: &mut TestShell, path: &str, recursive: bool, force: bool) -> String {
        shell.run(Command::Rm {
            path: path.into(),
            recursive,
            force,
        })
    }

    #[test]
    fn root_is_always_refused() {
        for (recursive, force) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut shell = TestShell::new().answering(&[true, true]);

            for raw in ["/", "/.", "/..", "/tmp/.."] {
                let printed = rm(&mut shell, raw, recursive, force);
                assert_eq!(
                    printed,
                    format!("rm: cannot remove '{}': Protected directory\n", raw)
                );
            }
            assert!(shell.confirm.asked.is_empty());
        }
    }

    #[test]
    fn relative_climb_to_root_is_refused() {
        let mut shell = TestShell::new();
        let depth = shell.work().components().count();
        let climb = vec![".."; depth + 2].join("/");

        let printed = rm(&mut shell, &climb, true, true);

        assert!(printed.ends_with("Protected directory\n"), "{printed}");
    }

    #[test]
    fn parent_of_current_is_refused() {
        let mut shell = TestShell::new();
        let sub = shell.mkdir("sub");
        shell.cd_to(&sub);

        let printed = rm(&mut shell, "..", true, true);

        assert_eq!(printed, "rm: cannot remove '..': Protected directory\n");
        assert!(shell.work().exists());
    }

    #[test]
    fn force_removes_file_without_prompt() {
        let mut shell = TestShell::new();
        shell.write("gone.txt", "x");

        let printed = rm(&mut shell, "gone.txt", false, true);

        assert_eq!(printed, "Removed file 'gone.txt'\n");
        assert!(!shell.exists("gone.txt"));
        assert!(shell.confirm.asked.is_empty());
    }

    #[test]
    fn confirmed_file_removal() {
        let mut shell = TestShell::new().answering(&[true]);
        shell.write("a.txt", "x");

        let printed = rm(&mut shell, "a.txt", false, false);

        assert_eq!(shell.confirm.asked, vec!["Remove file 'a.txt'?"]);
        assert_eq!(printed, "Removed file 'a.txt'\n");
        assert!(!shell.exists("a.txt"));
    }

    #[test]
    fn declined_file_removal_keeps_file() {
        let mut shell = TestShell::new().answering(&[false]);
        shell.write("a.txt", "x");

        let printed = rm(&mut shell, "a.txt", false, false);

        assert_eq!(printed, "Operation cancelled\n");
        assert!(shell.exists("a.txt"));
    }

    #[test]
    fn missing_target() {
        let mut shell = TestShell::new();

        assert_eq!(
            rm(&mut shell, "ghost", false, true),
            "rm: cannot remove 'ghost': No such file or directory\n"
        );
    }

    #[test]
    fn directory_needs_recursive_even_with_force() {
        let mut shell = TestShell::new();
        shell.mkdir("dir");

        let printed = rm(&mut shell, "dir", false, true);

        assert_eq!(printed, "rm: cannot remove 'dir': Is a directory (use -r)\n");
        assert!(shell.exists("dir"));
    }

    #[test]
    fn recursive_prompt_shows_item_count() {
        let mut shell = TestShell::new().answering(&[true]);
        shell.write("tree/a.txt", "");
        shell.write("tree/sub/b.txt", "");

        let printed = rm(&mut shell, "tree", true, false);

        assert_eq!(
            shell.confirm.asked,
            vec!["Recursively remove directory 'tree' with 3 items?"]
        );
        assert_eq!(printed, "Removed directory 'tree'\n");
        assert!(!shell.exists("tree"));
    }

    #[test]
    fn declined_recursive_removal_keeps_tree() {
        let mut shell = TestShell::new().answering(&[false]);
        shell.write("tree/a.txt", "");

        let printed = rm(&mut shell, "tree", true, false);

        assert_eq!(printed, "Operation cancelled\n");
        assert!(shell.exists("tree/a.txt"));
    }

    #[test]
    fn recursive_force_skips_prompt() {
        let mut shell = TestShell::new();
        shell.write("tree/deep/er/file.txt", "");

        let printed = rm(&mut shell, "tree", true, true);

        assert_eq!(printed, "Removed directory 'tree'\n");
        assert!(!shell.exists("tree"));
        assert!(shell.confirm.asked.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unwalkable_tree_prompts_with_unknown_count() {
        use std::os::unix::fs::PermissionsExt;

        let mut shell = TestShell::new().answering(&[false]);
        shell.write("tree/sealed/inner.txt", "");
        let sealed = shell.work().join("tree/sealed");
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores directory permissions.
        if fs::read_dir(&sealed).is_ok() {
            fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let printed = rm(&mut shell, "tree", true, false);
        fs::set_permissions(&sealed, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(
            shell.confirm.asked,
            vec!["Recursively remove directory 'tree' with -1 items?"]
        );
        assert_eq!(printed, "Operation cancelled\n");
        assert!(shell.exists("tree/sealed/inner.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_unlinked_not_followed() {
        let mut shell = TestShell::new();
        shell.write("real/keep.txt", "keep");
        std::os::unix::fs::symlink(shell.work().join("real"), shell.work().join("alias"))
            .unwrap();

        let printed = rm(&mut shell, "alias", false, true);

        assert_eq!(printed, "Removed file 'alias'\n");
        assert!(!shell.exists("alias"));
        assert_eq!(shell.read("real/keep.txt"), "keep");
    }

    #[test]
    fn protection_is_lexical() {
        assert!(is_protected(Path::new("/"), Path::new("/home/user")));
        assert!(is_protected(Path::new("/a/b/../.."), Path::new("/x/y")));
        assert!(is_protected(Path::new("/home"), Path::new("/home/user")));
        assert!(!is_protected(Path::new("/home/user/tmp"), Path::new("/home/user")));
        assert!(!is_protected(Path::new("/home/user"), Path::new("/home/user")));
    }
}
