//! Path resolution against the live filesystem: existence, real paths and links.

use std::fs;
use std::path::{Path, PathBuf};
use std::io;
use tracing::warn;

use super::helpers::describe_io_error;
use crate::platform;

/// True if something (file, directory or symlink, dangling or not) is at `path`.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Canonical form of `path` with links and `.`/`..` resolved.
/// Returns `path` unchanged when it cannot be resolved (e.g. it does not exist).
pub fn real_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Create `link` pointing at `target`.
///
/// Identical paths are a successful no-op. On Windows a hard link is made when
/// symbolic links are not permitted.
pub fn symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> io::Result<()> {
    let (target, link) = (target.as_ref(), link.as_ref());
    if target.as_os_str() == link.as_os_str() {
        return Ok(());
    }
    platform::symlink(target, link).inspect_err(|e| {
        warn!(
            target = %target.display(),
            error = %describe_io_error("link", link, e),
            "failed to create link"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn real_path_of_missing_is_verbatim() {
        assert_eq!(real_path("/no/such/place"), PathBuf::from("/no/such/place"));
    }

    #[test]
    fn real_path_removes_dot_segments() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let messy = sub.join("..").join("sub");
        assert_eq!(real_path(&messy), real_path(&sub));
    }

    #[test]
    fn symlink_to_self_is_noop() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("same");
        symlink(&p, &p).unwrap();
        assert!(!path_exists(&p));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_link_still_exists() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        symlink(dir.path().join("gone"), &link).unwrap();
        assert!(path_exists(&link));
        assert!(!link.exists());
    }
}
