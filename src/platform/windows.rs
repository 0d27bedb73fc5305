//! Windows implementations of link and directory primitives.
//!
//! Notes:
//! - Creating symbolic links needs a privilege (or developer mode) on Windows;
//!   when it is refused we fall back to a hard link, which needs neither.
//! - There are no POSIX modes; directories get the inherited ACL.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Create `link` pointing at `target`: a symbolic link when permitted, else a hard link.
pub fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    let res = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };
    res.or_else(|e| {
        debug!(link = %link.display(), error = %e, "symlink refused, trying hard link");
        fs::hard_link(target, link)
    })
}

/// Create a single directory.
pub fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}
