//! I/O error description helpers.
//!
//! Library functions log failures with the offending path and a platform-aware
//! hint; the CLI converts the same text into `anyhow` errors.
//!
//! Usage:
//!   // logging inside the library
//!   warn!(error = %describe_io_error("create directory", dir, &e), "mkdir failed");
//!
//!   // in functions returning anyhow::Result<_>
//!   fs::metadata(p).map_err(io_error_with_help("stat", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format `op 'path': error` plus a short hint and the raw OS code when known.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => msg.push_str(" (permission denied; check ownership and modes)"),
                libc::ENOENT => msg.push_str(" (path not found)"),
                libc::EEXIST => msg.push_str(" (already exists)"),
                libc::ENOTDIR => msg.push_str(" (a path component is not a directory)"),
                libc::EISDIR => msg.push_str(" (is a directory)"),
                libc::ENOSPC => msg.push_str(" (no space left on device)"),
                libc::EROFS => msg.push_str(" (read-only filesystem)"),
                libc::ELOOP => msg.push_str(" (too many symbolic link levels)"),
                libc::ENAMETOOLONG => msg.push_str(" (name too long)"),
                libc::EMFILE | libc::ENFILE => msg.push_str(" (too many open files)"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied)"),
                2 | 3 => msg.push_str(" (path not found)"),
                32 | 33 => msg.push_str(" (file in use by another process)"),
                80 | 183 => msg.push_str(" (already exists)"),
                112 => msg.push_str(" (disk full)"),
                1314 => msg.push_str(" (privilege not held; cannot create symbolic link)"),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => msg.push_str(" (permission denied)"),
            io::ErrorKind::NotFound => msg.push_str(" (path not found)"),
            io::ErrorKind::AlreadyExists => msg.push_str(" (already exists)"),
            io::ErrorKind::Unsupported => msg.push_str(" (not supported on this platform)"),
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code: `.map_err(io_error_with_help("open", p))`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}
