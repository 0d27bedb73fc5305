//! Typed error definitions for plugfs.
//! Library operations report failures as data; these enums carry the offending
//! path together with the underlying OS error.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a file copy stopped. The source/destination split mirrors where the
/// failure happened, so callers can decide whether to retry or pick another target.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("cannot open source '{}': {source}", .path.display())]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("cannot open destination '{}': {source}", .path.display())]
    OpenDestination { path: PathBuf, source: io::Error },

    #[error("read failed on '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("write failed on '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl CopyError {
    /// Path the failing operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            CopyError::OpenSource { path, .. }
            | CopyError::OpenDestination { path, .. }
            | CopyError::Read { path, .. }
            | CopyError::Write { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            CopyError::OpenSource { source, .. }
            | CopyError::OpenDestination { source, .. }
            | CopyError::Read { source, .. }
            | CopyError::Write { source, .. } => source,
        }
    }

    /// Platform error number, when the OS supplied one.
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }
}

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum PlugfsError {
    #[error("no free path next to '{0}' (all numbered suffixes taken)")]
    NoFreePath(String),

    #[error("no copy of '{}' in '{}' matches its size and age", .original.display(), .copy_dir.display())]
    NoLatestCopy { original: PathBuf, copy_dir: PathBuf },

    #[error("invalid config '{}': {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl PlugfsError {
    /// Stable process exit code for this failure kind.
    pub fn code(&self) -> i32 {
        match self {
            PlugfsError::NoFreePath(_) => 3,
            PlugfsError::NoLatestCopy { .. } => 4,
            PlugfsError::ConfigParse { .. } => 5,
            PlugfsError::Copy(_) => 6,
        }
    }
}
