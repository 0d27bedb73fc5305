//! Advisory file locks.
//!
//! A lock belongs to an open file handle and only binds other lock-aware
//! processes. Guards release the lock when dropped, so every exit path
//! (including `?` early returns) unlocks. Closing the handle releases it too.
//!
//! On targets without advisory locking the calls succeed without excluding
//! anyone; check `LOCKING_SUPPORTED` if exclusion actually matters.

use std::fs::{File, OpenOptions};
use std::io;
use std::mem;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, trace};

use crate::platform;

pub use crate::platform::LOCKING_SUPPORTED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// One holder; excludes shared and exclusive holders.
    Exclusive,
    /// Many readers; excludes exclusive holders.
    Shared,
}

/// RAII guard for a lock on a borrowed handle.
#[derive(Debug)]
pub struct FileLock<'a> {
    file: &'a File,
    mode: LockMode,
}

impl FileLock<'_> {
    pub fn mode(&self) -> LockMode {
        self.mode
    }

    /// Unlock now and report the result instead of ignoring it in `Drop`.
    pub fn release(self) -> io::Result<()> {
        let res = platform::unlock_file(self.file);
        mem::forget(self);
        res
    }
}

impl Drop for FileLock<'_> {
    fn drop(&mut self) {
        if let Err(e) = platform::unlock_file(self.file) {
            debug!(error = %e, "unlock on drop failed");
        }
    }
}

/// Block until `file` is locked in `mode`.
pub fn lock(file: &File, mode: LockMode) -> io::Result<FileLock<'_>> {
    let start = Instant::now();
    platform::lock_file(file, mode)?;
    trace!(?mode, waited_ms = start.elapsed().as_millis() as u64, "lock acquired");
    Ok(FileLock { file, mode })
}

/// Non-blocking variant of `lock`. `Ok(None)` if another holder has it.
pub fn try_lock(file: &File, mode: LockMode) -> io::Result<Option<FileLock<'_>>> {
    if platform::try_lock_file(file, mode)? {
        trace!(?mode, "try-lock success");
        Ok(Some(FileLock { file, mode }))
    } else {
        trace!(?mode, "try-lock would block");
        Ok(None)
    }
}

/// Release whatever lock `file` holds. Unlocking an unlocked handle is not an error.
pub fn unlock(file: &File) -> io::Result<()> {
    platform::unlock_file(file)
}

/// A file opened and locked by path; the lock lives as long as this value.
#[derive(Debug)]
pub struct LockedFile {
    file: File,
    path: PathBuf,
    mode: LockMode,
}

impl LockedFile {
    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for LockedFile {
    fn drop(&mut self) {
        if let Err(e) = platform::unlock_file(&self.file) {
            debug!(path = %self.path.display(), error = %e, "unlock on drop failed");
        }
    }
}

/// Open `path` and lock it.
///
/// Shared locks open read-only and need the file to exist. Exclusive locks open
/// for writing, creating the file if needed but never truncating it.
pub fn open_locked(path: impl AsRef<Path>, mode: LockMode) -> io::Result<LockedFile> {
    let path = path.as_ref();
    let file = match mode {
        LockMode::Shared => File::open(path)?,
        LockMode::Exclusive => OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?,
    };
    let start = Instant::now();
    platform::lock_file(&file, mode)?;
    trace!(path = %path.display(), ?mode, waited_ms = start.elapsed().as_millis() as u64, "file lock acquired");
    Ok(LockedFile {
        file,
        path: path.to_path_buf(),
        mode,
    })
}
