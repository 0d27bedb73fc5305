//! Advisory locking through `fs2`, shared by Unix (flock) and Windows (LockFileEx).
//!
//! Calls go through `FileExt::` explicitly: newer toolchains give `File`
//! inherent lock methods with the same names but different signatures.

use fs2::FileExt;
use std::fs::File;
use std::io;

use crate::fs_ops::LockMode;

/// Advisory locks are enforced between lock-aware processes on this target.
pub const LOCKING_SUPPORTED: bool = true;

/// Block until `file` is locked in `mode`.
pub fn lock_file(file: &File, mode: LockMode) -> io::Result<()> {
    match mode {
        LockMode::Exclusive => FileExt::lock_exclusive(file),
        LockMode::Shared => FileExt::lock_shared(file),
    }
}

/// Non-blocking lock attempt. `Ok(false)` means another holder has it.
pub fn try_lock_file(file: &File, mode: LockMode) -> io::Result<bool> {
    let res = match mode {
        LockMode::Exclusive => FileExt::try_lock_exclusive(file),
        LockMode::Shared => FileExt::try_lock_shared(file),
    };
    match res {
        Ok(()) => Ok(true),
        Err(e) if is_contended(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Release any lock this handle holds.
pub fn unlock_file(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

fn is_contended(e: &io::Error) -> bool {
    let contended = fs2::lock_contended_error();
    (e.raw_os_error().is_some() && e.raw_os_error() == contended.raw_os_error())
        || e.kind() == io::ErrorKind::WouldBlock
}
