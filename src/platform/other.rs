//! Fallbacks for targets without advisory locking or links.
//! Locks succeed without excluding anyone; callers must not rely on exclusion here.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::fs_ops::LockMode;

pub const LOCKING_SUPPORTED: bool = false;

pub fn lock_file(_file: &File, _mode: LockMode) -> io::Result<()> {
    Ok(())
}

pub fn try_lock_file(_file: &File, _mode: LockMode) -> io::Result<bool> {
    Ok(true)
}

pub fn unlock_file(_file: &File) -> io::Result<()> {
    Ok(())
}

pub fn symlink(_target: &Path, _link: &Path) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "links are not supported on this platform"))
}

pub fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}
