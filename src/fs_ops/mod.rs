//! Filesystem operations used by plugin discovery: enumeration, numbered
//! copies, comparison, copying, directory creation and advisory locks.

mod compare;
mod free_path;
mod helpers;
mod io_copy;
mod latest;
mod lock;
mod mkdir;
mod resolve;
mod walk;

pub use compare::files_equal;
pub use free_path::{MAX_COPY_SUFFIX, find_free_path, find_free_path_on_disk, numbered};
pub use helpers::{describe_io_error, io_error_with_help};
pub use io_copy::{COPY_BLOCK_SIZE, CopyOutcome, copy_file};
pub use latest::{NumberedPattern, latest_copy};
pub use lock::{FileLock, LOCKING_SUPPORTED, LockMode, LockedFile, lock, open_locked, try_lock, unlock};
pub use mkdir::mkdir_p;
pub use resolve::{path_exists, real_path, symlink};
pub use walk::{DirEntry, Entries, entries, for_each_entry};
