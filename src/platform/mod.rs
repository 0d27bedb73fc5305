//! Platform-specific primitives.
//! This module hides OS differences (Unix/Windows/other) behind a uniform API so
//! the rest of the crate can remain platform-agnostic: advisory locking, link
//! creation, single-directory creation and file identity.

#[cfg(any(unix, windows))]
mod fs2_lock;
#[cfg(not(any(unix, windows)))]
mod other;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(any(unix, windows))]
pub use fs2_lock::{LOCKING_SUPPORTED, lock_file, try_lock_file, unlock_file};
#[cfg(not(any(unix, windows)))]
pub use other::{LOCKING_SUPPORTED, create_dir, lock_file, symlink, try_lock_file, unlock_file};
#[cfg(not(unix))]
pub use same_file::is_same_file as same_file_object;
#[cfg(unix)]
pub use unix::{create_dir, same_file_object, symlink};
#[cfg(windows)]
pub use windows::{create_dir, symlink};
