//! Core library for `plugfs`.
//!
//! Portable path and file helpers for plugin discovery:
//! - `path`: separator policy, `$VAR`/`~` expansion, join/dirname/relative path
//!   algebra and the `LANG` language tag. Pure string functions.
//! - `fs_ops`: directory enumeration, free-path and latest-copy search, file
//!   comparison, streaming copy, `mkdir -p` and advisory locks.
//!
//! Every operation is synchronous. Failures come back as data (`Option`,
//! `bool`, `io::Result`, `CopyOutcome`) and are logged through `tracing`;
//! nothing here panics or exits the process.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod path;
mod platform;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::{CopyError, PlugfsError};
pub use fs_ops::{
    CopyOutcome, DirEntry, LockMode, copy_file, entries, files_equal, find_free_path,
    find_free_path_on_disk, for_each_entry, latest_copy, mkdir_p, real_path, symlink,
};
pub use path::{
    DIR_SEP, dirname, expand, is_absolute, is_child, is_dir_sep, join, lang_tag, relative_to,
    to_absolute,
};
