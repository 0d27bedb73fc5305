//! Application orchestrator.
//! Loads/merges config, initializes logging and dispatches the selected subcommand
//! to the library. Results go to stdout; the returned bool becomes the exit status.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use plugfs::cli::{Args, Command};
use plugfs::fs_ops::{io_error_with_help, open_locked};
use plugfs::output as out;
use plugfs::{
    LockMode, PlugfsError, copy_file, dirname, expand, files_equal, find_free_path_on_disk,
    is_child, join, lang_tag, latest_copy, mkdir_p, real_path, relative_to, symlink, to_absolute,
};

use crate::logging::init_tracing;

/// Run the CLI application. `Ok(false)` means the operation answered "no".
pub fn run(args: Args) -> Result<bool> {
    let mut cfg = plugfs::config::load_config()?;
    args.apply_overrides(&mut cfg);

    // Hold the guard so the non-blocking file writer flushes at exit.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs)?;
    debug!(command = ?args.command, lock_copies = cfg.lock_copies, "starting");

    match args.command {
        Command::Expand { path } => out::print_user(&expand(&path)),
        Command::Join { base, path } => out::print_user(&join(Some(&base), &path)),
        Command::Dirname { path } => out::print_user(&dirname(&path)),
        Command::Absolute { path } => {
            let abs = to_absolute(&path).context("cannot determine the current directory")?;
            out::print_user(&abs);
        }
        Command::Relative { path, base } => out::print_user(&relative_to(&path, &base)),
        Command::IsChild { path, dir } => return Ok(is_child(&path, &dir)),
        Command::FreePath { candidate } => {
            let free = find_free_path_on_disk(&candidate).ok_or(PlugfsError::NoFreePath(candidate))?;
            out::print_user(&free);
        }
        Command::LatestCopy { original, copy_dir } => match latest_copy(&original, &copy_dir) {
            Some(found) => out::print_user(&found.display().to_string()),
            None => return Err(PlugfsError::NoLatestCopy { original, copy_dir }.into()),
        },
        Command::Equals { a, b } => return Ok(files_equal(&a, &b)),
        Command::Copy { src, dst, parents, .. } => {
            run_copy(&src, &dst, parents, cfg.lock_copies)?;
        }
        Command::Mkdir { path } => {
            mkdir_p(&path).map_err(io_error_with_help("create directory", &path))?;
            info!(path = %path.display(), "directory ready");
        }
        Command::Realpath { path } => out::print_user(&real_path(&path).display().to_string()),
        Command::Link { target, link } => {
            symlink(&target, &link).map_err(io_error_with_help("create link", &link))?;
        }
        Command::Lang => match lang_tag() {
            Some(tag) => out::print_user(&tag),
            None => return Ok(false),
        },
    }
    Ok(true)
}

/// Copy with optional parent creation and advisory locks. Locks are released
/// when the LockedFile guards drop at the end of this function.
fn run_copy(src: &Path, dst: &Path, parents: bool, lock: bool) -> Result<()> {
    if parents
        && let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty())
    {
        mkdir_p(parent).map_err(io_error_with_help("create directory", parent))?;
    }

    let _locks = if lock {
        let src_lock = open_locked(src, LockMode::Shared).map_err(io_error_with_help("lock", src))?;
        let dst_lock = open_locked(dst, LockMode::Exclusive).map_err(io_error_with_help("lock", dst))?;
        debug!(src = %src.display(), dst = %dst.display(), "holding copy locks");
        Some((src_lock, dst_lock))
    } else {
        None
    };

    let bytes = copy_file(src, dst).map_err(PlugfsError::from)?;
    info!(src = %src.display(), dst = %dst.display(), bytes, "copied");
    Ok(())
}
