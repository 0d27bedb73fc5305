//! Streaming file copy.
//!
//! - The source is opened read-only; the destination is created or truncated.
//! - Data moves in fixed 64 KiB blocks; a block that cannot be written in full
//!   stops the copy.
//! - Open failures, read failures and write failures are reported as distinct
//!   `CopyError` variants so callers can tell "could not start" from "broke midway".
//!
//! Snapshot semantics: the source is read once from start to EOF; growth during
//! the copy is not picked up. A failed copy may leave a partial destination;
//! callers that need atomic replacement should copy to a free path and rename.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::CopyError;

/// Size of each block moved from source to destination.
pub const COPY_BLOCK_SIZE: usize = 64 * 1024;

/// Bytes copied on success, or where and why the copy failed.
pub type CopyOutcome = Result<u64, CopyError>;

/// Copy `src` to `dst`, replacing any existing file at `dst`.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> CopyOutcome {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let res = copy_blocks(src, dst);
    match &res {
        Ok(bytes) => debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file"),
        Err(e) => warn!(src = %src.display(), dst = %dst.display(), error = %e, "copy failed"),
    }
    res
}

fn copy_blocks(src: &Path, dst: &Path) -> CopyOutcome {
    let mut input = File::open(src).map_err(|source| CopyError::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;
    let mut output = File::create(dst).map_err(|source| CopyError::OpenDestination {
        path: dst.to_path_buf(),
        source,
    })?;

    let write_err = |source| CopyError::Write {
        path: dst.to_path_buf(),
        source,
    };

    let mut block = vec![0u8; COPY_BLOCK_SIZE];
    let mut total: u64 = 0;
    loop {
        let n = match input.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(CopyError::Read {
                    path: src.to_path_buf(),
                    source,
                });
            }
        };
        output.write_all(&block[..n]).map_err(write_err)?;
        total += n as u64;
    }
    output.flush().map_err(write_err)?;
    Ok(total)
}
