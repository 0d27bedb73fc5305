//! Byte-exact file comparison.
//!
//! Order of checks:
//! - identical path strings: equal, no I/O
//! - either path fails to resolve: unequal (a missing file matches nothing)
//! - same canonical path or same file object (hard links): equal, content not read
//! - different sizes: unequal, content not read
//! - otherwise compare contents block by block

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{trace, warn};

use super::helpers::describe_io_error;
use crate::platform;

const CMP_BLOCK_SIZE: usize = 64 * 1024;

/// True if `a` and `b` name the same file or files with identical contents.
pub fn files_equal(a: impl AsRef<Path>, b: impl AsRef<Path>) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.as_os_str() == b.as_os_str() {
        return true;
    }

    let (a_real, b_real) = match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            trace!(a = %a.display(), b = %b.display(), "unresolvable path, treating as different");
            return false;
        }
    };
    if a_real == b_real {
        return true;
    }
    // Hard links keep distinct canonical names but share one inode.
    match platform::same_file_object(&a_real, &b_real) {
        Ok(true) => {
            trace!(a = %a_real.display(), b = %b_real.display(), "same file object");
            return true;
        }
        Ok(false) => {}
        Err(e) => trace!(error = %e, "file identity unavailable, comparing contents"),
    }

    match (fs::metadata(&a_real), fs::metadata(&b_real)) {
        (Ok(ma), Ok(mb)) if ma.len() == mb.len() => {}
        _ => return false,
    }

    match same_contents(&a_real, &b_real) {
        Ok(eq) => eq,
        Err((path, e)) => {
            warn!(error = %describe_io_error("compare", &path, &e), "file comparison failed");
            false
        }
    }
}

fn same_contents(a: &Path, b: &Path) -> Result<bool, (std::path::PathBuf, io::Error)> {
    let mut fa = File::open(a).map_err(|e| (a.to_path_buf(), e))?;
    let mut fb = File::open(b).map_err(|e| (b.to_path_buf(), e))?;
    let mut ba = vec![0u8; CMP_BLOCK_SIZE];
    let mut bb = vec![0u8; CMP_BLOCK_SIZE];
    loop {
        let na = read_block(&mut fa, &mut ba).map_err(|e| (a.to_path_buf(), e))?;
        let nb = read_block(&mut fb, &mut bb).map_err(|e| (b.to_path_buf(), e))?;
        if na != nb || ba[..na] != bb[..nb] {
            return Ok(false);
        }
        if na == 0 {
            return Ok(true);
        }
    }
}

/// Fill `buf` as far as the reader allows; short only at end of file.
fn read_block(r: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_block_fills_until_eof() {
        let mut r = Cursor::new(vec![7u8; 10]);
        let mut buf = [0u8; 4];
        assert_eq!(read_block(&mut r, &mut buf).unwrap(), 4);
        assert_eq!(read_block(&mut r, &mut buf).unwrap(), 4);
        assert_eq!(read_block(&mut r, &mut buf).unwrap(), 2);
        assert_eq!(read_block(&mut r, &mut buf).unwrap(), 0);
    }

    #[test]
    fn identical_strings_need_no_file() {
        assert!(files_equal("/definitely/not/here", "/definitely/not/here"));
    }

    #[test]
    fn missing_file_is_never_equal() {
        assert!(!files_equal("/definitely/not/here", "/definitely/not/there"));
    }
}
