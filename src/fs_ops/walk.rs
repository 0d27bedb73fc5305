//! Single-level directory enumeration.
//!
//! `entries` yields one `DirEntry` per child of a directory, lazily, in
//! whatever order the OS returns them. A directory that is missing or cannot
//! be opened yields nothing: absence is a normal outcome, not an error.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One child of the directory being walked. Borrowed from the walk; clone
/// the name or call `path()` to keep anything beyond the visit.
#[derive(Debug, Clone)]
pub struct DirEntry<'a> {
    parent: &'a Path,
    name: OsString,
}

impl<'a> DirEntry<'a> {
    /// Directory being walked.
    pub fn parent(&self) -> &'a Path {
        self.parent
    }

    /// Entry name without any directory part.
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// `parent/name`.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// Lazy, finite sequence of the children of one directory.
pub struct Entries<'a> {
    parent: &'a Path,
    inner: walkdir::IntoIter,
}

impl<'a> Iterator for Entries<'a> {
    type Item = DirEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    return Some(DirEntry {
                        parent: self.parent,
                        name: entry.file_name().to_os_string(),
                    });
                }
                Err(e) => {
                    debug!(dir = %self.parent.display(), error = %e, "skipping unreadable directory entry");
                }
            }
        }
    }
}

/// Children of `dir`. Symlinks are reported, not followed.
pub fn entries<P: AsRef<Path> + ?Sized>(dir: &P) -> Entries<'_> {
    let parent = dir.as_ref();
    Entries {
        parent,
        inner: WalkDir::new(parent).min_depth(1).max_depth(1).into_iter(),
    }
}

/// Call `visit(parent, name)` once per child of `dir`.
pub fn for_each_entry<P, F>(dir: &P, mut visit: F)
where
    P: AsRef<Path> + ?Sized,
    F: FnMut(&Path, &OsStr),
{
    for entry in entries(dir) {
        visit(entry.parent(), entry.name());
    }
}
