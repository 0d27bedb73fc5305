//! `mkdir -p`: create every missing directory along a path.
//!
//! Each prefix is created in turn. A prefix that already exists as a directory
//! is accepted whatever error the create call gave (some filesystems answer
//! EACCES or EROFS instead of EEXIST for existing directories); anything else
//! stops the walk and returns the OS error unchanged.

use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{trace, warn};

use super::helpers::describe_io_error;
use crate::platform;

/// Create `path` and all of its missing ancestors.
pub fn mkdir_p(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let mut prefix = PathBuf::new();

    for comp in path.components() {
        prefix.push(comp);
        // The root and drive prefixes exist by definition.
        if matches!(comp, Component::Prefix(_) | Component::RootDir) {
            continue;
        }
        match platform::create_dir(&prefix) {
            Ok(()) => trace!(path = %prefix.display(), "created directory"),
            Err(_) if prefix.is_dir() => {}
            Err(e) => {
                warn!(error = %describe_io_error("create directory", &prefix, &e), "mkdir -p failed");
                return Err(e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_chain() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("c");
        mkdir_p(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn tolerates_redundant_separators() {
        let dir = tempdir().unwrap();
        let target = format!("{}//x///y/", dir.path().display());
        mkdir_p(&target).unwrap();
        assert!(dir.path().join("x").join("y").is_dir());
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), b"x").unwrap();
        let err = mkdir_p(dir.path().join("a").join("b")).unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
        assert!(dir.path().join("a").is_file());
    }

    #[test]
    fn existing_file_as_final_component_is_an_error() {
        let dir = tempdir().unwrap();
        let f = dir.path().join("f");
        fs::write(&f, b"x").unwrap();
        assert_eq!(mkdir_p(&f).unwrap_err().kind(), io::ErrorKind::AlreadyExists);
    }
}
