//! Latest numbered copy lookup.
//!
//! A copy of `name` lives in the copy directory as `name.<n>`. The latest copy
//! is the one with the newest modification time among those whose size equals
//! the original's and which are not older than the original. The walk order is
//! unspecified, so when two copies share the newest time the one seen last wins.

use filetime::FileTime;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use super::walk::{DirEntry, entries};

/// The `<copy_dir>/<basename>.%u` template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedPattern {
    dir: PathBuf,
    stem: OsString,
}

impl NumberedPattern {
    pub fn new(copy_dir: impl Into<PathBuf>, basename: impl Into<OsString>) -> Self {
        Self {
            dir: copy_dir.into(),
            stem: basename.into(),
        }
    }

    /// Copy number encoded in `name`, if `name` is `<basename>.<digits>`.
    pub fn number_of(&self, name: &OsStr) -> Option<u32> {
        let digits = name
            .as_encoded_bytes()
            .strip_prefix(self.stem.as_encoded_bytes())?
            .strip_prefix(b".")?;
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        std::str::from_utf8(digits).ok()?.parse().ok()
    }
}

impl fmt::Display for NumberedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.N", self.dir.join(&self.stem).display())
    }
}

/// Accumulator threaded through the directory walk.
struct LatestSearch {
    pattern: NumberedPattern,
    orig_size: u64,
    orig_mtime: FileTime,
    best: Option<(PathBuf, FileTime)>,
}

impl LatestSearch {
    fn consider(mut self, entry: DirEntry<'_>) -> Self {
        if self.pattern.number_of(entry.name()).is_none() {
            return self;
        }

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot stat candidate copy");
                return self;
            }
        };
        if !meta.is_file() {
            return self;
        }

        let mtime = FileTime::from_last_modification_time(&meta);
        if meta.len() != self.orig_size || mtime < self.orig_mtime {
            trace!(path = %path.display(), size = meta.len(), "copy does not match original");
            return self;
        }

        if self.best.as_ref().is_none_or(|(_, best)| mtime >= *best) {
            self.best = Some((path, mtime));
        }
        self
    }
}

/// Newest copy of `original` inside `copy_dir`, or `None` if none qualifies.
pub fn latest_copy(original: impl AsRef<Path>, copy_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let original = original.as_ref();
    let copy_dir = copy_dir.as_ref();

    let basename = original.file_name()?;
    let meta = match fs::metadata(original) {
        Ok(m) => m,
        Err(e) => {
            warn!(path = %original.display(), error = %e, "cannot stat original");
            return None;
        }
    };

    let search = LatestSearch {
        pattern: NumberedPattern::new(copy_dir, basename),
        orig_size: meta.len(),
        orig_mtime: FileTime::from_last_modification_time(&meta),
        best: None,
    };

    trace!(pattern = %search.pattern, "scanning for numbered copies");
    let found = entries(copy_dir).fold(search, LatestSearch::consider).best;
    if let Some((path, _)) = &found {
        debug!(original = %original.display(), latest = %path.display(), "found latest copy");
    }
    found.map(|(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_displays_as_template() {
        let p = NumberedPattern::new("/cache", "state.ttl");
        assert_eq!(p.to_string(), format!("{}.N", Path::new("/cache").join("state.ttl").display()));
    }

    #[test]
    fn pattern_accepts_only_digit_suffixes() {
        let p = NumberedPattern::new("/cache", "state.ttl");
        assert_eq!(p.number_of(OsStr::new("state.ttl.2")), Some(2));
        assert_eq!(p.number_of(OsStr::new("state.ttl.0042")), Some(42));
        assert_eq!(p.number_of(OsStr::new("state.ttl")), None);
        assert_eq!(p.number_of(OsStr::new("state.ttl.")), None);
        assert_eq!(p.number_of(OsStr::new("state.ttl.4x")), None);
        assert_eq!(p.number_of(OsStr::new("state.ttl.-1")), None);
        assert_eq!(p.number_of(OsStr::new("other.ttl.3")), None);
        assert_eq!(p.number_of(OsStr::new("state.ttl.99999999999")), None);
    }
}
