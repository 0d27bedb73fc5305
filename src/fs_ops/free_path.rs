//! Free-path search.
//!
//! Policy:
//! - Try the candidate itself, then `candidate.2`, `candidate.3`, ... up to
//!   `candidate.999999`.
//! - The first name the predicate reports as absent wins.
//! - Past the bound there is no answer; the search never scans further.
//!
//! Notes:
//! - The answer is only free at the moment of the check. Callers that create the
//!   file afterwards should hold a lock or open with create-new semantics.

use tracing::{trace, warn};

use super::resolve::path_exists;

/// Highest numbered suffix tried before giving up.
pub const MAX_COPY_SUFFIX: u32 = 999_999;

/// `base.n`, the name of the n-th numbered copy of `base`.
#[inline]
pub fn numbered(base: &str, n: u32) -> String {
    format!("{base}.{n}")
}

/// First of `candidate`, `candidate.2`, ... for which `exists` returns false.
///
/// `exists` must not change the set of paths it is asked about.
pub fn find_free_path<F>(candidate: &str, exists: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    if !exists(candidate) {
        return Some(candidate.to_owned());
    }

    let found = (2..=MAX_COPY_SUFFIX)
        .map(|n| numbered(candidate, n))
        .find(|p| !exists(p));

    match &found {
        Some(p) => trace!(candidate, free = %p, "found free path"),
        None => warn!(candidate, max = MAX_COPY_SUFFIX, "no free numbered path"),
    }
    found
}

/// `find_free_path` against the real filesystem. A dangling symlink counts as taken.
pub fn find_free_path_on_disk(candidate: &str) -> Option<String> {
    find_free_path(candidate, |p| path_exists(p))
}
