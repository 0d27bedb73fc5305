//! Pure path algebra over string paths.
//!
//! These functions never touch the filesystem (except `to_absolute`, which
//! reads the current directory) and never normalize beyond what each one
//! documents. Both `/` and the platform-native separator are recognized.

use std::env;
use std::io;

use super::builder::strjoin;
use super::sep::{is_dir_sep, is_sep_byte};

/// Join `a` and `b` with exactly one `/` between them.
///
/// Trailing separators on `a` and leading separators on `b` are dropped
/// before joining. `join(None, b)` (or an empty `a`) returns `b` unchanged.
pub fn join(a: Option<&str>, b: &str) -> String {
    let a = match a {
        Some(a) if !a.is_empty() => a,
        _ => return b.to_owned(),
    };
    let head = a.trim_end_matches(is_dir_sep);
    let tail = b.trim_start_matches(is_dir_sep);
    strjoin(&[head, "/", tail])
}

/// Parent directory of `path`.
///
/// Trailing separators are ignored, then the last component is removed along
/// with the separators before it. Returns `/` when only the root remains and
/// `.` when there is no separator at all.
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches(is_dir_sep);
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" }.to_owned();
    }
    match trimmed.rfind(is_dir_sep) {
        None => ".".to_owned(),
        Some(i) => {
            let head = trimmed[..i].trim_end_matches(is_dir_sep);
            if head.is_empty() {
                "/".to_owned()
            } else {
                head.to_owned()
            }
        }
    }
}

/// True if `path` starts with a separator, or on Windows with `X:` and a separator.
pub fn is_absolute(path: &str) -> bool {
    let b = path.as_bytes();
    if b.first().is_some_and(|&c| is_sep_byte(c)) {
        return true;
    }
    cfg!(windows) && b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && is_sep_byte(b[2])
}

/// Absolute form of `path`: unchanged if already absolute, otherwise joined
/// onto the current working directory.
///
/// Fails with `InvalidData` when the working directory is not valid UTF-8.
pub fn to_absolute(path: &str) -> io::Result<String> {
    if is_absolute(path) {
        return Ok(path.to_owned());
    }
    let cwd = env::current_dir()?;
    absolute_from(&cwd, path)
}

fn absolute_from(cwd: &std::path::Path, path: &str) -> io::Result<String> {
    let cwd = cwd.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("working directory is not valid UTF-8: {}", cwd.display()),
        )
    })?;
    Ok(join(Some(cwd), path))
}

/// Express `path` relative to `base`.
///
/// The shared prefix ends at the last separator both strings have in common.
/// Each separator left in `base` past that point becomes one `../`. When the
/// only shared separator is the leading root (or none at all) `path` is
/// returned verbatim.
pub fn relative_to(path: &str, base: &str) -> String {
    let p = path.as_bytes();
    let b = base.as_bytes();

    let mut last_shared_sep = 0;
    for (i, (x, y)) in p.iter().zip(b).enumerate() {
        if x != y {
            break;
        }
        if is_sep_byte(*x) {
            last_shared_sep = i;
        }
    }

    if last_shared_sep == 0 {
        return path.to_owned();
    }

    let up = b[last_shared_sep + 1..]
        .iter()
        .filter(|c| is_sep_byte(**c))
        .count();

    let suffix = &path[last_shared_sep + 1..];
    let mut rel = String::with_capacity(up * 3 + suffix.len());
    for _ in 0..up {
        rel.push_str("../");
    }
    rel.push_str(suffix);
    rel
}

/// True if `path` begins with `dir` byte for byte.
///
/// This is a plain prefix test: `/foo2` counts as a child of `/foo`.
/// Callers rely on the lenient behavior, so it is kept.
pub fn is_child(path: &str, dir: &str) -> bool {
    path.len() >= dir.len() && path.as_bytes().starts_with(dir.as_bytes())
}
