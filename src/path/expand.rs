//! Environment expansion for configured search paths.
//!
//! `$NAME` references (NAME made of `A-Z`, `0-9`, `_`) are replaced by the
//! variable's value and a leading `~` before a separator (or the end of the
//! string) becomes `$HOME`. An undefined variable is left in the output as
//! `$NAME` so a missing value never collapses into a different, valid-looking
//! path.
//!
//! The process environment is read without synchronization. Callers must not
//! mutate it from another thread while an expansion is running.

use std::env;

use super::sep::is_dir_sep;

/// Expand `path` against the process environment.
pub fn expand(path: &str) -> String {
    expand_with(path, |name| env::var(name).ok())
}

/// Expand `path` using `lookup` to resolve variable names.
pub fn expand_with<F>(path: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    if let Some(after) = rest.strip_prefix('~')
        && (after.is_empty() || after.starts_with(is_dir_sep))
    {
        append_var(&mut out, "HOME", &lookup);
        rest = after;
    }

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let name_len = after.bytes().take_while(|b| is_var_byte(*b)).count();
        append_var(&mut out, &after[..name_len], &lookup);
        rest = &after[name_len..];
    }

    out.push_str(rest);
    out
}

#[inline]
fn is_var_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

fn append_var<F>(out: &mut String, name: &str, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    match (!name.is_empty()).then(|| lookup(name)).flatten() {
        Some(value) => out.push_str(&value),
        None => {
            out.push('$');
            out.push_str(name);
        }
    }
}
