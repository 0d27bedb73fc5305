//! Language tag derived from `LANG`, in RFC 3066 style (`en_CA.utf-8` -> `en-ca`).

use std::env;
use tracing::warn;

/// Language tag for the current `LANG`, or `None` when unset, `C`, `POSIX`,
/// or malformed.
pub fn lang_tag() -> Option<String> {
    env::var("LANG").ok().and_then(|v| lang_tag_from(&v))
}

/// Convert a `LANG` value into a lowercase, dash-separated tag.
pub fn lang_tag_from(value: &str) -> Option<String> {
    if value.is_empty() || value == "C" || value == "POSIX" {
        return None;
    }

    let mut tag = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '_' => tag.push('-'),
            'A'..='Z' => tag.push(c.to_ascii_lowercase()),
            'a'..='z' | '0'..='9' => tag.push(c),
            // codeset suffix, e.g. ".utf-8"
            '.' => break,
            _ => {
                warn!(lang = value, "illegal LANG ignored");
                return None;
            }
        }
    }
    Some(tag)
}
