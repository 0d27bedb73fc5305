//! Directory separator policy.
//! `/` is always accepted; the platform-native separator is accepted as well.

/// Platform-native directory separator (`\` on Windows, `/` elsewhere).
pub const DIR_SEP: char = std::path::MAIN_SEPARATOR;

/// True if `c` separates path components on this platform.
#[inline]
pub fn is_dir_sep(c: char) -> bool {
    c == '/' || c == DIR_SEP
}

/// Byte variant used by the path algebra, which scans paths bytewise.
#[inline]
pub(crate) fn is_sep_byte(b: u8) -> bool {
    b == b'/' || b == DIR_SEP as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_is_always_a_separator() {
        assert!(is_dir_sep('/'));
        assert!(is_dir_sep(DIR_SEP));
        assert!(!is_dir_sep('a'));
        assert!(!is_dir_sep(':'));
    }

    #[cfg(unix)]
    #[test]
    fn backslash_is_plain_on_unix() {
        assert!(!is_dir_sep('\\'));
        assert!(!is_sep_byte(b'\\'));
    }
}
