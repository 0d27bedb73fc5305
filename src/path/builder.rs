//! Owned string assembly for path-producing operations.
//! Every producer returns a fresh `String`; callers own the result.

/// Concatenate `parts` into one owned string, allocating once.
pub fn strjoin(parts: &[&str]) -> String {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut out = String::with_capacity(len);
    for p in parts {
        out.push_str(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_all_fragments_in_order() {
        assert_eq!(strjoin(&["/usr", "/lib", "/lv2"]), "/usr/lib/lv2");
        assert_eq!(strjoin(&["only"]), "only");
        assert_eq!(strjoin(&[]), "");
    }
}
