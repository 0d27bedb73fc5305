use plugfs::{dirname, is_absolute, is_child, join, relative_to, to_absolute};
use std::fs;
use std::path::Path;

#[test]
fn join_never_doubles_the_separator() {
    for (a, b) in [("/usr/lib/", "/lv2"), ("/usr/lib", "lv2"), ("/usr/lib//", "lv2"), ("x", "/y")] {
        let joined = join(Some(a), b);
        assert!(!joined.contains("//"), "{a:?} + {b:?} gave {joined:?}");
    }
    assert_eq!(join(Some("/usr/lib/"), "/lv2"), "/usr/lib/lv2");
    assert_eq!(join(None, "lv2"), "lv2");
}

#[test]
fn dirname_cases() {
    assert_eq!(dirname("/usr/lib/lv2/"), "/usr/lib");
    assert_eq!(dirname("/usr"), "/");
    assert_eq!(dirname("/"), "/");
    assert_eq!(dirname("file.ttl"), ".");
    assert_eq!(dirname("a//b"), "a");
}

#[test]
fn relative_to_examples() {
    // `base` names a file; only its directory part counts.
    assert_eq!(relative_to("/a/b/c", "/a/x/y"), "../b/c");
    assert_eq!(relative_to("/a/b/c", "/a/b/"), "c");
    assert_eq!(relative_to("/a/b/c", "/a/x"), "b/c");
    assert_eq!(relative_to("/a/b", "/c/d"), "/a/b");
}

#[test]
fn is_child_uses_plain_prefix() {
    assert!(is_child("/usr/lib/lv2/x.lv2", "/usr/lib/lv2"));
    assert!(is_child("/usr/lib/lv2x", "/usr/lib/lv2"));
    assert!(!is_child("/usr/lib", "/usr/lib/lv2"));
}

#[test]
fn to_absolute_keeps_absolute_and_prefixes_relative() {
    assert_eq!(to_absolute("/opt/x").unwrap(), "/opt/x");
    let abs = to_absolute("bundle.lv2").unwrap();
    assert!(is_absolute(&abs));
    assert!(abs.ends_with("bundle.lv2"));
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(Path::new(&dirname(&abs)), cwd.as_path());
}

#[cfg(unix)]
#[test]
fn relative_path_resolves_back_to_target() {
    let td = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(td.path()).unwrap();
    fs::create_dir_all(root.join("a/b")).unwrap();
    fs::create_dir_all(root.join("a/x")).unwrap();
    fs::write(root.join("a/b/c"), b"data").unwrap();

    let root_str = root.to_str().unwrap();
    let path = join(Some(root_str), "a/b/c");
    let base = join(Some(root_str), "a/x/manifest.ttl");
    let rel = relative_to(&path, &base);
    assert_eq!(rel, "../b/c");

    let resolved = fs::canonicalize(Path::new(&dirname(&base)).join(&rel)).unwrap();
    assert_eq!(resolved, fs::canonicalize(&path).unwrap());
}
