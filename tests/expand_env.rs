use plugfs::expand;
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn tilde_uses_home() {
    let saved = env::var_os("HOME");
    unsafe { env::set_var("HOME", "/home/u") };
    assert_eq!(expand("~/x"), "/home/u/x");
    assert_eq!(expand("~"), "/home/u");
    assert_eq!(expand("~user/x"), "~user/x");
    assert_eq!(expand("a/~/x"), "a/~/x");
    match saved {
        Some(v) => unsafe { env::set_var("HOME", v) },
        None => unsafe { env::remove_var("HOME") },
    }
}

#[test]
#[serial]
fn undefined_variable_is_preserved() {
    unsafe { env::remove_var("PLUGFS_UNDEFINED_VAR") };
    assert_eq!(expand("$PLUGFS_UNDEFINED_VAR/x"), "$PLUGFS_UNDEFINED_VAR/x");
}

#[test]
#[serial]
fn defined_variables_are_substituted() {
    unsafe {
        env::set_var("PLUGFS_TEST_ROOT", "/opt/plugins");
        env::set_var("PLUGFS_TEST_SUB", "lv2");
    }
    assert_eq!(expand("$PLUGFS_TEST_ROOT/$PLUGFS_TEST_SUB/x.lv2"), "/opt/plugins/lv2/x.lv2");
    // Lowercase letters end the name.
    assert_eq!(expand("$PLUGFS_TEST_SUBdir"), "lv2dir");
    unsafe {
        env::remove_var("PLUGFS_TEST_ROOT");
        env::remove_var("PLUGFS_TEST_SUB");
    }
}

#[test]
fn text_without_references_is_unchanged() {
    assert_eq!(expand("/usr/lib/lv2"), "/usr/lib/lv2");
    assert_eq!(expand(""), "");
}
