use super::*;

// =============================================================
// env_parse
// =============================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u16 = env_parse("__KEEPSAKE_TEST_MISSING__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__KEEPSAKE_TEST_VALID__", "8080") };
    let val: u16 = env_parse("__KEEPSAKE_TEST_VALID__", 0);
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__KEEPSAKE_TEST_VALID__") };
}

#[test]
fn env_parse_invalid_returns_default() {
    unsafe { std::env::set_var("__KEEPSAKE_TEST_INVALID__", "not-a-port") };
    let val: u16 = env_parse("__KEEPSAKE_TEST_INVALID__", 3000);
    assert_eq!(val, 3000);
    unsafe { std::env::remove_var("__KEEPSAKE_TEST_INVALID__") };
}

// =============================================================
// env_path
// =============================================================

#[test]
fn env_path_ignores_blank_values() {
    unsafe { std::env::set_var("__KEEPSAKE_TEST_BLANK_PATH__", "  ") };
    assert_eq!(env_path("__KEEPSAKE_TEST_BLANK_PATH__"), None);
    unsafe { std::env::remove_var("__KEEPSAKE_TEST_BLANK_PATH__") };
}

#[test]
fn env_path_reads_value() {
    unsafe { std::env::set_var("__KEEPSAKE_TEST_PATH__", "/srv/audio") };
    assert_eq!(env_path("__KEEPSAKE_TEST_PATH__"), Some(PathBuf::from("/srv/audio")));
    unsafe { std::env::remove_var("__KEEPSAKE_TEST_PATH__") };
}
