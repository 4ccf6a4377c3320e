//! Compile-fail tests to verify error messages
//!
//! These tests ensure that malformed `#[env(...)]` attributes and unsupported
//! targets produce clear errors pointing at the offending token.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
