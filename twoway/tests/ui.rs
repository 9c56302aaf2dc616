#[test]
#[cfg(not(miri))]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/derive_visibility.rs");
    t.pass("tests/ui/raw_identifiers.rs");
    t.pass("tests/ui/generic_bounds.rs");
}
