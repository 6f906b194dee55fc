// Layouts that must be rejected are `compile_fail` doctests on
// `Bcd::ASSERT_LAYOUT`: rustdoc only checks that they fail, while trybuild
// would pin the compiler's exact diagnostics.
#[test]
fn test_compile_layouts() {
    let t = trybuild::TestCases::new();
    t.pass("tests/compile_success/*.rs");
}
