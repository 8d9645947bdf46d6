#[test]
fn cadastro_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
}
