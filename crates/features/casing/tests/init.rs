use cadastro_casing::{Casing, CasingError, FieldDescriptor, FieldClass, FormDocument, InputElement, FieldKind, init};
use cadastro_kernel::domain::config::CasingConfig;

#[test]
fn init_creates_slice_with_configured_policy() {
    let config = CasingConfig { extra_preserve_fragments: vec!["placa".into()], ..CasingConfig::default() };
    let slice = init(&config).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Casing>());

    let casing = slice.downcast_ref::<Casing>().unwrap();
    assert_eq!(casing.opt_in_marker, "data-uppercase");
    assert_eq!(casing.policy.classify(&FieldDescriptor::named("placaVeiculo")), FieldClass::Preserve);
}

#[test]
fn zero_interval_is_rejected() {
    let config = CasingConfig { sweep_interval_ms: 0, ..CasingConfig::default() };
    let err = init(&config).unwrap_err();
    assert!(matches!(err, CasingError::Config { .. }));
    assert!(err.to_string().contains("sweep_interval_ms"));
}

#[test]
fn blank_marker_is_rejected() {
    let config = CasingConfig { opt_in_marker: "  ".into(), ..CasingConfig::default() };
    assert!(matches!(init(&config), Err(CasingError::Config { .. })));
}

#[test]
fn slice_sweeper_uses_slice_settings() {
    let config = CasingConfig { opt_in_marker: "data-caps".into(), ..CasingConfig::default() };
    let slice = init(&config).unwrap();
    let casing = slice.downcast_ref::<Casing>().unwrap();

    let document = FormDocument::new();
    document.insert(
        InputElement::new("nome", FieldKind::Text).with_name("nome").with_value("ana").with_attribute("data-caps", ""),
    );
    let report = casing.sweeper(document.clone()).scan();

    assert_eq!(report.transformed, 1);
    assert_eq!(document.get("nome").unwrap().value, "ANA");
}
