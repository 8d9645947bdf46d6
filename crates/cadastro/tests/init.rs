use cadastro::domain::config::ApiConfig;
use cadastro::features::{casing::Casing, documents::Documents};

#[test]
fn init_builds_every_slice() {
    let slices = cadastro::init(&ApiConfig::default()).expect("default config is valid");
    assert_eq!(slices.len(), 2);
    assert!(slices.iter().any(|s| s.downcast_ref::<Documents>().is_some()));
    assert!(slices.iter().any(|s| s.downcast_ref::<Casing>().is_some()));
}

#[test]
fn invalid_casing_config_fails_init() {
    let mut config = ApiConfig::default();
    config.casing.sweep_interval_ms = 0;

    let err = cadastro::init(&config).unwrap_err();
    assert!(err.to_string().contains("sweep_interval_ms"));
}

#[test]
fn enabled_features_are_listed() {
    assert!(cadastro::features::is_enabled("documents"));
    assert!(cadastro::features::is_enabled("casing"));
    assert!(!cadastro::features::is_enabled("licensing"));
}
