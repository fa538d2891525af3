#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

#[test]
fn resolve___no_config_file___uses_defaults() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("api.rs");

    let config = resolve(None, Some(source.as_path())).unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn resolve___config_next_to_source___is_discovered() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("apigen.toml"), "auth_token = \"s3cret\"\n").unwrap();
    let source = dir.path().join("api.rs");

    let config = resolve(None, Some(source.as_path())).unwrap();

    assert_eq!(config.auth_token, "s3cret");
    assert_eq!(config.auth_header, "X-Auth");
}

#[test]
fn resolve___explicit_path___wins_over_discovery() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("apigen.toml"), "auth_token = \"discovered\"\n").unwrap();
    let explicit = dir.path().join("custom.toml");
    std::fs::write(&explicit, "auth_token = \"explicit\"\n").unwrap();
    let source = dir.path().join("api.rs");

    let config = resolve(Some(explicit.as_path()), Some(source.as_path())).unwrap();

    assert_eq!(config.auth_token, "explicit");
}

#[test]
fn resolve___missing_explicit_path___is_error() {
    let dir = TempDir::new().unwrap();

    let err = resolve(Some(dir.path().join("nope.toml").as_path()), None).unwrap_err();

    assert!(err.to_string().contains("Failed to load config"));
}

#[test]
fn with_overrides___replaces_only_given_paths() {
    let config = with_overrides(GeneratorConfig::default(), Some("crate::api".into()), None);

    assert_eq!(config.types_path, "crate::api");
    assert_eq!(config.runtime_path, "::apigen");
}
