#![allow(non_snake_case)]

use super::*;
use apigen_core::rules;
use apigen_core::{FieldType, IntKind, ValidatedStruct};

fn manifest() -> ApiManifest {
    let endpoint = |receiver: &str, method: &str, url: &str| EndpointDescriptor {
        receiver_type: receiver.into(),
        method_name: method.into(),
        url_path: url.into(),
        http_method: String::new(),
        requires_auth: false,
        param_type_name: "Params".into(),
    };
    ApiManifest::new(
        vec![
            endpoint("MyApi", "profile", "/user/profile"),
            endpoint("OtherApi", "create", "/user/create"),
            endpoint("MyApi", "create", "/user/create"),
        ],
        vec![ValidatedStruct {
            name: "Params".into(),
            has_untagged_fields: false,
            fields: vec![rules::compile("age", FieldType::Int(IntKind::I32), "min=0").unwrap()],
        }],
    )
}

#[test]
fn render___starts_with_generated_header() {
    let code = render(&manifest(), "src/api.rs", &GeneratorConfig::default()).unwrap();

    assert!(code.starts_with("// Code generated by apigen. DO NOT EDIT.\n// source: src/api.rs\n\n"));
}

#[test]
fn render___imports_types_path() {
    let config = GeneratorConfig::default().with_types_path("crate::api");

    let code = render(&manifest(), "api.rs", &config).unwrap();

    assert!(code.contains("use crate::api::*;"));
}

#[test]
fn render___runtime_path___prefixes_runtime_items() {
    let config = GeneratorConfig::default().with_runtime_path("::apigen_runtime");

    let code = render(&manifest(), "api.rs", &config).unwrap();

    assert!(code.contains("impl ::apigen_runtime::FromParams for Params"));
    assert!(!code.contains("::apigen::"));
}

#[test]
fn render___one_router_per_receiver_in_first_seen_order() {
    let code = render(&manifest(), "api.rs", &GeneratorConfig::default()).unwrap();

    assert_eq!(code.matches("impl ::apigen::Handler for").count(), 2);
    let my_api = code.find("impl ::apigen::Handler for MyApi").unwrap();
    let other_api = code.find("impl ::apigen::Handler for OtherApi").unwrap();
    assert!(my_api < other_api);
}

#[test]
fn render___has_no_inner_attributes() {
    let code = render(&manifest(), "api.rs", &GeneratorConfig::default()).unwrap();

    assert!(!code.contains("#!["));
}

#[test]
fn render___is_deterministic() {
    let config = GeneratorConfig::default();

    let first = render(&manifest(), "api.rs", &config).unwrap();
    let second = render(&manifest(), "api.rs", &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn render___invalid_manifest___is_rejected() {
    let mut manifest = manifest();
    manifest.endpoints[0].param_type_name = "Missing".into();

    assert!(matches!(
        render(&manifest, "api.rs", &GeneratorConfig::default()),
        Err(GenError::UnknownParamType { .. })
    ));
}

#[test]
fn render___invalid_runtime_path___is_config_error() {
    let config = GeneratorConfig::default().with_runtime_path("not a path");

    assert!(matches!(
        render(&manifest(), "api.rs", &config),
        Err(GenError::Config(_))
    ));
}
