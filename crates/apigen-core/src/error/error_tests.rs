#![allow(non_snake_case)]

use super::*;

#[test]
fn GenError___duplicate_route___names_both_methods() {
    let err = GenError::DuplicateRoute {
        receiver: "MyApi".into(),
        url: "/user/profile".into(),
        first: "profile".into(),
        second: "profile_v2".into(),
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "route `/user/profile` on MyApi is claimed by both `profile` and `profile_v2`"
    );
}

#[test]
fn GenError___invalid_rule___includes_rule_reason() {
    let err = GenError::InvalidRule {
        struct_name: "ProfileParams".into(),
        field: "age".into(),
        reason: RuleError::NotAnInteger {
            key: "min".into(),
            value: "ten".into(),
        },
    };

    let display = err.to_string();

    assert_eq!(
        display,
        "invalid rule on ProfileParams.age: `min=ten` is not an integer"
    );
}

#[test]
fn GenError___from_toml_error___becomes_manifest_error() {
    let toml_err = toml::from_str::<toml::Table>("version = ").unwrap_err();

    let err = GenError::from(toml_err);

    assert!(matches!(err, GenError::Manifest(_)));
}

#[test]
fn GenError___from_json_error___becomes_manifest_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let err = GenError::from(json_err);

    assert!(matches!(err, GenError::Manifest(_)));
}

#[test]
fn RuleError___inverted_bounds___displays_both_values() {
    let err = RuleError::InvertedBounds { min: 10, max: 2 };

    assert_eq!(err.to_string(), "min 10 is greater than max 2");
}

#[test]
fn GenError___unsupported_version___displays_expected() {
    let err = GenError::UnsupportedVersion {
        found: 7,
        expected: 1,
    };

    assert_eq!(err.to_string(), "unsupported manifest version 7 (expected 1)");
}
