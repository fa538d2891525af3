#![allow(non_snake_case)]

use super::*;

#[test]
fn wrapper_name___prefixes_method() {
    assert_eq!(wrapper_name("profile"), "wrapper_profile");
    assert_eq!(wrapper_name("r#match"), "wrapper_match");
}

#[test]
fn field_local___strips_raw_prefix() {
    assert_eq!(field_local("r#type"), "field_type");
    assert_eq!(raw_local("age"), "raw_age");
}

#[test]
fn ident___accepts_plain_and_raw_names() {
    assert_eq!(ident("login").unwrap().to_string(), "login");
    assert_eq!(ident("r#type").unwrap().to_string(), "r#type");
}

#[test]
fn ident___rejects_invalid_names() {
    assert!(matches!(ident("user-login"), Err(GenError::Config(_))));
    assert!(matches!(ident("type"), Err(GenError::Config(_))));
    assert!(matches!(ident(""), Err(GenError::Config(_))));
}

#[test]
fn path___parses_relative_and_absolute_paths() {
    assert!(path("super").is_ok());
    assert!(path("crate::api").is_ok());
    assert!(path("::apigen").is_ok());
    assert!(matches!(path("not a path"), Err(GenError::Config(_))));
}
