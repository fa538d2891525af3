#![allow(non_snake_case)]

use super::*;
use crate::model::IntKind;

const INT: FieldType = FieldType::Int(IntKind::I64);

// tokenize tests

#[test]
fn tokenize___mixed_tokens___splits_keys_and_values() {
    let tokens: Vec<_> = tokenize("required,paramname=user_login").collect();

    assert_eq!(
        tokens,
        vec![
            RuleToken {
                key: "required",
                value: None
            },
            RuleToken {
                key: "paramname",
                value: Some("user_login")
            },
        ]
    );
}

#[test]
fn tokenize___whitespace_and_empty_tokens___are_trimmed_and_dropped() {
    let tokens: Vec<_> = tokenize(" required , ,min = 3,").collect();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].key, "min");
    assert_eq!(tokens[1].value, Some("3"));
}

#[test]
fn tokenize___empty_tag___yields_nothing() {
    assert_eq!(tokenize("").count(), 0);
}

// compile tests

#[test]
fn compile___no_paramname___defaults_to_lowercased_field() {
    let rule = compile("Login", FieldType::String, "required").unwrap();

    assert_eq!(rule.param_name, "login");
    assert!(rule.required);
}

#[test]
fn compile___paramname___overrides_default() {
    let rule = compile("login", FieldType::String, "required,paramname=user_login").unwrap();

    assert_eq!(rule.param_name, "user_login");
}

#[test]
fn compile___all_keys___fills_every_constraint() {
    let rule = compile(
        "status",
        FieldType::String,
        "enum=user|moderator|admin,default=user,min=2,max=10",
    )
    .unwrap();

    assert_eq!(
        rule.enum_values,
        Some(vec![
            "user".to_string(),
            "moderator".to_string(),
            "admin".to_string()
        ])
    );
    assert_eq!(rule.default_value.as_deref(), Some("user"));
    assert_eq!(rule.min, Some(2));
    assert_eq!(rule.max, Some(10));
    assert!(!rule.required);
}

#[test]
fn compile___repeated_key___last_occurrence_wins() {
    let rule = compile("age", INT, "min=1,max=50,min=5").unwrap();

    assert_eq!(rule.min, Some(5));
}

#[test]
fn compile___unknown_key___is_ignored() {
    let rule = compile("age", INT, "required,nullable,pattern=x").unwrap();

    assert!(rule.required);
    assert_eq!(rule, {
        let mut expected = FieldRule::new("age", INT);
        expected.required = true;
        expected
    });
}

#[test]
fn compile___min_without_value___is_rejected() {
    let err = compile("age", INT, "min").unwrap_err();

    assert_eq!(err, RuleError::MissingValue { key: "min".into() });
}

#[test]
fn compile___non_integer_bound___is_rejected() {
    let err = compile("age", INT, "max=lots").unwrap_err();

    assert_eq!(
        err,
        RuleError::NotAnInteger {
            key: "max".into(),
            value: "lots".into()
        }
    );
}

#[test]
fn compile___empty_enum___is_rejected() {
    assert_eq!(
        compile("role", FieldType::String, "enum=").unwrap_err(),
        RuleError::EmptyEnum
    );
    assert_eq!(
        compile("role", FieldType::String, "enum").unwrap_err(),
        RuleError::EmptyEnum
    );
}

#[test]
fn compile___min_greater_than_max___is_rejected() {
    let err = compile("age", INT, "min=10,max=2").unwrap_err();

    assert_eq!(err, RuleError::InvertedBounds { min: 10, max: 2 });
}

#[test]
fn compile___negative_string_length___is_rejected() {
    let err = compile("name", FieldType::String, "min=-1").unwrap_err();

    assert!(matches!(err, RuleError::OutOfRange { ref key, .. } if key == "min"));
}

#[test]
fn compile___bound_outside_int_kind___is_rejected() {
    let err = compile("level", FieldType::Int(IntKind::U8), "max=300").unwrap_err();

    assert_eq!(
        err,
        RuleError::OutOfRange {
            key: "max".into(),
            value: "300".into(),
            kind: "u8".into()
        }
    );
}

#[test]
fn compile___int_default_not_a_number___is_rejected() {
    let err = compile("age", INT, "default=old").unwrap_err();

    assert!(matches!(err, RuleError::NotAnInteger { ref key, .. } if key == "default"));
}

#[test]
fn compile___string_default___is_kept_verbatim() {
    let rule = compile("name", FieldType::String, "default=anonymous").unwrap();

    assert_eq!(rule.default_value.as_deref(), Some("anonymous"));
}

#[test]
fn compile___enum_value_with_equals___keeps_remainder() {
    let rule = compile("expr", FieldType::String, "enum=a=b|c").unwrap();

    assert_eq!(
        rule.enum_values,
        Some(vec!["a=b".to_string(), "c".to_string()])
    );
}

// CHECK_ORDER tests

#[test]
fn CHECK_ORDER___default_runs_before_required() {
    let default = CHECK_ORDER.iter().position(|c| *c == Check::Default);
    let required = CHECK_ORDER.iter().position(|c| *c == Check::Required);

    assert!(default < required);
}

#[test]
fn CHECK_ORDER___decode_runs_first() {
    assert_eq!(CHECK_ORDER[0], Check::Decode);
}

#[test]
fn Check___applies_to___follows_rule_contents() {
    let rule = compile("age", INT, "required,max=5").unwrap();

    let applied: Vec<Check> = CHECK_ORDER
        .into_iter()
        .filter(|c| c.applies_to(&rule))
        .collect();

    assert_eq!(applied, vec![Check::Decode, Check::Required, Check::Max]);
}
