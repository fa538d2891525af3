#![allow(non_snake_case)]

use super::*;
use crate::model::IntKind;
use proptest::prelude::*;
use test_case::test_case;

// ============================================================================
// Parameterized tag compilation
// ============================================================================

#[test_case("required", true, None, None; "required only")]
#[test_case("min=0,max=150", false, Some(0), Some(150); "both bounds")]
#[test_case("max=150,min=0", false, Some(0), Some(150); "bounds reversed in tag")]
#[test_case("required,min=-5", true, Some(-5), None; "negative int bound")]
#[test_case("min=3,min=4,max=9,max=8", false, Some(4), Some(8); "last wins twice")]
fn compile___int_tag___fills_bounds(
    tag: &str,
    required: bool,
    min: Option<i64>,
    max: Option<i64>,
) {
    let rule = compile("age", FieldType::Int(IntKind::I32), tag).unwrap();

    assert_eq!(rule.required, required);
    assert_eq!(rule.min, min);
    assert_eq!(rule.max, max);
}

#[test_case(IntKind::I8, "-128", true)]
#[test_case(IntKind::I8, "-129", false)]
#[test_case(IntKind::U8, "255", true)]
#[test_case(IntKind::U8, "-1", false)]
#[test_case(IntKind::U64, "18446744073709551615", true)]
#[test_case(IntKind::I64, "9223372036854775808", false)]
fn compile___int_default___checked_against_kind(kind: IntKind, default: &str, ok: bool) {
    let tag = format!("default={default}");

    let result = compile("n", FieldType::Int(kind), &tag);

    assert_eq!(result.is_ok(), ok, "{kind:?} default={default}");
}

#[test_case("paramname")]
#[test_case("paramname=")]
#[test_case("default")]
#[test_case("max=")]
fn compile___value_key_without_value___is_missing_value(tag: &str) {
    let err = compile("f", FieldType::String, tag).unwrap_err();

    assert!(matches!(err, RuleError::MissingValue { .. }), "{tag}: {err}");
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Token order never changes the compiled rule when keys are distinct.
    #[test]
    fn compile___distinct_keys___are_order_independent(
        min in 0i64..50,
        span in 0i64..50,
        default in "[a-z]{1,8}",
        swap in any::<bool>(),
    ) {
        let max = min + span;
        let a = format!("required,min={min},max={max},default={default}");
        let b = if swap {
            format!("default={default},max={max},required,min={min}")
        } else {
            format!("max={max},default={default},min={min},required")
        };

        let rule_a = compile("name", FieldType::String, &a).unwrap();
        let rule_b = compile("name", FieldType::String, &b).unwrap();

        prop_assert_eq!(rule_a, rule_b);
    }

    /// The last `paramname` always wins.
    #[test]
    fn compile___repeated_paramname___keeps_last(
        names in proptest::collection::vec("[a-z_]{1,12}", 1..5),
    ) {
        let tag = names
            .iter()
            .map(|n| format!("paramname={n}"))
            .collect::<Vec<_>>()
            .join(",");

        let rule = compile("field", FieldType::String, &tag).unwrap();

        prop_assert_eq!(&rule.param_name, names.last().unwrap());
    }
}
