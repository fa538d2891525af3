//! Field tag grammar and rule compilation.
//!
//! A tag is a comma-separated list of `key` or `key=value` tokens:
//!
//! ```text
//! required,paramname=user_login,min=3,max=32,enum=user|moderator|admin,default=user
//! ```
//!
//! Compilation is a single left-to-right fold, so a repeated key keeps its
//! last value. Unknown keys are skipped. The order the generated checks run
//! in does not depend on token order; see [`CHECK_ORDER`].

use crate::error::RuleError;
use crate::model::{FieldRule, FieldType};

/// Order in which generated decoders apply a field's checks.
pub const CHECK_ORDER: [Check; 6] = [
    Check::Decode,
    Check::Default,
    Check::Required,
    Check::Min,
    Check::Max,
    Check::Enum,
];

/// One step of a generated field decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Read the raw value and convert it to the field type
    Decode,
    /// Substitute the default when the raw value is empty
    Default,
    /// Reject a value that is still empty
    Required,
    /// Lower bound (value for Int, length for String)
    Min,
    /// Upper bound (value for Int, length for String)
    Max,
    /// Membership in the allowed set
    Enum,
}

impl Check {
    /// Whether `rule` generates code for this step
    pub fn applies_to(self, rule: &FieldRule) -> bool {
        match self {
            Check::Decode => true,
            Check::Default => rule.default_value.is_some(),
            Check::Required => rule.required,
            Check::Min => rule.min.is_some(),
            Check::Max => rule.max.is_some(),
            Check::Enum => rule.enum_values.is_some(),
        }
    }
}

/// A single `key` or `key=value` token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToken<'a> {
    pub key: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> RuleToken<'a> {
    fn require_value(&self) -> Result<&'a str, RuleError> {
        match self.value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(RuleError::MissingValue {
                key: self.key.to_string(),
            }),
        }
    }
}

/// Split a tag into tokens. Empty tokens (`a,,b`) are dropped.
pub fn tokenize(tag: &str) -> impl Iterator<Item = RuleToken<'_>> {
    tag.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match t.split_once('=') {
            Some((key, value)) => RuleToken {
                key: key.trim(),
                value: Some(value.trim()),
            },
            None => RuleToken {
                key: t,
                value: None,
            },
        })
}

/// Compile a field tag into a [`FieldRule`].
pub fn compile(field_name: &str, field_type: FieldType, tag: &str) -> Result<FieldRule, RuleError> {
    let rule = tokenize(tag).try_fold(FieldRule::new(field_name, field_type), apply)?;
    check(&rule)?;
    Ok(rule)
}

fn apply(mut rule: FieldRule, token: RuleToken<'_>) -> Result<FieldRule, RuleError> {
    match token.key {
        "required" => rule.required = true,
        "paramname" => rule.param_name = token.require_value()?.to_string(),
        "min" => rule.min = Some(parse_bound(&token)?),
        "max" => rule.max = Some(parse_bound(&token)?),
        "enum" => {
            let value = token.value.ok_or(RuleError::EmptyEnum)?;
            if value.is_empty() {
                return Err(RuleError::EmptyEnum);
            }
            rule.enum_values = Some(value.split('|').map(String::from).collect());
        }
        "default" => rule.default_value = Some(token.require_value()?.to_string()),
        _ => {}
    }
    Ok(rule)
}

fn parse_bound(token: &RuleToken<'_>) -> Result<i64, RuleError> {
    let value = token.require_value()?;
    value.parse().map_err(|_| RuleError::NotAnInteger {
        key: token.key.to_string(),
        value: value.to_string(),
    })
}

/// Check a compiled (or deserialized) rule for internal consistency.
pub fn check(rule: &FieldRule) -> Result<(), RuleError> {
    if rule.param_name.is_empty() {
        return Err(RuleError::MissingValue {
            key: "paramname".into(),
        });
    }

    if let Some(values) = &rule.enum_values {
        if values.is_empty() {
            return Err(RuleError::EmptyEnum);
        }
    }

    for (key, bound) in [("min", rule.min), ("max", rule.max)] {
        let Some(bound) = bound else { continue };
        let fits = match rule.field_type {
            FieldType::Int(kind) => kind.contains(bound.into()),
            FieldType::String => bound >= 0,
        };
        if !fits {
            return Err(RuleError::OutOfRange {
                key: key.into(),
                value: bound.to_string(),
                kind: bound_kind(rule.field_type),
            });
        }
    }

    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        if min > max {
            return Err(RuleError::InvertedBounds { min, max });
        }
    }

    if let (FieldType::Int(kind), Some(default)) = (rule.field_type, &rule.default_value) {
        let value: i128 = default.parse().map_err(|_| RuleError::NotAnInteger {
            key: "default".into(),
            value: default.clone(),
        })?;
        if !kind.contains(value) {
            return Err(RuleError::OutOfRange {
                key: "default".into(),
                value: default.clone(),
                kind: kind.as_str().into(),
            });
        }
    }

    Ok(())
}

fn bound_kind(ty: FieldType) -> String {
    match ty {
        FieldType::Int(kind) => kind.as_str().to_string(),
        FieldType::String => "String length".to_string(),
    }
}

#[cfg(test)]
#[path = "rules/rules_tests.rs"]
mod rules_tests;

#[cfg(test)]
#[path = "rules/rules_parameterized_tests.rs"]
mod rules_parameterized_tests;
