//! Error types for code generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation steps
pub type GenResult<T> = Result<T, GenError>;

/// Fatal error raised while extracting metadata or emitting code.
///
/// None of these are retried: a generator run that hits one produces no output.
#[derive(Error, Debug)]
pub enum GenError {
    /// Reading the source unit or writing the generated unit failed
    #[error("I/O error on {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    /// The source unit is not valid Rust
    #[error("failed to parse source: {0}")]
    Parse(String),

    /// The payload following the endpoint marker did not decode
    #[error("malformed annotation on {receiver}::{method}: {reason}")]
    MalformedAnnotation {
        receiver: String,
        method: String,
        reason: String,
    },

    /// An annotated method does not have the `(&self, ctx, params)` shape
    #[error("unsupported signature for {receiver}::{method}: {reason}")]
    BadSignature {
        receiver: String,
        method: String,
        reason: String,
    },

    /// A tagged field has a type other than `String` or an integer primitive
    #[error("unsupported type `{ty}` for validated field {struct_name}.{field}")]
    UnsupportedFieldType {
        struct_name: String,
        field: String,
        ty: String,
    },

    /// A tag attribute is not of the `#[tag = "..."]` form
    #[error("malformed `{tag_key}` attribute on {struct_name}.{field}")]
    MalformedTag {
        struct_name: String,
        field: String,
        tag_key: String,
    },

    /// A field tag could not be compiled into a rule
    #[error("invalid rule on {struct_name}.{field}: {reason}")]
    InvalidRule {
        struct_name: String,
        field: String,
        reason: RuleError,
    },

    /// An endpoint names a parameter type with no validated struct
    #[error("endpoint {receiver}::{method} takes `{param_type}`, which has no validated fields")]
    UnknownParamType {
        receiver: String,
        method: String,
        param_type: String,
    },

    /// Two endpoints of one receiver are registered under the same path
    #[error("route `{url}` on {receiver} is claimed by both `{first}` and `{second}`")]
    DuplicateRoute {
        receiver: String,
        url: String,
        first: String,
        second: String,
    },

    /// Two endpoints share `receiver + method`
    #[error("endpoint {receiver}::{method} is declared twice")]
    DuplicateEndpoint { receiver: String, method: String },

    /// Two validated structs share a name
    #[error("validated struct `{0}` is declared twice")]
    DuplicateStruct(String),

    /// A manifest file could not be read or written
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Invalid settings, or a configured path or descriptor name that is not valid Rust
    #[error("configuration error: {0}")]
    Config(String),

    /// A manifest declares a schema version this build does not understand
    #[error("unsupported manifest version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Error produced by the rule compiler for a single field tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A value-carrying key was given without `=value`
    #[error("`{key}` requires a value")]
    MissingValue { key: String },

    /// `min` or `max` is not an integer
    #[error("`{key}={value}` is not an integer")]
    NotAnInteger { key: String, value: String },

    /// A bound or default does not fit the field's integer type
    #[error("`{value}` is out of range for {kind} in `{key}`")]
    OutOfRange {
        key: String,
        value: String,
        kind: String,
    },

    /// `enum=` with nothing after it
    #[error("`enum` requires at least one value")]
    EmptyEnum,

    /// `min` is greater than `max`
    #[error("min {min} is greater than max {max}")]
    InvertedBounds { min: i64, max: i64 },
}

impl From<toml::de::Error> for GenError {
    fn from(err: toml::de::Error) -> Self {
        GenError::Manifest(err.to_string())
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Manifest(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
