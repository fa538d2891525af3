//! Descriptor model shared by the extractor and the emitter.
//!
//! Everything the emitter needs is carried by an [`ApiManifest`]: the list of
//! [`EndpointDescriptor`]s and the list of [`ValidatedStruct`]s, both in
//! declaration order. A manifest is either produced by scanning a source unit
//! or loaded from a TOML/JSON file; [`ApiManifest::validate`] holds both
//! producers to the same rules.

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Current manifest schema version
pub const MANIFEST_VERSION: u32 = 1;

/// Metadata for one HTTP-reachable business method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointDescriptor {
    /// Type that owns the method (the `impl` self type)
    pub receiver_type: String,

    /// Business method name; the wrapper is named after it
    pub method_name: String,

    /// Exact request path the router dispatches on
    pub url_path: String,

    /// Required HTTP method; empty accepts any method
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub http_method: String,

    /// Whether the credential header is checked
    #[serde(default)]
    pub requires_auth: bool,

    /// Type of the parameter argument, resolved against validated structs
    pub param_type_name: String,
}

impl EndpointDescriptor {
    /// Unique key within a manifest: receiver and method name
    pub fn key(&self) -> (&str, &str) {
        (&self.receiver_type, &self.method_name)
    }

    /// True when no HTTP method gate is generated
    pub fn accepts_any_method(&self) -> bool {
        self.http_method.is_empty()
    }
}

/// A parameter struct whose fields carry validation tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatedStruct {
    /// Struct identifier
    pub name: String,

    /// Whether the struct also declares fields without a tag
    #[serde(default)]
    pub has_untagged_fields: bool,

    /// Tagged fields in declaration order
    pub fields: Vec<FieldRule>,
}

/// Integer primitive a validated field may be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntKind {
    const ALL: [IntKind; 10] = [
        IntKind::I8,
        IntKind::I16,
        IntKind::I32,
        IntKind::I64,
        IntKind::Isize,
        IntKind::U8,
        IntKind::U16,
        IntKind::U32,
        IntKind::U64,
        IntKind::Usize,
    ];

    /// Rust spelling of the type
    pub fn as_str(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::Usize => "usize",
        }
    }

    /// Look up a kind by its Rust spelling
    pub fn from_name(name: &str) -> Option<IntKind> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Inclusive value range.
    ///
    /// `isize`/`usize` use their 64-bit range; generated code is compiled for
    /// the target, which rejects out-of-range literals there.
    pub fn range(self) -> (i128, i128) {
        match self {
            IntKind::I8 => (i8::MIN.into(), i8::MAX.into()),
            IntKind::I16 => (i16::MIN.into(), i16::MAX.into()),
            IntKind::I32 => (i32::MIN.into(), i32::MAX.into()),
            IntKind::I64 | IntKind::Isize => (i64::MIN.into(), i64::MAX.into()),
            IntKind::U8 => (0, u8::MAX.into()),
            IntKind::U16 => (0, u16::MAX.into()),
            IntKind::U32 => (0, u32::MAX.into()),
            IntKind::U64 | IntKind::Usize => (0, u64::MAX.into()),
        }
    }

    /// Whether `value` fits this kind
    pub fn contains(self, value: i128) -> bool {
        let (lo, hi) = self.range();
        (lo..=hi).contains(&value)
    }
}

/// Type of a validated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    /// Integer field, decoded with `str::parse`
    Int(IntKind),

    /// `String` field, taken verbatim
    String,
}

impl FieldType {
    /// Resolve a plain type identifier
    pub fn from_ident(ident: &str) -> Option<FieldType> {
        if ident == "String" {
            return Some(FieldType::String);
        }
        IntKind::from_name(ident).map(FieldType::Int)
    }

    pub fn is_int(self) -> bool {
        matches!(self, FieldType::Int(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int(kind) => f.write_str(kind.as_str()),
            FieldType::String => f.write_str("String"),
        }
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.to_string()
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldType::from_ident(&value).ok_or_else(|| format!("unsupported field type `{value}`"))
    }
}

/// Compiled constraints for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
    /// Rust field name
    pub field_name: String,

    /// Declared field type
    pub field_type: FieldType,

    /// Query/form parameter the value is read from
    pub param_name: String,

    /// Empty input (after defaulting) is an error
    #[serde(default)]
    pub required: bool,

    /// Substituted when the raw input is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Lower bound: value for Int, character length for String
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    /// Upper bound: value for Int, character length for String
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    /// Allowed values, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl FieldRule {
    /// Rule with no constraints and the default parameter name
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        let field_name = field_name.into();
        Self {
            param_name: field_name.to_lowercase(),
            field_name,
            field_type,
            required: false,
            default_value: None,
            min: None,
            max: None,
            enum_values: None,
        }
    }
}

/// The full descriptor set for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiManifest {
    /// Schema version, see [`MANIFEST_VERSION`]
    pub version: u32,

    /// Endpoints in declaration order
    #[serde(default)]
    pub endpoints: Vec<EndpointDescriptor>,

    /// Validated structs in declaration order
    #[serde(default)]
    pub structs: Vec<ValidatedStruct>,
}

impl ApiManifest {
    /// Create a manifest at the current schema version
    pub fn new(endpoints: Vec<EndpointDescriptor>, structs: Vec<ValidatedStruct>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            endpoints,
            structs,
        }
    }

    /// Parse and validate a TOML manifest
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        let manifest: ApiManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a JSON manifest
    pub fn from_json_str(content: &str) -> GenResult<Self> {
        let manifest: ApiManifest = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn to_toml_string(&self) -> GenResult<String> {
        toml::to_string_pretty(self).map_err(|e| GenError::Manifest(e.to_string()))
    }

    pub fn to_json_string(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Receiver types in first-seen order
    pub fn receivers(&self) -> Vec<&str> {
        let mut receivers: Vec<&str> = Vec::new();
        for endpoint in &self.endpoints {
            if !receivers.contains(&endpoint.receiver_type.as_str()) {
                receivers.push(&endpoint.receiver_type);
            }
        }
        receivers
    }

    /// Endpoints of one receiver, in declaration order
    pub fn endpoints_for<'a>(
        &'a self,
        receiver: &'a str,
    ) -> impl Iterator<Item = &'a EndpointDescriptor> + 'a {
        self.endpoints
            .iter()
            .filter(move |e| e.receiver_type == receiver)
    }

    pub fn find_struct(&self, name: &str) -> Option<&ValidatedStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Check the cross-descriptor invariants.
    ///
    /// - the schema version is supported
    /// - `receiver + method` is unique
    /// - struct names are unique
    /// - no two endpoints of a receiver share a path
    /// - every parameter type names a validated struct
    /// - every field rule is internally consistent
    pub fn validate(&self) -> GenResult<()> {
        if self.version != MANIFEST_VERSION {
            return Err(GenError::UnsupportedVersion {
                found: self.version,
                expected: MANIFEST_VERSION,
            });
        }

        let mut seen_structs: Vec<&str> = Vec::new();
        for s in &self.structs {
            if seen_structs.contains(&s.name.as_str()) {
                return Err(GenError::DuplicateStruct(s.name.clone()));
            }
            seen_structs.push(&s.name);

            for field in &s.fields {
                crate::rules::check(field).map_err(|reason| GenError::InvalidRule {
                    struct_name: s.name.clone(),
                    field: field.field_name.clone(),
                    reason,
                })?;
            }
        }

        let mut keys: HashSet<(&str, &str)> = HashSet::new();
        let mut routes: HashMap<(&str, &str), &str> = HashMap::new();
        for endpoint in &self.endpoints {
            if !keys.insert(endpoint.key()) {
                return Err(GenError::DuplicateEndpoint {
                    receiver: endpoint.receiver_type.clone(),
                    method: endpoint.method_name.clone(),
                });
            }

            let route = (endpoint.receiver_type.as_str(), endpoint.url_path.as_str());
            if let Some(first) = routes.insert(route, &endpoint.method_name) {
                return Err(GenError::DuplicateRoute {
                    receiver: endpoint.receiver_type.clone(),
                    url: endpoint.url_path.clone(),
                    first: first.to_string(),
                    second: endpoint.method_name.clone(),
                });
            }

            if self.find_struct(&endpoint.param_type_name).is_none() {
                return Err(GenError::UnknownParamType {
                    receiver: endpoint.receiver_type.clone(),
                    method: endpoint.method_name.clone(),
                    param_type: endpoint.param_type_name.clone(),
                });
            }
        }

        Ok(())
    }
}
