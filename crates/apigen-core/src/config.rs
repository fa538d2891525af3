//! Generator configuration

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`GeneratorConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "apigen.toml";

/// Settings that shape what the extractor recognises and what the emitter writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Doc-comment marker that flags a method as an endpoint
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Attribute name carrying a field's validation tag
    #[serde(default = "default_tag_key")]
    pub tag_key: String,

    /// Header checked by auth-gated wrappers
    #[serde(default = "default_auth_header")]
    pub auth_header: String,

    /// Shared secret the auth header must equal
    #[serde(default = "default_auth_token")]
    pub auth_token: String,

    /// Path glob-imported so generated code sees the annotated types
    #[serde(default = "default_types_path")]
    pub types_path: String,

    /// Path of the runtime crate used by generated code
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
}

fn default_marker() -> String {
    "apigen:api".to_string()
}

fn default_tag_key() -> String {
    "apivalidator".to_string()
}

fn default_auth_header() -> String {
    "X-Auth".to_string()
}

fn default_auth_token() -> String {
    "100500".to_string()
}

fn default_types_path() -> String {
    "super".to_string()
}

fn default_runtime_path() -> String {
    "::apigen".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            tag_key: default_tag_key(),
            auth_header: default_auth_header(),
            auth_token: default_auth_token(),
            types_path: default_types_path(),
            runtime_path: default_runtime_path(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).map_err(|e| GenError::Config(format!("invalid config: {e}")))
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|error| GenError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `apigen.toml` from `dir` if it exists, otherwise use defaults
    pub fn discover(dir: impl AsRef<Path>) -> GenResult<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Set the glob-imported types path
    pub fn with_types_path(mut self, path: impl Into<String>) -> Self {
        self.types_path = path.into();
        self
    }

    /// Set the runtime crate path
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Set the credential header and its expected value
    pub fn with_auth(mut self, header: impl Into<String>, token: impl Into<String>) -> Self {
        self.auth_header = header.into();
        self.auth_token = token.into();
        self
    }
}
