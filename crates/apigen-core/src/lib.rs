//! apigen-core - Descriptor model, rule compiler, and configuration
//!
//! This crate provides the types shared by the generator and its front ends:
//! - [`ApiManifest`] with [`EndpointDescriptor`] and [`ValidatedStruct`] descriptors
//! - [`rules`] for compiling field tags into [`FieldRule`]s
//! - [`GenError`] for fatal generation errors
//! - [`GeneratorConfig`] for marker, tag, credential, and path settings

mod config;
mod error;
mod model;
pub mod rules;

pub use config::{CONFIG_FILE_NAME, GeneratorConfig};
pub use error::{GenError, GenResult, RuleError};
pub use model::{
    ApiManifest, EndpointDescriptor, FieldRule, FieldType, IntKind, MANIFEST_VERSION,
    ValidatedStruct,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiManifest, EndpointDescriptor, FieldRule, FieldType, GenError, GenResult,
        GeneratorConfig, IntKind, ValidatedStruct,
    };
}
