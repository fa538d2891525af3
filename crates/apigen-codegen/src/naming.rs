//! Identifier helpers for generated code.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `r#type` | [`unraw`] | `type` |
//! | `profile` | [`wrapper_name`] | `wrapper_profile` |
//! | `login` | [`field_local`] | `field_login` |
//! | `age` | [`raw_local`] | `raw_age` |

use apigen_core::{GenError, GenResult};
use proc_macro2::Ident;

/// Strip the `r#` prefix of a raw identifier.
///
/// ```
/// use apigen_codegen::naming::unraw;
///
/// assert_eq!(unraw("r#type"), "type");
/// assert_eq!(unraw("login"), "login");
/// ```
pub fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Name of the generated wrapper for a business method
pub fn wrapper_name(method: &str) -> String {
    format!("wrapper_{}", unraw(method))
}

/// Local binding holding a field's decoded value
pub fn field_local(field: &str) -> String {
    format!("field_{}", unraw(field))
}

/// Local binding holding a field's raw input
pub fn raw_local(field: &str) -> String {
    format!("raw_{}", unraw(field))
}

/// Parse `name` as an identifier, accepting `r#` raw identifiers.
///
/// Descriptor names loaded from a manifest are not checked by the Rust
/// parser, so this is where a bad name surfaces.
pub fn ident(name: &str) -> GenResult<Ident> {
    syn::parse_str::<Ident>(name)
        .map_err(|_| GenError::Config(format!("`{name}` is not a valid Rust identifier")))
}

/// Parse `path` as a Rust path such as `super` or `::apigen`
pub fn path(path: &str) -> GenResult<syn::Path> {
    syn::parse_str::<syn::Path>(path)
        .map_err(|_| GenError::Config(format!("`{path}` is not a valid Rust path")))
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
