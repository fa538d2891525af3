//! Code emission from an [`ApiManifest`].
//!
//! The emitter produces one Rust file holding three families of items:
//!
//! ```text
//! ApiManifest
//!     ├─→ [validator] → impl FromParams for <Struct>     (one per struct)
//!     ├─→ [wrapper]   → impl <Receiver> { wrapper_* }    (one block per receiver)
//!     └─→ [router]    → impl Handler for <Receiver>      (one per receiver)
//! ```
//!
//! Items come out in manifest order, and the manifest keeps declaration
//! order, so the same input always renders the same text.
//!
//! The file is meant to be pulled into a child module of the one declaring
//! the types, with `include!`:
//!
//! ```rust,ignore
//! mod generated {
//!     include!(concat!(env!("OUT_DIR"), "/api_gen.rs"));
//! }
//! ```
//!
//! so it carries no inner attributes and names the types through a single
//! glob import of [`GeneratorConfig::types_path`].

pub mod router;
pub mod validator;
pub mod wrapper;

use crate::naming;
use apigen_core::{ApiManifest, EndpointDescriptor, GenError, GenResult, GeneratorConfig};
use quote::quote;

/// Header line marking the file as generated
pub const GENERATED_HEADER: &str = "// Code generated by apigen. DO NOT EDIT.";

/// Render the generated file for `manifest`.
///
/// `source_name` is recorded in the header comment only.
pub fn render(
    manifest: &ApiManifest,
    source_name: &str,
    config: &GeneratorConfig,
) -> GenResult<String> {
    manifest.validate()?;

    let rt = naming::path(&config.runtime_path)?;
    let types = naming::path(&config.types_path)?;

    let mut items = vec![quote! {
        #[allow(unused_imports)]
        use #types::*;
    }];

    for item in &manifest.structs {
        items.push(validator::emit_validator(item, &rt)?);
    }

    for receiver in manifest.receivers() {
        let endpoints: Vec<&EndpointDescriptor> = manifest.endpoints_for(receiver).collect();
        items.push(wrapper::emit_wrappers(receiver, &endpoints, &rt, config)?);
        items.push(router::emit_router(receiver, &endpoints, &rt)?);
    }

    let file: syn::File = syn::parse2(quote! { #(#items)* })
        .map_err(|e| GenError::Config(format!("generated code does not parse: {e}")))?;

    tracing::debug!(
        structs = manifest.structs.len(),
        receivers = manifest.receivers().len(),
        "rendered generated file"
    );

    Ok(format!(
        "{}{}",
        preamble(source_name),
        prettyplease::unparse(&file)
    ))
}

/// Header comment lines, followed by a blank line
pub fn preamble(source_name: &str) -> String {
    format!("{GENERATED_HEADER}\n// source: {source_name}\n\n")
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod emit_tests;
