//! apigen-codegen - Endpoint extraction and handler generation
//!
//! The generator is a two-stage pipeline:
//!
//! ```text
//! Rust source ──[extract]──→ ApiManifest ──[emit]──→ generated Rust
//!                                 ↑
//!                     api.toml / api.json
//! ```
//!
//! A manifest can come from scanning annotated source ([`extract_source`]) or
//! from a file ([`load_manifest`]); the emitter does not know which.
//!
//! # Build script usage
//!
//! ```rust,no_run
//! // build.rs
//! use apigen_codegen::generate_file;
//! use apigen_core::GeneratorConfig;
//! use std::path::PathBuf;
//!
//! let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("api_gen.rs");
//! generate_file("src/api.rs", &out, &GeneratorConfig::default()).unwrap();
//! println!("cargo:rerun-if-changed=src/api.rs");
//! ```

pub mod emit;
pub mod extract;
pub mod naming;

pub use emit::render;
pub use extract::{extract, extract_source};

use apigen_core::{ApiManifest, GenError, GenResult, GeneratorConfig};
use std::path::Path;

/// Scan `source` and render the generated file for it
pub fn generate_source(
    source: &str,
    source_name: &str,
    config: &GeneratorConfig,
) -> GenResult<String> {
    let manifest = extract_source(source, config)?;
    render(&manifest, source_name, config)
}

/// Read a source file and render the generated file for it.
///
/// Returns the manifest the code was rendered from along with the code.
pub fn render_source_file(
    input: impl AsRef<Path>,
    config: &GeneratorConfig,
) -> GenResult<(ApiManifest, String)> {
    let input = input.as_ref();
    let source = read(input)?;
    let manifest = extract_source(&source, config)?;
    let code = render(&manifest, &source_name(input), config)?;
    Ok((manifest, code))
}

/// Read a source file, generate, and write the result to `output`.
///
/// Nothing is written unless generation succeeds. Returns the manifest the
/// output was rendered from.
pub fn generate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &GeneratorConfig,
) -> GenResult<ApiManifest> {
    let input = input.as_ref();
    let output = output.as_ref();

    let (manifest, code) = render_source_file(input, config)?;
    write(output, &code)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        endpoints = manifest.endpoints.len(),
        structs = manifest.structs.len(),
        "generated handlers"
    );

    Ok(manifest)
}

/// Load a TOML or JSON manifest; the format follows the file extension
pub fn load_manifest(path: impl AsRef<Path>) -> GenResult<ApiManifest> {
    let path = path.as_ref();
    let content = read(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ApiManifest::from_json_str(&content),
        _ => ApiManifest::from_toml_str(&content),
    }
}

/// Load a manifest file and render the generated file for it
pub fn render_manifest_file(
    manifest_path: impl AsRef<Path>,
    config: &GeneratorConfig,
) -> GenResult<(ApiManifest, String)> {
    let manifest_path = manifest_path.as_ref();
    let manifest = load_manifest(manifest_path)?;
    let code = render(&manifest, &source_name(manifest_path), config)?;
    Ok((manifest, code))
}

/// Render a manifest file and write the result to `output`
pub fn generate_manifest(
    manifest_path: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &GeneratorConfig,
) -> GenResult<ApiManifest> {
    let manifest_path = manifest_path.as_ref();
    let output = output.as_ref();

    let (manifest, code) = render_manifest_file(manifest_path, config)?;
    write(output, &code)?;

    tracing::info!(
        manifest = %manifest_path.display(),
        output = %output.display(),
        "generated handlers from manifest"
    );

    Ok(manifest)
}

/// Name recorded in the generated header: the file name only, so output does
/// not depend on where the build runs
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read(path: &Path) -> GenResult<String> {
    std::fs::read_to_string(path).map_err(|error| GenError::Io {
        path: path.to_path_buf(),
        error,
    })
}

fn write(path: &Path, content: &str) -> GenResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| GenError::Io {
            path: parent.to_path_buf(),
            error,
        })?;
    }
    std::fs::write(path, content).map_err(|error| GenError::Io {
        path: path.to_path_buf(),
        error,
    })
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        generate_file, generate_manifest, generate_source, load_manifest, render,
        render_manifest_file, render_source_file,
    };
    pub use apigen_core::prelude::*;
}
