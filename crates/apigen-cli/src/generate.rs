//! Generate command implementation

use anyhow::{Context, Result};
use apigen_codegen::{generate_file, generate_manifest, render_manifest_file, render_source_file};
use apigen_core::GeneratorConfig;
use std::path::Path;

/// Generate handlers from annotated source
pub fn from_source(source: &Path, output: Option<&Path>, config: &GeneratorConfig) -> Result<()> {
    match output {
        Some(output) => {
            let manifest = generate_file(source, output, config)
                .with_context(|| format!("Failed to generate from {}", source.display()))?;
            eprintln!(
                "✓ Generated {} endpoint(s) and {} validator(s) into {}",
                manifest.endpoints.len(),
                manifest.structs.len(),
                output.display()
            );
        }
        None => {
            let (_, code) = render_source_file(source, config)
                .with_context(|| format!("Failed to generate from {}", source.display()))?;
            print!("{code}");
        }
    }
    Ok(())
}

/// Generate handlers from a TOML or JSON manifest
pub fn from_manifest(
    manifest: &Path,
    output: Option<&Path>,
    config: &GeneratorConfig,
) -> Result<()> {
    match output {
        Some(output) => {
            let loaded = generate_manifest(manifest, output, config)
                .with_context(|| format!("Failed to generate from {}", manifest.display()))?;
            eprintln!(
                "✓ Generated {} endpoint(s) and {} validator(s) into {}",
                loaded.endpoints.len(),
                loaded.structs.len(),
                output.display()
            );
        }
        None => {
            let (_, code) = render_manifest_file(manifest, config)
                .with_context(|| format!("Failed to generate from {}", manifest.display()))?;
            print!("{code}");
        }
    }
    Ok(())
}
