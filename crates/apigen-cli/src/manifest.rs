//! Manifest and check command implementations

use crate::ManifestFormat;
use anyhow::{Context, Result};
use apigen_codegen::extract_source;
use apigen_core::{ApiManifest, GeneratorConfig};
use std::path::Path;

/// Extract and validate a source file
pub fn extract(source: &Path, config: &GeneratorConfig) -> Result<ApiManifest> {
    let content = std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read source: {}", source.display()))?;
    extract_source(&content, config)
        .with_context(|| format!("Failed to extract endpoints from {}", source.display()))
}

/// Serialize a manifest in the requested format
pub fn serialize(manifest: &ApiManifest, format: ManifestFormat) -> Result<String> {
    let text = match format {
        ManifestFormat::Toml => manifest.to_toml_string()?,
        ManifestFormat::Json => manifest.to_json_string()? + "\n",
    };
    Ok(text)
}

/// Manifest command implementation
pub fn write(
    source: &Path,
    output: Option<&Path>,
    format: ManifestFormat,
    config: &GeneratorConfig,
) -> Result<()> {
    let manifest = extract(source, config)?;
    let text = serialize(&manifest, format)?;

    match output {
        Some(output) => {
            std::fs::write(output, text)
                .with_context(|| format!("Failed to write manifest: {}", output.display()))?;
            eprintln!("✓ Wrote manifest to {}", output.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Check command implementation
pub fn check(source: &Path, config: &GeneratorConfig) -> Result<()> {
    println!("Checking source: {}", source.display());

    let manifest = extract(source, config)?;

    println!("✓ Source is valid");
    for receiver in manifest.receivers() {
        println!("  {receiver}:");
        for endpoint in manifest.endpoints_for(receiver) {
            let method = if endpoint.accepts_any_method() {
                "*"
            } else {
                endpoint.http_method.as_str()
            };
            let auth = if endpoint.requires_auth { " (auth)" } else { "" };
            println!(
                "    {method} {} -> {}{auth}",
                endpoint.url_path, endpoint.method_name
            );
        }
    }
    println!("  Validated structs: {}", manifest.structs.len());

    Ok(())
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
