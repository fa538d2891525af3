//! Configuration lookup for CLI commands

use anyhow::{Context, Result};
use apigen_core::GeneratorConfig;
use std::path::Path;

/// Load the configuration for a run.
///
/// An explicit `--config` wins; otherwise `apigen.toml` is looked up in the
/// input's directory, falling back to defaults.
pub fn resolve(explicit: Option<&Path>, input: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = explicit {
        tracing::debug!(config = %path.display(), "loading configuration");
        return GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    let dir = input
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    GeneratorConfig::discover(dir)
        .with_context(|| format!("Failed to load config from {}", dir.display()))
}

/// Apply `--types-path` / `--runtime-path` on top of a loaded configuration
pub fn with_overrides(
    config: GeneratorConfig,
    types_path: Option<String>,
    runtime_path: Option<String>,
) -> GeneratorConfig {
    let config = match types_path {
        Some(path) => config.with_types_path(path),
        None => config,
    };
    match runtime_path {
        Some(path) => config.with_runtime_path(path),
        None => config,
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
