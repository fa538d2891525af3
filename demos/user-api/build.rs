//! Generates the handlers for `src/api.rs` into `OUT_DIR/api_gen.rs`.

use anyhow::Context;
use apigen_codegen::generate_file;
use apigen_core::{CONFIG_FILE_NAME, GeneratorConfig};
use std::path::PathBuf;

const API_SOURCE: &str = "src/api.rs";

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed={API_SOURCE}");
    println!("cargo:rerun-if-changed={CONFIG_FILE_NAME}");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
    let config = GeneratorConfig::discover(".").context("Failed to load apigen.toml")?;

    generate_file(API_SOURCE, out_dir.join("api_gen.rs"), &config)
        .with_context(|| format!("Failed to generate handlers for {API_SOURCE}"))?;

    Ok(())
}
