//! apigen CLI - Handler generator
//!
//! Commands:
//! - `apigen generate` - Generate handlers from annotated source or a manifest
//! - `apigen manifest` - Write the manifest extracted from annotated source
//! - `apigen check` - Extract and validate without writing anything

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(author, version, about = "Generate HTTP handlers from annotated Rust source", long_about = None)]
struct Cli {
    /// Path to apigen.toml (default: looked up next to the input)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate handlers
    Generate {
        /// Annotated Rust source file
        #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
        source: Option<PathBuf>,

        /// Generate from a TOML or JSON manifest instead of source
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path glob-imported by the generated code (e.g. `crate::api`)
        #[arg(long)]
        types_path: Option<String>,

        /// Path of the runtime crate (e.g. `::apigen`)
        #[arg(long)]
        runtime_path: Option<String>,
    },

    /// Write the manifest extracted from annotated source
    Manifest {
        /// Annotated Rust source file
        source: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Manifest format
        #[arg(short, long, value_enum, default_value_t = ManifestFormat::Toml)]
        format: ManifestFormat,
    },

    /// Extract and validate annotated source
    Check {
        /// Annotated Rust source file
        source: PathBuf,
    },
}

/// Serialization format of a written manifest
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    Toml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            source,
            manifest,
            output,
            types_path,
            runtime_path,
        } => {
            let input = source.as_deref().or(manifest.as_deref());
            let config = config::with_overrides(
                config::resolve(cli.config.as_deref(), input)?,
                types_path,
                runtime_path,
            );
            match (source, manifest) {
                (_, Some(manifest)) => generate::from_manifest(&manifest, output.as_deref(), &config)?,
                (Some(source), None) => generate::from_source(&source, output.as_deref(), &config)?,
                (None, None) => anyhow::bail!("either a source file or --manifest is required"),
            }
        }
        Commands::Manifest {
            source,
            output,
            format,
        } => {
            let config = config::resolve(cli.config.as_deref(), Some(&source))?;
            manifest::write(&source, output.as_deref(), format, &config)?;
        }
        Commands::Check { source } => {
            let config = config::resolve(cli.config.as_deref(), Some(&source))?;
            manifest::check(&source, &config)?;
        }
    }

    Ok(())
}

/// Log to stderr so generated output on stdout stays clean
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
