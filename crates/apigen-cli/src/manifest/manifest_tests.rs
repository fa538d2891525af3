#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

const SOURCE: &str = r#"
pub struct P { #[apivalidator = "required,min=3"] pub login: String }
impl Api {
    /// apigen:api {"url": "/p", "auth": true, "method": "POST"}
    fn p(&self, ctx: &RequestContext, params: P) -> anyhow::Result<()> { Ok(()) }
}
"#;

fn source_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("api.rs");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn serialize___toml___reloads_to_same_manifest() {
    let manifest = extract_source(SOURCE, &GeneratorConfig::default()).unwrap();

    let text = serialize(&manifest, ManifestFormat::Toml).unwrap();

    assert_eq!(ApiManifest::from_toml_str(&text).unwrap(), manifest);
}

#[test]
fn serialize___json___reloads_to_same_manifest() {
    let manifest = extract_source(SOURCE, &GeneratorConfig::default()).unwrap();

    let text = serialize(&manifest, ManifestFormat::Json).unwrap();

    assert!(text.ends_with('\n'));
    assert_eq!(ApiManifest::from_json_str(&text).unwrap(), manifest);
}

#[test]
fn write___with_output___writes_file() {
    let dir = TempDir::new().unwrap();
    let source = source_file(&dir, SOURCE);
    let output = dir.path().join("api.toml");

    write(&source, Some(output.as_path()), ManifestFormat::Toml, &GeneratorConfig::default()).unwrap();

    let manifest = ApiManifest::from_toml_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(manifest.endpoints[0].url_path, "/p");
}

#[test]
fn check___valid_source___succeeds() {
    let dir = TempDir::new().unwrap();
    let source = source_file(&dir, SOURCE);

    assert!(check(&source, &GeneratorConfig::default()).is_ok());
}

#[test]
fn check___invalid_rule___fails_with_context() {
    let dir = TempDir::new().unwrap();
    let source = source_file(
        &dir,
        r#"pub struct P { #[apivalidator = "min=5,max=1"] pub login: String }"#,
    );

    let err = check(&source, &GeneratorConfig::default()).unwrap_err();

    assert!(err.to_string().starts_with("Failed to extract endpoints"));
    assert!(format!("{err:#}").contains("min 5 is greater than max 1"));
}

#[test]
fn check___missing_file___fails() {
    let dir = TempDir::new().unwrap();

    let err = check(&dir.path().join("missing.rs"), &GeneratorConfig::default()).unwrap_err();

    assert!(err.to_string().starts_with("Failed to read source"));
}
