//! YAML files: blueprint manifests and template variable files.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, instrument};

use kiln_core::{
    application::{ApplicationError, TEMPLATE_DIR},
    domain::{BlueprintManifest, DomainError, DomainValidator},
    error::{Context, KilnError, KilnResult},
};

/// Conventional manifest file name inside a blueprint directory.
pub const MANIFEST_FILE: &str = "manifest.yaml";

/// Read a manifest without validating it.
pub fn read_manifest(path: &Path) -> KilnResult<BlueprintManifest> {
    let raw = std::fs::read_to_string(path).map_err(|e| fs_error(path, e))?;
    serde_yaml::from_str(&raw)
        .map_err(|e| DomainError::InvalidManifest(format!("{}: {}", path.display(), e)).into())
}

/// Read a manifest and check its required fields.
pub fn validate_manifest(path: &Path) -> KilnResult<BlueprintManifest> {
    let manifest = read_manifest(path)?;
    DomainValidator::validate_manifest(&manifest)?;
    Ok(manifest)
}

pub fn write_manifest(path: &Path, manifest: &BlueprintManifest) -> KilnResult<()> {
    let raw = serde_yaml::to_string(manifest).context("failed to serialize manifest")?;
    std::fs::write(path, raw).map_err(|e| fs_error(path, e))
}

/// Create `<dir>/<name>/template/` and `<dir>/<name>/manifest.yaml`.
///
/// Returns the blueprint directory.
#[instrument]
pub fn init_blueprint(dir: &Path, name: &str, description: &str) -> KilnResult<PathBuf> {
    if name.trim().is_empty() {
        return Err(DomainError::MissingRequiredField { field: "name" }.into());
    }

    let root = dir.join(name);
    let template = root.join(TEMPLATE_DIR);
    std::fs::create_dir_all(&template).map_err(|e| fs_error(&template, e))?;
    write_manifest(
        &root.join(MANIFEST_FILE),
        &BlueprintManifest::new(name, description),
    )?;

    debug!(path = %root.display(), "Blueprint skeleton created");
    Ok(root)
}

/// Load template variables from a YAML or JSON file.
///
/// The top level must be a mapping. An empty file yields no variables.
pub fn load_variables(path: &Path) -> KilnResult<Vec<(String, Value)>> {
    let raw = std::fs::read_to_string(path).map_err(|e| fs_error(path, e))?;
    let invalid = |reason: String| -> KilnError {
        ApplicationError::VariablesInvalid {
            reason: format!("{}: {}", path.display(), reason),
        }
        .into()
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_yaml::from_str(&raw).map_err(|e| invalid(e.to_string()))?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(invalid(format!("expected a mapping, found {other}"))),
    }
}

fn fs_error(path: &Path, e: std::io::Error) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{BumpKind, INITIAL_VERSION};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn init_creates_skeleton() {
        let dir = TempDir::new().unwrap();
        let root = init_blueprint(dir.path(), "api-service", "HTTP API").unwrap();

        assert!(root.join("template").is_dir());
        let manifest = validate_manifest(&root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.version, INITIAL_VERSION);
        assert_eq!(manifest.description, "HTTP API");
        assert!(manifest.tags.is_empty());
    }

    #[test]
    fn validate_rejects_missing_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "name: x\ndescription: d\n").unwrap();

        assert_eq!(
            validate_manifest(&path).unwrap_err(),
            KilnError::Domain(DomainError::MissingRequiredField { field: "version" })
        );
    }

    #[test]
    fn bump_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "name: x\nversion: 1.4.2\ntags: [go]\n").unwrap();

        let mut manifest = read_manifest(&path).unwrap();
        manifest.bump(BumpKind::Minor);
        write_manifest(&path, &manifest).unwrap();

        let reread = read_manifest(&path).unwrap();
        assert_eq!(reread.version, "1.5.0");
        assert_eq!(reread.tags, vec!["go"]);
    }

    #[test]
    fn variables_from_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let yaml = dir.path().join("vars.yaml");
        std::fs::write(&yaml, "Module: github.com/acme/svc\nPort: 8080\n").unwrap();
        let json_file = dir.path().join("vars.json");
        std::fs::write(&json_file, r#"{"Router": "chi", "Debug": true}"#).unwrap();

        let mut vars = load_variables(&yaml).unwrap();
        vars.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            vars,
            vec![
                ("Module".to_string(), json!("github.com/acme/svc")),
                ("Port".to_string(), json!(8080)),
            ]
        );

        let vars = load_variables(&json_file).unwrap();
        assert!(vars.contains(&("Debug".to_string(), json!(true))));
    }

    #[test]
    fn variables_must_be_a_mapping() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vars.yaml");
        std::fs::write(&path, "- a\n- b\n").unwrap();

        assert!(matches!(
            load_variables(&path),
            Err(KilnError::Application(ApplicationError::VariablesInvalid { .. }))
        ));
    }
}
