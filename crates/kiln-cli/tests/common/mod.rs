//! Shared fixture for binary-level tests: a local registry file, a local
//! blueprints checkout and an isolated configuration path.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const REGISTRY_JSON: &str = r#"{
  "blueprints": [
    {
      "name": "api-service",
      "version": "1.2.0",
      "description": "Go HTTP API",
      "tags": ["go", "api"],
      "downloadURL": "https://downloads.example/api-service-1.2.0.tar.gz",
      "repo": "https://git.example/blueprints",
      "path": "api-service"
    },
    {
      "name": "frontend",
      "version": "0.3.0",
      "description": "Web frontend",
      "tags": ["ts"],
      "path": "frontend"
    }
  ]
}"#;

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("registry.json"), REGISTRY_JSON).unwrap();

        let template = dir.path().join("blueprints/api-service/template");
        fs::create_dir_all(template.join("cmd/{{ .Name }}")).unwrap();
        fs::write(
            template.join("README.md"),
            "# {{ .Name }} uses {{ .Router }} with {{ .DB }}\nmodule {{ .Module }}\n",
        )
        .unwrap();
        fs::write(
            template.join("cmd/{{ .Name }}/main.go"),
            "package main // {{Name}}\n",
        )
        .unwrap();

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry(&self) -> PathBuf {
        self.path().join("registry.json")
    }

    pub fn registry_arg(&self) -> String {
        self.registry().display().to_string()
    }

    pub fn config(&self) -> PathBuf {
        self.path().join("config/config.toml")
    }

    /// `kiln` isolated from the caller's environment.
    pub fn kiln(&self) -> Command {
        let mut cmd = Command::cargo_bin("kiln").unwrap();
        cmd.current_dir(self.path())
            .env("KILN_CONFIG", self.config())
            .env("KILN_BLUEPRINTS_DIR", self.path().join("blueprints"))
            .env_remove("KILN_REGISTRY")
            .env_remove("COMPLETE")
            .env_remove("RUST_LOG");
        cmd
    }
}
