//! Tests for error messages, suggestions and exit codes.

mod common;

use std::fs;

use common::Fixture;
use predicates::prelude::*;

#[test]
fn test_search_requires_query_or_tag() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["search", "--registry", &fx.registry_arg()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("provide --query or --tag"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_unsatisfied_constraint_exits_2() {
    let fx = Fixture::new();

    fx.kiln()
        .args([
            "gen",
            "-b",
            "api-service",
            "--version",
            "^2.0",
            "--registry",
            &fx.registry_arg(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not satisfy"))
        .stderr(predicate::str::contains("^2.0"));

    assert!(!fx.path().join("README.md").exists());
}

#[test]
fn test_unknown_blueprint_exits_3() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["info", "nope", "--registry", &fx.registry_arg()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'nope' not found"));
}

#[test]
fn test_missing_local_template_suggests_remote() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["gen", "-b", "frontend", "--registry", &fx.registry_arg()])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("template not found locally"))
        .stderr(predicate::str::contains("--remote"));
}

#[test]
fn test_bad_set_assignment_exits_2() {
    let fx = Fixture::new();

    fx.kiln()
        .args([
            "gen",
            "-b",
            "api-service",
            "--set",
            "Module",
            "--registry",
            &fx.registry_arg(),
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("key=value"));
}

#[test]
fn test_malformed_registry_is_reported() {
    let fx = Fixture::new();
    fs::write(fx.path().join("broken.json"), "{ not json").unwrap();

    fx.kiln()
        .args(["list", "--registry", "broken.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse registry broken.json"));
}

#[test]
fn test_missing_registry_file_is_reported() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["list", "--registry", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to fetch registry missing.json"));
}

#[test]
fn test_remove_unknown_registry() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "remove", "ghost"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("registry 'ghost' not found"));
}

#[test]
fn test_registry_add_requires_url() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "add", "--name", "x"])
        .assert()
        .code(2);
}

#[test]
fn test_validate_missing_manifest_exits_3() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["validate"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("manifest.yaml"));
}

#[test]
fn test_validate_rejects_manifest_without_version() {
    let fx = Fixture::new();
    fs::write(fx.path().join("manifest.yaml"), "name: demo\nversion: \"\"\n").unwrap();

    fx.kiln()
        .args(["validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("version"));
}

#[test]
fn test_update_requires_http_source() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["update", "--from", "registry.json", "--dest", "out.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("http(s)"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let fx = Fixture::new();

    fx.kiln().args(["-q", "-v", "list"]).assert().code(2);
}
