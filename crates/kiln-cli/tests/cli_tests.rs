//! End-to-end tests for listing, searching, resolving and generating.

mod common;

use std::fs;

use common::Fixture;
use predicates::prelude::*;

// ── registry management ──────────────────────────────────────────────────────

#[test]
fn registry_list_seeds_public_registry() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registries:"))
        .stdout(predicate::str::contains("* public -> https://"))
        .stdout(predicate::str::contains("Order: public"));

    assert!(fx.config().is_file());
}

#[test]
fn registry_add_keeps_existing_default() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "add", "--name", "local", "--url"])
        .arg(fx.registry())
        .assert()
        .success();

    fx.kiln()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* public"))
        .stdout(predicate::str::contains("  local -> "));
}

#[test]
fn set_default_moves_registry_to_front() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "add", "--name", "local", "--url"])
        .arg(fx.registry())
        .assert()
        .success();
    fx.kiln()
        .args(["registry", "set-default", "local"])
        .assert()
        .success();

    fx.kiln()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* local"))
        .stdout(predicate::str::contains("Order: local, public"));
}

#[test]
fn registry_use_derives_name_from_path() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "use"])
        .arg(fx.registry())
        .assert()
        .success()
        .stdout(predicate::str::contains("registry.json"));

    fx.kiln()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* registry.json -> "));
}

#[test]
fn order_with_unknown_name_changes_nothing() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "order", "--names", "public,ghost"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ghost"));

    fx.kiln()
        .args(["registry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order: public"));
}

// ── list / search / info ─────────────────────────────────────────────────────

#[test]
fn list_with_override_does_not_touch_config() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["list", "--registry", &fx.registry_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- api-service (1.2.0) - Go HTTP API"))
        .stdout(predicate::str::contains("- frontend (0.3.0) - Web frontend"));

    assert!(!fx.config().exists());
}

#[test]
fn list_all_prints_precedence_note() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["registry", "use"])
        .arg(fx.registry())
        .assert()
        .success();
    fx.kiln()
        .args(["registry", "remove", "public"])
        .assert()
        .success();

    fx.kiln()
        .args(["list", "--all", "--tag", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First match wins."))
        .stdout(predicate::str::contains("api-service"))
        .stdout(predicate::str::contains("frontend").not());
}

#[test]
fn list_json_includes_source() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["--output-format", "json", "list", "--registry", &fx.registry_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"downloadURL\""));
}

#[test]
fn search_groups_matches_by_source() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["search", "--query", "API", "--registry", &fx.registry_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains(fx.registry_arg()))
        .stdout(predicate::str::contains("  - api-service"))
        .stdout(predicate::str::contains("frontend").not());
}

#[test]
fn info_shows_resolved_blueprint() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["info", "api-service", "--registry", &fx.registry_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:     1.2.0"))
        .stdout(predicate::str::contains("Tags:        go, api"))
        .stdout(predicate::str::contains(
            "Download:    https://downloads.example/api-service-1.2.0.tar.gz",
        ));
}

// ── gen ──────────────────────────────────────────────────────────────────────

#[test]
fn gen_renders_local_blueprint() {
    let fx = Fixture::new();

    fx.kiln()
        .args([
            "gen",
            "-b",
            "api-service",
            "-o",
            "out",
            "--version",
            "^1.0",
            "--set",
            "Module=github.com/acme/svc",
            "--registry",
            &fx.registry_arg(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated api-service into out"));

    let readme = fs::read_to_string(fx.path().join("out/README.md")).unwrap();
    assert!(readme.contains("# api-service uses servemux with sqlite-native"));
    assert!(readme.contains("module github.com/acme/svc"));

    let main = fs::read_to_string(fx.path().join("out/cmd/api-service/main.go")).unwrap();
    assert_eq!(main, "package main // api-service\n");
}

#[test]
fn gen_layers_vars_file_over_flag_defaults() {
    let fx = Fixture::new();
    fs::write(fx.path().join("vars.yaml"), "Router: chi\nDB: mysql-native\n").unwrap();

    fx.kiln()
        .args([
            "gen",
            "-b",
            "api-service",
            "-o",
            "out",
            "--router",
            "gorilla",
            "--vars",
            "vars.yaml",
            "--set",
            "DB=postgres-gorm",
            "--registry",
            &fx.registry_arg(),
        ])
        .assert()
        .success();

    let readme = fs::read_to_string(fx.path().join("out/README.md")).unwrap();
    assert!(readme.contains("uses chi with postgres-gorm"));
    // Unset variables stay as written.
    assert!(readme.contains("module {{ .Module }}"));
}

#[test]
fn get_without_download_url_fails() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["get", "frontend", "--registry", &fx.registry_arg()])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Generating frontend into ./frontend using remote asset...",
        ))
        .stderr(predicate::str::contains("no download URL"));
}

// ── blueprint authoring ──────────────────────────────────────────────────────

#[test]
fn init_validate_and_bump_round() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["init", "--name", "demo", "--desc", "A demo"])
        .assert()
        .success();
    assert!(fx.path().join("demo/template").is_dir());

    fx.kiln()
        .args(["validate", "--file", "demo/manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: demo/manifest.yaml"));

    fx.kiln()
        .args(["bump", "--kind", "minor", "--file", "demo/manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bumped to 0.2.0"));

    fx.kiln()
        .args(["bump", "--file", "demo/manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bumped to 0.2.1"));

    let manifest = fs::read_to_string(fx.path().join("demo/manifest.yaml")).unwrap();
    assert!(manifest.contains("version: 0.2.1"));
    assert!(manifest.contains("description: A demo"));
}

#[test]
fn completions_for_bash() {
    let fx = Fixture::new();

    fx.kiln()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kiln"));
}

#[test]
fn gen_blueprint_names_complete_from_registry() {
    let fx = Fixture::new();

    fx.kiln()
        .env("COMPLETE", "fish")
        .env("KILN_REGISTRY", fx.registry_arg())
        .args(["--", "kiln", "gen", "-b", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api-service"))
        .stdout(predicate::str::contains("frontend").not());
}
