//! Integration tests for buildgen-cli.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[build_config]]
name = "Hello world!"
group = "my.website"
version = "2.0"
debug = true
scheme = "qualified"

[[build_config.fields]]
name = "A_STRING"
type = "string"
value = "Hello world!"

[[build_config.fields]]
name = "A_DOUBLE"
type = "double"
value = 12.0

[[build_config.fields]]
name = "AN_INT"
type = "int"
value = 9

[[resources.directories]]
path = "res"
"#;

/// A project dir holding `buildgen.toml`, an empty app config and a resource tree.
fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("buildgen.toml"), MANIFEST).unwrap();
    fs::write(dir.join("config.toml"), "").unwrap();
    write(dir, "res/style/some.css", ".text-field { } .hyperlink { } .label { }");
    write(dir, "res/style/another.css", "");
    temp
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn buildgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("buildgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .args(["--config", "config.toml"]);
    cmd
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("buildgen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("schemes"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("buildgen")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_json() {
    let temp = project();
    let output = buildgen(temp.path())
        .args(["generate", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    let constants = &report["artifacts"][0]["constants"];
    let identifiers: Vec<_> = constants
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["identifier"].as_str().unwrap())
        .collect();
    assert_eq!(
        identifiers,
        ["APP_NAME", "GROUP_ID", "VERSION", "DEBUG", "A_STRING", "A_DOUBLE", "AN_INT"]
    );
    assert_eq!(constants[5]["value"]["kind"], "double");
    assert_eq!(constants[6]["value"]["value"], 9);

    let table = &report["resources"][0];
    assert_eq!(table["namespace"], "style");
    let keys: Vec<_> = table["accessors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, ["_another", "text_field", "hyperlink", "label", "_some"]);
}

#[test]
fn test_generate_plain_table() {
    let temp = project();
    buildgen(temp.path())
        .args(["generate", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my.website.BuildConfig (7 constants)"))
        .stdout(predicate::str::contains("A_DOUBLE"))
        .stdout(predicate::str::contains("12.0"))
        .stdout(predicate::str::contains("/style/some.css"));
}

#[test]
fn test_generate_scheme_override_applies_to_unnamed_configs() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();
    fs::write(
        temp.path().join("buildgen.toml"),
        "[[build_config]]\nname = \"x\"\ngroup = \"g\"\nversion = \"1\"\n",
    )
    .unwrap();

    buildgen(temp.path())
        .args(["generate", "--scheme", "qualified", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APP_NAME"));
}

#[test]
fn test_config_file_default_scheme() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[defaults]\nscheme = \"qualified\"\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("buildgen.toml"),
        "[[build_config]]\nname = \"x\"\ngroup = \"g\"\nversion = \"1\"\n",
    )
    .unwrap();

    buildgen(temp.path())
        .args(["generate", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GROUP_ID"));
}

#[test]
fn test_check_reports_counts() {
    let temp = project();
    let output = buildgen(temp.path())
        .args(["check", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["constants"], 7);
    assert_eq!(summary["accessors"], 5);
}

#[test]
fn test_schemes_lists_builtins_without_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();

    buildgen(temp.path())
        .args(["schemes", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default (built-in)"))
        .stdout(predicate::str::contains("qualified (built-in)"))
        .stdout(predicate::str::contains("APP_NAME"));
}

#[test]
fn test_schemes_include_manifest_schemes() {
    let temp = project();
    fs::write(
        temp.path().join("custom.toml"),
        "[schemes.short]\nname = \"APP\"\n",
    )
    .unwrap();

    let output = buildgen(temp.path())
        .args(["schemes", "custom.toml", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let schemes: Value = serde_json::from_slice(&output.stdout).unwrap();
    let short = &schemes[2];
    assert_eq!(short["id"], "short");
    assert_eq!(short["builtin"], false);
    assert_eq!(short["mappings"][0][0], "name");
    assert_eq!(short["mappings"][0][1], "APP");
}

#[test]
fn test_config_get() {
    let temp = project();
    buildgen(temp.path())
        .args(["config", "get", "defaults.manifest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.manifest = buildgen.toml"));
}

#[test]
fn test_environment_overrides_config() {
    let temp = project();
    buildgen(temp.path())
        .env("BUILDGEN_DEFAULTS__SCHEME", "qualified")
        .args(["config", "get", "defaults.scheme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qualified"));
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("buildgen")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildgen"));
}
