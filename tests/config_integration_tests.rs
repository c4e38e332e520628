//! Integration tests for the `config` command.

mod common;

use common::{CUSTOM_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", CUSTOM_CONFIG);

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--config", "custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("invalid [[[ toml");

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn config_validate_rejects_dotted_extension() {
    let fixture = TestFixture::new();
    fixture.create_config("[languages.kotlin]\nextensions = [\".kt\"]\nstyle = \"delimited\"\n");

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("leading dot"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_defaults_without_config() {
    let fixture = TestFixture::new();

    comment_check!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Effective Configuration ==="))
        .stdout(predicate::str::contains("directory = \"submitted\""));
}

#[test]
fn config_show_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    comment_check!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".comment-check.toml"))
        .stdout(predicate::str::contains("todo_marker = \"FIXME\""));
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();
    fixture.create_config(CUSTOM_CONFIG);

    let assert = comment_check!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["counting"]["todo_marker"], "FIXME");
    assert_eq!(json["languages"]["shell"]["style"], "visual");
    assert_eq!(json["languages"]["shell"]["extensions"][0], "sh");
}
