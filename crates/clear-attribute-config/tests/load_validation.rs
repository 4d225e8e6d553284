// crates/clear-attribute-config/tests/load_validation.rs
// ============================================================================
// Module: Config Load Validation Tests
// Description: Loading and validating clear-attribute.toml.
// Purpose: Ensure defaults apply and invalid settings fail closed.
// Dependencies: clear-attribute-config, clear-attribute-core, tempfile
// ============================================================================

//! ## Overview
//! Covers defaults, each validation rule, and file-based loading limits.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;

use clear_attribute_config::ClearAttributeConfig;
use clear_attribute_config::ConfigError;
use clear_attribute_config::LogSinkKind;
use clear_attribute_core::ExitPolicy;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn assert_invalid(toml: &str, needle: &str) {
    match ClearAttributeConfig::from_toml_str(toml) {
        Err(ConfigError::Invalid(message)) => {
            assert!(message.contains(needle), "unexpected message: {message}");
        }
        other => panic!("expected invalid config, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn minimal_config_applies_defaults() {
    let config = ClearAttributeConfig::from_toml_str(
        r#"
[database]
path = "var/catalog.sqlite"
"#,
    )
    .unwrap();
    assert_eq!(config.database.path, PathBuf::from("var/catalog.sqlite"));
    assert_eq!(config.database.busy_timeout_ms, 5_000);
    assert_eq!(config.database.table_prefix().unwrap().as_str(), "");
    assert_eq!(config.logging.sink, LogSinkKind::Stderr);
    assert_eq!(config.command.exit_policy, ExitPolicy::Uniform);
}

#[test]
fn full_config_parses() {
    let config = ClearAttributeConfig::from_toml_str(
        r#"
[database]
path = "catalog.sqlite"
busy_timeout_ms = 250
table_prefix = "mg_"

[logging]
sink = "file"
path = "var/log/clear-attribute.log"

[command]
exit_policy = "legacy_batch"
"#,
    )
    .unwrap();
    assert_eq!(config.database.table_prefix().unwrap().apply("eav_attribute"), "mg_eav_attribute");
    assert_eq!(config.logging.sink, LogSinkKind::File);
    assert_eq!(config.command.exit_policy, ExitPolicy::LegacyBatch);
}

#[test]
fn missing_database_section_fails_parse() {
    assert!(matches!(
        ClearAttributeConfig::from_toml_str("[logging]\nsink = \"none\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn unknown_keys_fail_parse() {
    assert!(matches!(
        ClearAttributeConfig::from_toml_str("[database]\npath = \"a.sqlite\"\ndry_run = true\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn empty_database_path_is_rejected() {
    assert_invalid("[database]\npath = \"  \"\n", "database.path must be non-empty");
}

#[test]
fn busy_timeout_bounds_are_enforced() {
    assert_invalid("[database]\npath = \"a.sqlite\"\nbusy_timeout_ms = 0\n", "busy_timeout_ms");
    assert_invalid(
        "[database]\npath = \"a.sqlite\"\nbusy_timeout_ms = 600001\n",
        "busy_timeout_ms",
    );
}

#[test]
fn unsafe_table_prefix_is_rejected() {
    assert_invalid(
        "[database]\npath = \"a.sqlite\"\ntable_prefix = \"x; DROP\"\n",
        "database.table_prefix",
    );
}

#[test]
fn file_sink_requires_path() {
    assert_invalid(
        "[database]\npath = \"a.sqlite\"\n[logging]\nsink = \"file\"\n",
        "logging.path is required",
    );
}

#[test]
fn stderr_sink_rejects_path() {
    assert_invalid(
        "[database]\npath = \"a.sqlite\"\n[logging]\nsink = \"stderr\"\npath = \"x.log\"\n",
        "only valid for sink = file",
    );
}

#[test]
fn load_reads_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("clear-attribute.toml");
    fs::write(&path, "[database]\npath = \"catalog.sqlite\"\n").unwrap();
    let config = ClearAttributeConfig::load(Some(&path)).unwrap();
    assert_eq!(config.database.path, PathBuf::from("catalog.sqlite"));
}

#[test]
fn load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");
    assert!(matches!(ClearAttributeConfig::load(Some(&path)), Err(ConfigError::Io(_))));
}

#[test]
fn load_rejects_oversized_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("big.toml");
    let mut content = String::from("[database]\npath = \"a.sqlite\"\n");
    content.push_str(&"#".repeat(1024 * 1024 + 1));
    fs::write(&path, content).unwrap();
    assert!(matches!(ClearAttributeConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}

#[test]
fn load_rejects_non_utf8_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("binary.toml");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    assert!(matches!(ClearAttributeConfig::load(Some(&path)), Err(ConfigError::Invalid(_))));
}
