//! CLI integration tests.
//!
//! These tests verify the CLI argument parsing and configuration loading.

use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

use shell_render::cli::{parse_args_from, Args};
use shell_render::config::{Config, ConfigError};

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("shell-render")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.input.is_none());
    assert!(result.config.is_none());
    assert!(result.tab_size.is_none());
    assert!(!result.no_sanitize);
    assert!(!result.no_pager);
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "--tab-size",
        "4",
        "--no-sanitize",
        "--no-pager",
        "-l",
        "debug",
        "capture.raw",
    ]))
    .unwrap();

    assert_eq!(result.tab_size, Some(4));
    assert!(result.no_sanitize);
    assert!(result.no_pager);
    assert_eq!(result.log_level, Some("debug".to_string()));
    assert_eq!(
        result.input.unwrap().to_str().unwrap(),
        "capture.raw"
    );
}

#[test]
fn test_cli_invalid_tab_size() {
    assert!(parse_args_from(args(&["-t", "not-a-number"])).is_err());
    assert!(parse_args_from(args(&["-t", "0"])).is_err());
}

#[test]
fn test_cli_missing_value() {
    assert!(parse_args_from(args(&["--config"])).is_err());
}

// ============================================================================
// Configuration Loading Tests
// ============================================================================

#[test]
fn test_config_from_json_file() {
    let file = config_file(
        r#"{
        "render": {
            "tab_size": 4,
            "sanitize": false
        },
        "pager": {
            "strip": true,
            "strip_dismissal": false,
            "pattern": "-- ?[Mm]ore ?--",
            "dismiss_key": "q"
        },
        "logging": {
            "level": "debug"
        }
    }"#,
    );

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.render.tab_size, 4);
    assert!(!config.render.sanitize);
    assert!(config.pager.strip);
    assert!(!config.pager.strip_dismissal);
    assert_eq!(config.pager.pattern.as_deref(), Some("-- ?[Mm]ore ?--"));
    assert_eq!(config.pager.dismiss_key, "q");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_priority_cli_over_file() {
    let file = config_file(r#"{ "render": { "tab_size": 2, "sanitize": true } }"#);

    let args = Args {
        tab_size: Some(4),
        no_sanitize: true,
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let config = Config::load(&args).unwrap();

    assert_eq!(config.render.tab_size, 4);
    assert!(!config.render.sanitize);
}

#[test]
fn test_config_no_pager_disables_both_passes() {
    let file = config_file(r#"{ "pager": { "strip": true, "strip_dismissal": true } }"#);

    let args = Args {
        config: Some(file.path().to_path_buf()),
        no_pager: true,
        ..Args::default()
    };

    let config = Config::load(&args).unwrap();

    assert!(!config.pager.strip);
    assert!(!config.pager.strip_dismissal);
}

#[test]
fn test_config_rejects_zero_tab_size() {
    let file = config_file(r#"{ "render": { "tab_size": 0 } }"#);

    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    assert!(matches!(
        Config::load(&args),
        Err(ConfigError::InvalidTabSize(0))
    ));
}

#[test]
fn test_config_rejects_bad_pattern() {
    let file = config_file(r#"{ "pager": { "pattern": "[unclosed" } }"#);

    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    assert!(matches!(
        Config::load(&args),
        Err(ConfigError::PagerPattern(_))
    ));
}

#[test]
fn test_config_to_pipeline() {
    let file = config_file(
        r#"{
        "render": { "tab_size": 4, "sanitize": true },
        "pager": { "pattern": "<PAUSE>", "dismiss_key": "\r" }
    }"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    let pipeline = config.to_pipeline().unwrap();

    let out = pipeline.process("A\tB\x07\n<PAUSE>");
    assert_eq!(out.text, "A   B\r\n");
    assert!(out.saw_pager);
    assert_eq!(pipeline.dismissal_key(&out), Some("\r"));

    // The built-in pattern is replaced, not extended.
    assert!(!pipeline.process("--More--").saw_pager);
}

// ============================================================================
// Configuration Serialization Tests
// ============================================================================

#[test]
fn test_config_roundtrip() {
    let original = Config::default();
    let json = serde_json::to_string(&original).unwrap();
    let loaded: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(original.render.tab_size, loaded.render.tab_size);
    assert_eq!(original.pager.dismiss_key, loaded.pager.dismiss_key);
}

#[test]
fn test_config_partial_deserialization() {
    let json = r#"{"render": {"tab_size": 3}}"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.render.tab_size, 3);
    assert!(config.render.sanitize); // Default
    assert!(config.pager.strip); // Default
}
