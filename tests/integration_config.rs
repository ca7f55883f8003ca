// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests layering of TOML files, `ENVKIT_*` variables and overrides.

use std::collections::BTreeMap;
use std::io::Write;

use envkit::config::loader::ConfigLoader;
use envkit::config::{Config, ENV_PREFIX};
use envkit::logging::LogLevel;
use envkit::{Environment, Options};

fn source(pairs: &[(&str, &str)]) -> Environment<BTreeMap<String, String>> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Environment::with_options(vars, Options::builder().with_case_sensitive(true).build())
}

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log.level, LogLevel::Warn);
}

#[test]
fn config_parse_environment_section() {
    let toml = r"
[environment]
blankify = true
writable = true
case_sensitive = false
";
    let config = Config::parse(toml).unwrap();
    let options = config.environment;

    assert!(options.blankify());
    assert!(options.noneify());
    assert!(options.writable());
    assert!(!options.case_sensitive());
}

#[test]
fn config_parse_log_section() {
    let toml = r#"
[log]
level = 4
file = "logs/envkit.log"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.log.level, LogLevel::Debug);
    assert_eq!(
        config.log.file.as_deref(),
        Some(std::path::Path::new("logs/envkit.log"))
    );
}

#[test]
fn config_rejects_unknown_keys() {
    assert!(Config::parse("[environment]\nfrobnicate = true\n").is_err());
    assert!(Config::parse("[nope]\n").is_err());
}

#[test]
fn config_rejects_bad_log_level() {
    assert!(Config::parse("[log]\nlevel = 9\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");

    let mut f = std::fs::File::create(&first).unwrap();
    writeln!(f, "[environment]\nblankify = true\nwritable = true").unwrap();
    let mut f = std::fs::File::create(&second).unwrap();
    writeln!(f, "[environment]\nblankify = false").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&first)
        .add_toml_file(&second)
        .build()
        .unwrap();
    assert!(!config.environment.blankify());
    assert!(config.environment.writable());
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .build()
        .unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_env_overrides_file() {
    let env = source(&[
        ("ENVKIT_ENVIRONMENT__NONEIFY", "false"),
        ("ENVKIT_LOG__LEVEL", "5"),
        ("UNRELATED", "1"),
    ]);

    let config = ConfigLoader::new()
        .add_toml_str("[log]\nlevel = 1\n")
        .with_env_source(ENV_PREFIX, &env)
        .build()
        .unwrap();

    assert!(!config.environment.noneify());
    assert_eq!(config.log.level, LogLevel::Trace);
}

#[test]
fn config_override_beats_env() {
    let env = source(&[("ENVKIT_ENVIRONMENT__BLANKIFY", "false")]);

    let config = ConfigLoader::new()
        .with_env_source(ENV_PREFIX, &env)
        .set("environment.blankify", "true")
        .unwrap()
        .build()
        .unwrap();

    assert!(config.environment.blankify());
}
