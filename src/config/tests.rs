// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader, ENV_PREFIX, LogSettings};
use crate::environment::Environment;
use crate::environment::options::Options;
use crate::logging::LogLevel;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

fn overrides(pairs: &[(&str, &str)]) -> Environment<BTreeMap<String, String>> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Environment::with_options(vars, Options::builder().with_case_sensitive(true).build())
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.environment, Options::default());
    assert_eq!(config.log, LogSettings::default());
    assert_eq!(config.log.level, LogLevel::Warn);
}

#[test]
fn test_parse_environment_section() {
    let config = Config::parse(
        r"
[environment]
blankify = true
noneify = false
case_sensitive = false
",
    )
    .unwrap();

    assert!(config.environment.blankify());
    assert!(!config.environment.noneify());
    assert!(!config.environment.writable());
    assert!(!config.environment.case_sensitive());
}

#[test]
fn test_parse_log_section() {
    let config = Config::parse(
        r#"
[log]
level = 5
file = "logs/envkit.log"
"#,
    )
    .unwrap();

    assert_eq!(config.log.level, LogLevel::Trace);
    assert_eq!(config.log.file, Some(PathBuf::from("logs/envkit.log")));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!(Config::parse("[environment]\nblankfy = true\n").is_err());
    assert!(Config::parse("[nope]\nx = 1\n").is_err());
}

#[test]
fn test_parse_rejects_out_of_range_log_level() {
    assert!(Config::parse("[log]\nlevel = 9\n").is_err());
}

#[test]
fn test_env_overrides_toml() {
    let env = overrides(&[
        ("ENVKIT_ENVIRONMENT__NONEIFY", "false"),
        ("ENVKIT_LOG__LEVEL", "4"),
        ("UNRELATED", "ignored"),
    ]);

    let config = ConfigLoader::new()
        .add_toml_str("[environment]\nnoneify = true\nblankify = true\n")
        .with_env_source(ENV_PREFIX, &env)
        .build()
        .unwrap();

    assert!(!config.environment.noneify());
    assert!(config.environment.blankify());
    assert_eq!(config.log.level, LogLevel::Debug);
}

#[test]
fn test_set_overrides_everything() {
    let env = overrides(&[("ENVKIT_ENVIRONMENT__BLANKIFY", "false")]);

    let config = ConfigLoader::new()
        .with_env_source(ENV_PREFIX, &env)
        .set("environment.blankify", true)
        .unwrap()
        .build()
        .unwrap();

    assert!(config.environment.blankify());
}

#[test]
fn test_toml_file_sources() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[environment]\nwritable = true").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_file_optional("definitely-missing-envkit.toml")
        .build()
        .unwrap();
    assert!(config.environment.writable());
}

#[test]
fn test_missing_required_file_fails() {
    let result = ConfigLoader::new()
        .add_toml_file("definitely-missing-envkit.toml")
        .build();
    assert!(result.is_err());
}
