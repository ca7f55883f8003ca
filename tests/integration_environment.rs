// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the public environment API.
//!
//! Uses in-memory backings so the process environment is never touched.

use std::collections::{BTreeMap, HashMap};

use envkit::entry::PATH_SEPARATOR;
use envkit::{EnvError, Environment, MissPolicy, Options};

fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn shell_env(options: Options) -> Environment<BTreeMap<String, String>> {
    let data_dirs = format!("/usr/local/share{PATH_SEPARATOR}/usr/share");
    Environment::with_options(
        vars(&[
            ("USER", "fred"),
            ("RATIO", "2.5"),
            ("STATUS", "5150"),
            ("ENABLED", "yes"),
            ("JSON_DATA", r#"{"one": 1, "two": [2, 2]}"#),
            ("XDG_DATA_DIRS", &data_dirs),
        ]),
        options,
    )
}

// =============================================================================
// Lookup and conversion
// =============================================================================

#[test]
fn lookup_then_convert() {
    let env = shell_env(Options::builder().with_case_sensitive(true).build());

    assert_eq!(env.get("USER").unwrap().unwrap(), "fred");
    assert_eq!(env.get("STATUS").unwrap().unwrap().as_int().unwrap(), 5150);
    assert!((env.get("RATIO").unwrap().unwrap().as_float().unwrap() - 2.5).abs() < f64::EPSILON);
    assert!(env.get("ENABLED").unwrap().unwrap().as_bool().unwrap());
    assert_eq!(
        env.get("XDG_DATA_DIRS").unwrap().unwrap().as_list(),
        ["/usr/local/share", "/usr/share"]
    );

    let json = env.get("JSON_DATA").unwrap().unwrap().from_json().unwrap();
    assert_eq!(json["two"], serde_json::json!([2, 2]));
}

#[test]
fn conversion_failure_names_the_variable() {
    let env = shell_env(Options::builder().with_case_sensitive(true).build());
    let err = env.get("USER").unwrap().unwrap().as_int().unwrap_err();

    assert_eq!(err.name(), "USER");
    assert_eq!(err.value(), "fred");
}

// =============================================================================
// Miss policies
// =============================================================================

#[test]
fn miss_policies() {
    let noneify = shell_env(Options::default());
    assert_eq!(noneify.options().miss_policy(), MissPolicy::Null);
    assert!(noneify.get("USERZ").unwrap().is_none());

    let blankify = shell_env(Options::builder().with_blankify(true).build());
    let blank = blankify.get("USERZ").unwrap().unwrap();
    assert_eq!(blank.name(), "USERZ");
    assert!(blank.is_empty());

    let strict = shell_env(Options::builder().with_noneify(false).build());
    assert!(matches!(
        strict.get("USERZ"),
        Err(EnvError::KeyNotFound { .. })
    ));
}

// =============================================================================
// Case handling
// =============================================================================

#[test]
fn case_insensitive_lookup_keeps_original_name() {
    let env = shell_env(Options::builder().with_case_sensitive(false).build());
    let entry = env.get("user").unwrap().unwrap();

    assert_eq!(entry.name(), "USER");
    assert_eq!(entry, "fred");
    assert!(env.contains("Xdg_Data_Dirs"));
}

#[test]
fn case_sensitive_lookup_is_exact() {
    let env = shell_env(Options::builder().with_case_sensitive(true).build());

    assert!(env.get("user").unwrap().is_none());
    assert!(!env.contains("user"));
}

// =============================================================================
// Mapping view
// =============================================================================

#[test]
fn items_agree_with_get() {
    let env = shell_env(Options::builder().with_case_sensitive(true).build());

    assert_eq!(env.len(), env.keys().count());
    for (key, entry) in env.items() {
        assert_eq!(env.get(&key).unwrap().unwrap(), entry);
    }
}

#[test]
fn prefix_and_map() {
    let env = shell_env(Options::builder().with_case_sensitive(true).build());

    let xdg = env.prefix("XDG_");
    assert_eq!(xdg.len(), 1);
    assert!(xdg.contains_key("xdg_data_dirs"));

    let mapped = env.map([("who", "USER"), ("nothing", "NOPE")]).unwrap();
    assert_eq!(mapped["who"].as_deref(), Some("fred"));
    assert_eq!(mapped["nothing"], None);
}

// =============================================================================
// Writes
// =============================================================================

#[test]
fn read_only_by_default() {
    let mut env = shell_env(Options::default());

    assert!(matches!(
        env.set("USER", "barney"),
        Err(EnvError::ReadOnly { .. })
    ));
    assert_eq!(env.get("USER").unwrap().unwrap(), "fred");
}

#[test]
fn writable_set_then_get() {
    let mut env = shell_env(
        Options::builder()
            .with_writable(true)
            .with_case_sensitive(true)
            .build(),
    );

    env.set("USER", "barney").unwrap();
    env.set("NEW_VAR", "1").unwrap();

    assert_eq!(env.get("USER").unwrap().unwrap(), "barney");
    assert!(env.get("NEW_VAR").unwrap().unwrap().as_bool().unwrap());
    assert_eq!(env.remove("NEW_VAR").unwrap().as_deref(), Some("1"));
    assert!(!env.contains("NEW_VAR"));
}

#[test]
fn hash_map_backing() {
    let backing: HashMap<String, String> =
        [("HOME".to_string(), "/home/fred".to_string())].into();
    let env = Environment::with_options(
        backing,
        Options::builder().with_case_sensitive(true).build(),
    );

    assert_eq!(
        env.get("HOME").unwrap().unwrap().as_path(),
        std::path::Path::new("/home/fred")
    );
}
