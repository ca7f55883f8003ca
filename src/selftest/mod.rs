// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in self-test suite run by `envkit self-test`.
//!
//! ```text
//! fixture() ──> Environment<BTreeMap> per check ──> Report
//!                                                  passed / failed
//! ```
//!
//! Checks never touch the process environment.


use std::collections::BTreeMap;

use anyhow::{bail, ensure};

use crate::entry::PATH_SEPARATOR;
use crate::environment::Environment;
use crate::environment::options::Options;
use crate::error::{EnvError, Result};

type Fixture = Environment<BTreeMap<String, String>>;

/// A named check run against fresh fixture environments.
pub struct Check {
    pub name: &'static str,
    run: fn() -> Result<()>,
}

/// Outcome of one check.
#[derive(Debug)]
pub struct Outcome {
    pub name: &'static str,
    pub error: Option<String>,
}

impl Outcome {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of a self-test run, in check order.
#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// The fixed variable set every check starts from.
#[must_use]
pub fn fixture() -> BTreeMap<String, String> {
    [
        ("EMPTY", String::new()),
        ("JSON_DATA", r#"{"one":1, "two":2, "three":3}"#.to_string()),
        ("PI", "3.14".to_string()),
        ("READY", "no".to_string()),
        ("STATUS", "5150".to_string()),
        ("QT_ACCESSIBILITY", "1".to_string()),
        ("SSH_AUTH_SOCK", "/run/user/1000/keyring/ssh".to_string()),
        ("TERM", "xterm-256color".to_string()),
        ("USER", "fred".to_string()),
        (
            "XDG_DATA_DIRS",
            format!("/usr/local/share{PATH_SEPARATOR}/usr/share"),
        ),
        ("XDG_SESSION_ID", "c1".to_string()),
        ("XDG_SESSION_TYPE", "x11".to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Runs every check and collects the outcomes.
#[must_use]
pub fn run() -> Report {
    let outcomes = CHECKS
        .iter()
        .map(|check| {
            let error = (check.run)().err().map(|e| format!("{e:#}"));
            if let Some(ref message) = error {
                tracing::debug!(check = check.name, %message, "self-test check failed");
            }
            Outcome {
                name: check.name,
                error,
            }
        })
        .collect();
    Report { outcomes }
}

/// All checks, in run order.
pub const CHECKS: &[Check] = &[
    Check { name: "debug form shows name and value", run: debug_form },
    Check { name: "string operations", run: string_operations },
    Check { name: "missing variable is none", run: missing_is_none },
    Check { name: "interpolation", run: interpolation },
    Check { name: "membership", run: membership },
    Check { name: "empty variable is present", run: empty_is_present },
    Check { name: "float view", run: float_view },
    Check { name: "int view", run: int_view },
    Check { name: "bool view", run: bool_view },
    Check { name: "json view", run: json_view },
    Check { name: "list view", run: list_view },
    Check { name: "path views", run: path_views },
    Check { name: "prefix", run: prefix },
    Check { name: "map", run: map },
    Check { name: "unicode write", run: unicode_write },
    Check { name: "write round trip", run: write_round_trip },
    Check { name: "read-only write fails", run: read_only_write },
    Check { name: "noneify off raises", run: noneify_off },
    Check { name: "blankify", run: blankify },
    Check { name: "case-insensitive lookup", run: case_insensitive },
];

fn fixture_env(options: Options) -> Fixture {
    Environment::with_options(fixture(), options)
}

fn default_env() -> Fixture {
    fixture_env(Options::builder().with_case_sensitive(true).build())
}

fn writable_env() -> Fixture {
    fixture_env(
        Options::builder()
            .with_case_sensitive(true)
            .with_writable(true)
            .build(),
    )
}

fn require(env: &Fixture, name: &str) -> Result<crate::entry::Entry> {
    match env.get(name)? {
        Some(entry) => Ok(entry),
        None => bail!("{name} unexpectedly missing"),
    }
}

fn debug_form() -> Result<()> {
    let user = require(&default_env(), "USER")?;
    let shown = format!("{user:?}");
    ensure!(shown == r#"USER="fred""#, "got {shown}");
    Ok(())
}

fn string_operations() -> Result<()> {
    let user = require(&default_env(), "USER")?;
    ensure!(user.to_title_case() == "Fred", "got {}", user.to_title_case());
    ensure!(&user + "!" == "fred!");
    Ok(())
}

fn missing_is_none() -> Result<()> {
    ensure!(default_env().get("user")?.is_none(), "lowercase lookup should miss");
    Ok(())
}

fn interpolation() -> Result<()> {
    let term = require(&default_env(), "TERM")?;
    let shown = format!("term: {term}");
    ensure!(shown == "term: xterm-256color", "got {shown}");
    Ok(())
}

fn membership() -> Result<()> {
    let env = default_env();
    ensure!(!env.contains("MISSING"));
    ensure!(env.contains("EMPTY"));
    Ok(())
}

fn empty_is_present() -> Result<()> {
    let env = fixture_env(
        Options::builder()
            .with_case_sensitive(true)
            .with_blankify(true)
            .build(),
    );
    let empty = require(&env, "EMPTY")?;
    ensure!(empty.name() == "EMPTY" && empty.is_empty());
    Ok(())
}

fn float_view() -> Result<()> {
    let pi = require(&default_env(), "PI")?.as_float()?;
    ensure!(pi.to_string() == "3.14", "got {pi}");
    Ok(())
}

fn int_view() -> Result<()> {
    let status = require(&default_env(), "STATUS")?.as_int()?;
    ensure!(status == 5150, "got {status}");
    Ok(())
}

fn bool_view() -> Result<()> {
    let env = default_env();
    ensure!(require(&env, "QT_ACCESSIBILITY")?.as_bool()?);
    ensure!(!require(&env, "READY")?.as_bool()?);
    ensure!(require(&env, "USER")?.as_bool().is_err());
    Ok(())
}

fn json_view() -> Result<()> {
    let data = require(&default_env(), "JSON_DATA")?.from_json()?;
    let Some(object) = data.as_object() else {
        bail!("expected a JSON object, got {data}");
    };
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    ensure!(keys == ["one", "three", "two"], "got {keys:?}");
    ensure!(require(&default_env(), "USER")?.from_json().is_err());
    Ok(())
}

fn list_view() -> Result<()> {
    let env = default_env();
    let dirs = require(&env, "XDG_DATA_DIRS")?.as_list();
    ensure!(dirs == ["/usr/local/share", "/usr/share"], "got {dirs:?}");
    ensure!(require(&env, "EMPTY")?.as_list().is_empty());
    Ok(())
}

fn path_views() -> Result<()> {
    let env = default_env();
    let sock = require(&env, "SSH_AUTH_SOCK")?.as_path();
    ensure!(sock.ends_with("ssh"), "got {}", sock.display());
    let dirs = require(&env, "XDG_DATA_DIRS")?.as_path_list();
    ensure!(dirs.len() == 2 && dirs[1].ends_with("share"));
    Ok(())
}

fn prefix() -> Result<()> {
    let env = default_env();
    let keys: Vec<String> = env.prefix_with("XDG_", false).into_keys().collect();
    ensure!(
        keys == ["XDG_DATA_DIRS", "XDG_SESSION_ID", "XDG_SESSION_TYPE"],
        "got {keys:?}"
    );
    let lowered = env.prefix("XDG_");
    ensure!(lowered.get("xdg_session_type").map(String::as_str) == Some("x11"));
    Ok(())
}

fn map() -> Result<()> {
    let mapped = default_env().map([("username", "USER")])?;
    ensure!(mapped.get("username") == Some(&Some("fred".to_string())), "got {mapped:?}");
    Ok(())
}

fn unicode_write() -> Result<()> {
    let mut env = writable_env();
    env.set("MÖTLEY", "Crüe")?;
    let shown = format!("{:?}", require(&env, "MÖTLEY")?);
    ensure!(shown == r#"MÖTLEY="Crüe""#, "got {shown}");
    Ok(())
}

fn write_round_trip() -> Result<()> {
    let mut env = writable_env();
    ensure!(require(&env, "READY")? == "no");
    env.set("READY", "yes")?;
    ensure!(require(&env, "READY")? == "yes");
    Ok(())
}

fn read_only_write() -> Result<()> {
    match default_env().set("READY", "yes") {
        Err(EnvError::ReadOnly { .. }) => Ok(()),
        other => bail!("expected a read-only error, got {other:?}"),
    }
}

fn noneify_off() -> Result<()> {
    let env = fixture_env(
        Options::builder()
            .with_case_sensitive(true)
            .with_noneify(false)
            .build(),
    );
    match env.get("USERZ") {
        Err(EnvError::KeyNotFound { name }) if &*name == "USERZ" => Ok(()),
        other => bail!("expected a missing-key error, got {other:?}"),
    }
}

fn blankify() -> Result<()> {
    let env = fixture_env(
        Options::builder()
            .with_case_sensitive(true)
            .with_blankify(true)
            .build(),
    );
    let blank = require(&env, "USERZ")?;
    ensure!(blank.is_empty(), "got {blank:?}");
    Ok(())
}

fn case_insensitive() -> Result<()> {
    let env = fixture_env(Options::builder().with_case_sensitive(false).build());
    let lower = require(&env, "user")?;
    let upper = require(&env, "USER")?;
    ensure!(lower == upper && lower == "fred");
    Ok(())
}
