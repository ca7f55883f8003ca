// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mapping facade over a backing store of environment variables.
//!
//! # Architecture
//!
//! ```text
//! get(name) / get_item(name)
//!        |
//!        v
//!   normalize (case_sensitive? exact : fold + resolve)
//!        |
//!   Backing::get / Backing::vars
//!        |
//!    hit +--> Entry::new(original_name, value)
//!   miss +--> MissPolicy: Blank | Null | Raise
//! ```
//!
//! - **Stateless per call**: nothing is cached, every read goes to the backing
//! - **Present but empty is a hit**: miss policies never apply to `FOO=""`
//! - **Writes** are gated by `writable` and go straight through to the backing
//!
//! The process-wide default instance is available through [`env`].

pub mod backing;
mod key;
pub mod options;


use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::entry::Entry;
use crate::error::{EnvError, EnvResult};

use backing::{Backing, ProcessEnv};
use options::{MissPolicy, Options};

/// Configurable, dictionary-like view of environment variables.
///
/// # Thread Safety
///
/// Reads take `&self` and never mutate shared state. Writes through
/// [`ProcessEnv`] race like any other write to the process table; serializing
/// them is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Environment<B = ProcessEnv> {
    backing: B,
    options: Options,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment over the process table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::from_process(Options::default())
    }

    /// Creates an environment over the process table.
    #[must_use]
    pub const fn from_process(options: Options) -> Self {
        Self::with_options(ProcessEnv, options)
    }
}

impl<B: Backing> Environment<B> {
    /// Creates an environment over `backing` with default options.
    #[must_use]
    pub fn with_backing(backing: B) -> Self {
        Self::with_options(backing, Options::default())
    }

    #[must_use]
    pub const fn with_options(backing: B, options: Options) -> Self {
        Self { backing, options }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn backing(&self) -> &B {
        &self.backing
    }

    /// Consumes the environment, returning the backing store.
    #[must_use]
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Looks up a variable.
    ///
    /// On a hit, returns an entry carrying the name as stored in the backing.
    /// On a miss the active [`MissPolicy`] decides: an empty entry named
    /// `name`, `None`, or an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::KeyNotFound`] on a miss when neither blankify nor noneify is set.
    pub fn get(&self, name: &str) -> EnvResult<Option<Entry>> {
        if let Some((found, value)) = self.lookup(name) {
            tracing::trace!(name, found = %found, "environment hit");
            return Ok(Some(Entry::new(found, value)));
        }

        match self.options.miss_policy() {
            MissPolicy::Blank => {
                tracing::debug!(name, "missing variable, substituting blank");
                Ok(Some(Entry::new(name, "")))
            }
            MissPolicy::Null => {
                tracing::trace!(name, "missing variable");
                Ok(None)
            }
            MissPolicy::Raise => Err(EnvError::key_not_found(name)),
        }
    }

    /// Looks up a variable whose name is only known at runtime.
    ///
    /// Same normalization and miss policy as [`Environment::get`].
    ///
    /// # Errors
    ///
    /// See [`Environment::get`].
    pub fn get_item(&self, name: impl AsRef<str>) -> EnvResult<Option<Entry>> {
        self.get(name.as_ref())
    }

    /// Sets a variable, writing through to the backing.
    ///
    /// When case-insensitive, an existing variable is overwritten under its
    /// stored name; a new one is stored under the folded name.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ReadOnly`] if the environment is not writable, regardless
    /// of arguments. Returns [`EnvError::InvalidName`] for an empty name or one
    /// containing `=` or NUL, and [`EnvError::InvalidValue`] for a value containing NUL.
    pub fn set(&mut self, name: &str, value: impl AsRef<str>) -> EnvResult<()> {
        if !self.options.writable() {
            return Err(EnvError::read_only(name));
        }
        let value = value.as_ref();
        if !backing::is_valid_name(name) {
            return Err(EnvError::invalid_name(name));
        }
        if value.contains('\0') {
            return Err(EnvError::invalid_value(name));
        }

        let target = self.write_target(name);
        tracing::debug!(name = %target, "setting environment variable");
        self.backing.set(&target, value);
        Ok(())
    }

    /// Removes a variable, returning its previous value.
    ///
    /// A missing variable is not an error and no miss policy applies.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ReadOnly`] if the environment is not writable.
    pub fn remove(&mut self, name: &str) -> EnvResult<Option<String>> {
        if !self.options.writable() {
            return Err(EnvError::read_only(name));
        }
        let Some((found, _)) = self.lookup(name) else {
            return Ok(None);
        };
        tracing::debug!(name = %found, "removing environment variable");
        Ok(self.backing.remove(&found))
    }

    /// Returns true if `name` is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        if self.options.case_sensitive() {
            self.backing.contains(name)
        } else {
            self.lookup(name).is_some()
        }
    }

    /// Iterates over variable names, folded when case-insensitive.
    ///
    /// Each call reads the backing afresh.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.view().map(|(key, _, _)| key)
    }

    /// Iterates over raw values.
    pub fn values(&self) -> impl Iterator<Item = String> + '_ {
        self.view().map(|(_, _, value)| value)
    }

    /// Iterates over `(key, entry)` pairs. Keys are folded when case-insensitive;
    /// entries keep the name as stored.
    pub fn items(&self) -> impl Iterator<Item = (String, Entry)> + '_ {
        self.view()
            .map(|(key, name, value)| (key, Entry::new(name, value)))
    }

    /// Number of distinct keys in the normalized view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.view().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.view().next().is_none()
    }

    /// Collects variables whose key starts with `prefix`, keys lowercased.
    ///
    /// Values are raw strings. See [`Environment::prefix_with`].
    #[must_use]
    pub fn prefix(&self, prefix: &str) -> BTreeMap<String, String> {
        self.prefix_with(prefix, true)
    }

    /// Collects variables whose key starts with `prefix`.
    ///
    /// The full key is kept, lowercased when `lowercase` is set. When
    /// case-insensitive, the prefix is folded before matching.
    #[must_use]
    pub fn prefix_with(&self, prefix: &str, lowercase: bool) -> BTreeMap<String, String> {
        let prefix = if self.options.case_sensitive() {
            Cow::Borrowed(prefix)
        } else {
            key::fold(prefix)
        };

        self.view()
            .filter(|(key, _, _)| key.starts_with(prefix.as_ref()))
            .map(|(key, _, value)| {
                let key = if lowercase { key.to_lowercase() } else { key };
                (key, value)
            })
            .collect()
    }

    /// Resolves `alias => variable name` pairs to raw values.
    ///
    /// Misses follow the miss policy: blank values, `None`, or an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::KeyNotFound`] for the first missing variable when
    /// neither blankify nor noneify is set.
    pub fn map<I, A, N>(&self, aliases: I) -> EnvResult<BTreeMap<String, Option<String>>>
    where
        I: IntoIterator<Item = (A, N)>,
        A: Into<String>,
        N: AsRef<str>,
    {
        aliases
            .into_iter()
            .map(|(alias, name)| {
                let value = self.get(name.as_ref())?.map(Entry::into_value);
                Ok((alias.into(), value))
            })
            .collect()
    }

    /// Finds `(stored name, value)` for `name` under the case policy.
    fn lookup(&self, name: &str) -> Option<(String, String)> {
        if self.options.case_sensitive() {
            self.backing.get(name).map(|value| (name.to_owned(), value))
        } else {
            key::resolve(self.backing.vars(), name)
        }
    }

    fn write_target(&self, name: &str) -> String {
        if self.options.case_sensitive() {
            return name.to_owned();
        }
        self.lookup(name)
            .map_or_else(|| key::fold(name).into_owned(), |(found, _)| found)
    }

    /// `(key, stored name, value)` triples of the normalized view.
    fn view(&self) -> Box<dyn Iterator<Item = (String, String, String)> + '_> {
        if self.options.case_sensitive() {
            Box::new(
                self.backing
                    .vars()
                    .map(|(name, value)| (name.clone(), name, value)),
            )
        } else {
            Box::new(
                key::folded_view(self.backing.vars())
                    .into_iter()
                    .map(|(key, (name, value))| (key, name, value)),
            )
        }
    }
}

static DEFAULT_ENV: OnceLock<Environment> = OnceLock::new();

/// Returns the process-wide default environment.
///
/// Built on first use over the process table with default options, then
/// reused for the life of the process.
pub fn env() -> &'static Environment {
    DEFAULT_ENV.get_or_init(Environment::new)
}
