// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Name-to-value stores an [`Environment`](super::Environment) reads and writes.
//!
//! # Architecture
//!
//! ```text
//! Backing (trait)
//!   ProcessEnv                    std::env, live
//!   BTreeMap<String, String>      sorted, for tests and embedding
//!   HashMap<String, String>
//! ```
//!
//! Backings are case-sensitive stores. Case folding is layered on top by
//! the environment.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A name-to-string store.
///
/// `vars` is called once per iteration and must reflect the current contents.
pub trait Backing {
    /// Returns the value stored under exactly `name`.
    fn get(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`, replacing any previous value.
    fn set(&mut self, name: &str, value: &str);

    /// Removes `name`, returning its previous value.
    fn remove(&mut self, name: &str) -> Option<String>;

    /// Iterates over all `(name, value)` pairs.
    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_>;

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// The process environment table.
///
/// Reads are live, so variables set by other code are observed immediately.
/// Variables whose name or value is not valid UTF-8 are invisible.
///
/// Names the table cannot hold (empty, or containing `=` or NUL) are never
/// present: `get` and `remove` return `None` for them and `set` ignores them,
/// as it ignores values containing NUL. [`Environment::set`](super::Environment::set)
/// reports both cases as errors before reaching the backing.
///
/// # Thread Safety
///
/// Writes go through [`std::env::set_var`]. Concurrent writes, or a write
/// racing a read from another thread, are the caller's responsibility exactly
/// as with the process table itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

/// Whether the process table can store a variable called `name`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

impl Backing for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        if !is_valid_name(name) {
            return None;
        }
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) {
        if !is_valid_name(name) || value.contains('\0') {
            tracing::warn!(name, "refusing to store variable the process table cannot hold");
            return;
        }
        // SAFETY: the caller serializes writes to the process environment.
        unsafe { std::env::set_var(name, value) };
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        let previous = self.get(name)?;
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(name) };
        Some(previous)
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(std::env::vars_os().filter_map(|(name, value)| {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => Some((name, value)),
                (name, _) => {
                    tracing::debug!(name = ?name, "skipping non-UTF-8 environment variable");
                    None
                }
            }
        }))
    }
}

impl Backing for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        BTreeMap::remove(self, name)
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<S: BuildHasher> Backing for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        HashMap::remove(self, name)
    }

    fn vars(&self) -> Box<dyn Iterator<Item = (String, String)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}
