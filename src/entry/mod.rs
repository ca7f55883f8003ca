// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A single environment variable as a string-like value.
//!
//! # Architecture
//!
//! ```text
//! Entry { name, value }      immutable, built per lookup
//!   |
//!   +-- string ops   as_str / len / to_lowercase / partition / [..] / + / ==
//!   |
//!   +-- views (convert.rs, parsed on every access)
//!         as_bool  as_int  as_float  parse::<T>
//!         as_list  as_path  as_path_list
//!         from_json  from_json_as::<T>
//! ```
//!
//! `Display` prints the raw value, so an entry interpolates like a plain
//! string. `Debug` prints `NAME="value"` for logs and diagnostics.

mod convert;


pub use convert::{FALSY, PATH_SEPARATOR, TRUTHY};

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index};
use std::slice::SliceIndex;

use serde::{Serialize, Serializer};

/// One environment variable: its name as found in the backing mapping and its raw value.
///
/// Equality, ordering and hashing consider only the value, so an entry compares
/// like the string it wraps.
#[derive(Clone)]
pub struct Entry {
    name: String,
    value: String,
}

impl Entry {
    /// Creates an entry from a name and a raw value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the entry, returning the raw value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }

    /// Consumes the entry, returning `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.value.to_lowercase()
    }

    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.value.to_uppercase()
    }

    /// Uppercases the first letter of every word and lowercases the rest.
    ///
    /// A word starts after any non-alphabetic character, so `"xdg-data dirs"`
    /// becomes `"Xdg-Data Dirs"`.
    #[must_use]
    pub fn to_title_case(&self) -> String {
        let mut out = String::with_capacity(self.value.len());
        let mut at_word_start = true;
        for c in self.value.chars() {
            if c.is_alphabetic() {
                if at_word_start {
                    out.extend(c.to_uppercase());
                } else {
                    out.extend(c.to_lowercase());
                }
                at_word_start = false;
            } else {
                out.push(c);
                at_word_start = true;
            }
        }
        out
    }

    #[must_use]
    pub fn trim(&self) -> &str {
        self.value.trim()
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.value.starts_with(prefix)
    }

    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.value.ends_with(suffix)
    }

    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.value.contains(pattern)
    }

    /// Splits the raw value on `sep`, like [`str::split`].
    pub fn split<'a>(&'a self, sep: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.value.split(sep)
    }

    /// Splits at the first occurrence of `sep` into `(head, sep, tail)`.
    ///
    /// When `sep` is absent the result is `(value, "", "")`.
    #[must_use]
    pub fn partition<'a>(&'a self, sep: &'a str) -> (&'a str, &'a str, &'a str) {
        match self.value.split_once(sep) {
            Some((head, tail)) => (head, sep, tail),
            None => (&self.value, "", ""),
        }
    }

    /// Splits at the last occurrence of `sep` into `(head, sep, tail)`.
    ///
    /// When `sep` is absent the result is `("", "", value)`.
    #[must_use]
    pub fn rpartition<'a>(&'a self, sep: &'a str) -> (&'a str, &'a str, &'a str) {
        match self.value.rsplit_once(sep) {
            Some((head, tail)) => (head, sep, tail),
            None => ("", "", &self.value),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.value)
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Borrow<str> for Entry {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl From<Entry> for String {
    fn from(entry: Entry) -> Self {
        entry.value
    }
}

impl<I: SliceIndex<str>> Index<I> for Entry {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.value[index]
    }
}

// --- Comparison (by value) ---

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for Entry {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

impl PartialEq<Entry> for str {
    fn eq(&self, other: &Entry) -> bool {
        self == other.value
    }
}

impl PartialEq<Entry> for &str {
    fn eq(&self, other: &Entry) -> bool {
        *self == other.value
    }
}

impl PartialEq<Entry> for String {
    fn eq(&self, other: &Entry) -> bool {
        *self == other.value
    }
}

impl PartialOrd<str> for Entry {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.value.as_str().cmp(other))
    }
}

// --- Concatenation ---

impl Add<&str> for &Entry {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        let mut out = String::with_capacity(self.value.len() + rhs.len());
        out.push_str(&self.value);
        out.push_str(rhs);
        out
    }
}

impl Add<&Entry> for &Entry {
    type Output = String;

    fn add(self, rhs: &Entry) -> String {
        self + rhs.as_str()
    }
}

impl Add<&Entry> for String {
    type Output = Self;

    fn add(mut self, rhs: &Entry) -> Self {
        self.push_str(&rhs.value);
        self
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
