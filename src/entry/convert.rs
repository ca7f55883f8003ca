// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed views of an entry.
//!
//! Each view is a pure function of the raw value and is recomputed on
//! every call. A failing view does not affect the others.

use std::path::PathBuf;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use super::Entry;
use crate::error::{ConversionError, ConversionResult};

/// Values accepted as `true` by [`Entry::as_bool`], compared case-insensitively.
pub const TRUTHY: [&str; 4] = ["1", "yes", "true", "on"];

/// Values accepted as `false` by [`Entry::as_bool`], compared case-insensitively.
pub const FALSY: [&str; 4] = ["0", "no", "false", "off"];

/// Separator between entries of `PATH`-like variables on this platform.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

impl Entry {
    /// Interprets the value as a boolean.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Bool`] if the value is in neither [`TRUTHY`] nor [`FALSY`].
    pub fn as_bool(&self) -> ConversionResult<bool> {
        let word = self.value.trim();
        if TRUTHY.iter().any(|t| word.eq_ignore_ascii_case(t)) {
            Ok(true)
        } else if FALSY.iter().any(|f| word.eq_ignore_ascii_case(f)) {
            Ok(false)
        } else {
            Err(ConversionError::Bool {
                name: self.name.clone(),
                value: self.value.clone(),
            })
        }
    }

    /// Parses the value as a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Int`] on non-numeric text or overflow.
    pub fn as_int(&self) -> ConversionResult<i64> {
        self.value
            .trim()
            .parse()
            .map_err(|source| ConversionError::Int {
                name: self.name.clone(),
                value: self.value.clone(),
                source,
            })
    }

    /// Parses the value as a float.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Float`] on non-numeric text.
    pub fn as_float(&self) -> ConversionResult<f64> {
        self.value
            .trim()
            .parse()
            .map_err(|source| ConversionError::Float {
                name: self.name.clone(),
                value: self.value.clone(),
                source,
            })
    }

    /// Parses the value with any [`FromStr`] implementation.
    ///
    /// Unlike the numeric views, the value is passed through untrimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] with the parser's message.
    pub fn parse<T>(&self) -> ConversionResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.value.parse().map_err(|e: T::Err| ConversionError::Parse {
            name: self.name.clone(),
            value: self.value.clone(),
            target: std::any::type_name::<T>(),
            message: e.to_string(),
        })
    }

    /// Splits the value on [`PATH_SEPARATOR`].
    ///
    /// An empty value yields an empty list, never `[""]`.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        self.as_list_by(PATH_SEPARATOR)
    }

    /// Splits the value on `sep`, with the same empty-value rule as [`Entry::as_list`].
    #[must_use]
    pub fn as_list_by(&self, sep: char) -> Vec<String> {
        if self.value.is_empty() {
            return Vec::new();
        }
        self.value.split(sep).map(str::to_owned).collect()
    }

    /// Wraps the value as a path. The filesystem is not touched.
    #[must_use]
    pub fn as_path(&self) -> PathBuf {
        PathBuf::from(&self.value)
    }

    /// Splits the value like [`Entry::as_list`] and wraps each component as a path.
    #[must_use]
    pub fn as_path_list(&self) -> Vec<PathBuf> {
        self.as_path_list_by(PATH_SEPARATOR)
    }

    /// Splits the value on `sep` into paths, with the same empty-value rule as [`Entry::as_list`].
    #[must_use]
    pub fn as_path_list_by(&self, sep: char) -> Vec<PathBuf> {
        if self.value.is_empty() {
            return Vec::new();
        }
        self.value.split(sep).map(PathBuf::from).collect()
    }

    /// Parses the value as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Json`] wrapping the parser error on malformed input.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_json(&self) -> ConversionResult<serde_json::Value> {
        self.from_json_as()
    }

    /// Parses the value as JSON into any deserializable type.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Json`] on malformed input or a shape mismatch.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_json_as<T: DeserializeOwned>(&self) -> ConversionResult<T> {
        serde_json::from_str(&self.value).map_err(|source| ConversionError::Json {
            name: self.name.clone(),
            value: self.value.clone(),
            source,
        })
    }
}
