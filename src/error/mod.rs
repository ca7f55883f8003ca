// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              EnvError (24 bytes)
//!                     |
//!      +--------+-----+------+------------+-------------+
//!      |        |            |            |             |
//!      v        v            v            v             v
//! KeyNotFound ReadOnly  InvalidName  InvalidValue   Conversion
//!  Box<str>   Box<str>   Box<str>     Box<str>   Box<ConversionError>
//!
//! ConversionError (unboxed internally):
//!   Bool, Int, Float, Json, Parse
//!   each carries name + raw value
//! ```
//!
//! Lookups fail with `KeyNotFound` only when no miss policy is active.
//! Conversion errors are raised when a view is accessed, never at lookup.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used by the executable.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Result type for entry conversion views.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Top-level library error type.
///
/// Names are `Box<str>` and conversion errors are boxed to keep this enum at 24 bytes.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Variable is missing and neither blankify nor noneify is active.
    #[error("environment variable not found: {name}")]
    KeyNotFound { name: Box<str> },

    /// Write attempted on an environment that is not writable.
    #[error("environment is read-only, cannot modify '{name}'")]
    ReadOnly { name: Box<str> },

    /// Name cannot be stored in an environment table.
    #[error("invalid environment variable name: {name:?}")]
    InvalidName { name: Box<str> },

    /// Value cannot be stored in an environment table.
    #[error("value for '{name}' contains a NUL byte")]
    InvalidValue { name: Box<str> },

    /// A typed view of an entry failed to convert.
    #[error("{0}")]
    Conversion(#[from] Box<ConversionError>),
}

impl EnvError {
    pub(crate) fn key_not_found(name: &str) -> Self {
        Self::KeyNotFound { name: name.into() }
    }

    pub(crate) fn read_only(name: &str) -> Self {
        Self::ReadOnly { name: name.into() }
    }

    pub(crate) fn invalid_name(name: &str) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub(crate) fn invalid_value(name: &str) -> Self {
        Self::InvalidValue { name: name.into() }
    }

    /// Returns the variable name the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::KeyNotFound { name }
            | Self::ReadOnly { name }
            | Self::InvalidName { name }
            | Self::InvalidValue { name } => &**name,
            Self::Conversion(err) => err.name(),
        }
    }
}

impl From<ConversionError> for EnvError {
    fn from(err: ConversionError) -> Self {
        Self::Conversion(Box::new(err))
    }
}

// --- Conversion Errors ---

/// Failure of a typed view on an entry.
///
/// Every variant keeps the variable name and the raw value so the caller
/// does not have to look them up again.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Value is not in the truthy or falsy set.
    #[error("cannot convert {name}={value:?} to bool: expected one of 1/yes/true/on or 0/no/false/off")]
    Bool { name: String, value: String },

    /// Value is not an integer.
    #[error("cannot convert {name}={value:?} to int: {source}")]
    Int {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Value is not a float.
    #[error("cannot convert {name}={value:?} to float: {source}")]
    Float {
        name: String,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Value is not valid JSON, or does not match the requested shape.
    #[error("cannot parse {name}={value:?} as JSON: {source}")]
    Json {
        name: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic `FromStr` conversion failed.
    #[error("cannot convert {name}={value:?} to {target}: {message}")]
    Parse {
        name: String,
        value: String,
        target: &'static str,
        message: String,
    },
}

impl ConversionError {
    /// Returns the name of the variable that failed to convert.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bool { name, .. }
            | Self::Int { name, .. }
            | Self::Float { name, .. }
            | Self::Json { name, .. }
            | Self::Parse { name, .. } => name.as_str(),
        }
    }

    /// Returns the raw value that failed to convert.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Bool { value, .. }
            | Self::Int { value, .. }
            | Self::Float { value, .. }
            | Self::Json { value, .. }
            | Self::Parse { value, .. } => value.as_str(),
        }
    }
}
