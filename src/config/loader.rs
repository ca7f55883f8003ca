// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix() / .with_env_source()
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Prefixed variables are read through an [`Environment`], not straight from
//! the process table, so tests can supply their own.

use std::path::Path;

use anyhow::Context;

use super::Config;
use crate::environment::Environment;
use crate::environment::backing::Backing;
use crate::error::Result;

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_source: Option<(String, config::Map<String, String>)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_source: None,
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `{prefix}_*` overrides from the process-wide environment.
    #[must_use]
    pub fn with_env_prefix(self, prefix: &str) -> Self {
        self.with_env_source(prefix, crate::environment::env())
    }

    /// Reads `{prefix}_*` overrides from `env`.
    ///
    /// Sections and keys are separated by `__`, e.g. `ENVKIT_LOG__LEVEL`.
    #[must_use]
    pub fn with_env_source<B: Backing>(mut self, prefix: &str, env: &Environment<B>) -> Self {
        let vars = env
            .prefix_with(&format!("{prefix}_"), false)
            .into_iter()
            .collect();
        self.env_source = Some((prefix.to_string(), vars));
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Prefixed environment variables cannot be parsed.
    /// - The merged configuration has unknown keys or wrongly typed values.
    pub fn build(self) -> Result<Config> {
        let builder = match self.env_source {
            Some((prefix, vars)) => {
                tracing::debug!(prefix = %prefix, count = vars.len(), "loading config overrides from environment");
                self.builder.add_source(
                    config::Environment::with_prefix(&prefix)
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true)
                        .source(Some(vars)),
                )
            }
            None => self.builder,
        };
        let cfg = builder.build().context("failed to load configuration")?;
        let config: Config = cfg
            .try_deserialize()
            .context("invalid configuration")?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
