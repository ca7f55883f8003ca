// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the `envkit` executable.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envkit.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. ENVKIT_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVKIT_ENVIRONMENT__BLANKIFY=true        → environment.blankify = true
//! ENVKIT_ENVIRONMENT__CASE_SENSITIVE=false → environment.case_sensitive = false
//! ENVKIT_LOG__LEVEL=4                      → log.level = 4
//! ```
//!
//! ```toml
//! [environment]
//! noneify = false
//!
//! [log]
//! level = 2
//! file = "envkit.log"
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::environment::options::Options;
use crate::error::Result;
pub use crate::logging::LogSettings;

use loader::ConfigLoader;

/// Name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envkit.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "ENVKIT";

/// Complete executable configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options for the environment being inspected.
    pub environment: Options,
    /// Logging options.
    pub log: LogSettings,
}

impl Config {
    /// Creates a loader for layering configuration sources.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or contains unknown keys.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }
}
