// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE        ← Additional config files (can repeat)
//! --log-level N        ← Console verbosity (0-5)
//! --log-file FILE      ← Also log to FILE
//! --blankify           ← Missing variables read as ""
//! --no-noneify         ← Missing variables are errors
//! --case-insensitive   ← Fold names before lookup
//!
//! Precedence: CLI flags > ENVKIT_* > --config > envkit.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables loading of envkit.toml from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Missing variables read as empty values instead of nothing.
    #[arg(long)]
    pub blankify: bool,

    /// Missing variables are errors (unless --blankify is given).
    #[arg(long = "no-noneify")]
    pub no_noneify: bool,

    /// Compare variable names case-insensitively.
    #[arg(long = "case-insensitive", conflicts_with = "case_sensitive")]
    pub case_insensitive: bool,

    /// Compare variable names case-sensitively.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,
}

impl GlobalOptions {
    /// Converts command-line options to configuration overrides.
    ///
    /// Keys are dotted configuration paths; only flags that were given appear.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("log.level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("log.file", path.display().to_string()));
        }

        if self.blankify {
            overrides.push(("environment.blankify", "true".to_string()));
        }

        if self.no_noneify {
            overrides.push(("environment.noneify", "false".to_string()));
        }

        if self.case_insensitive {
            overrides.push(("environment.case_sensitive", "false".to_string()));
        } else if self.case_sensitive {
            overrides.push(("environment.case_sensitive", "true".to_string()));
        }

        overrides
    }
}
