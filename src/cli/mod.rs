// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envkit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envkit [global options] <command>
//! get NAME [--as VIEW]
//! list
//! prefix PREFIX [--keep-case]
//! map ALIAS=NAME...
//! self-test [-v]
//! version
//! ```

pub mod global;
pub mod lookup;


use crate::cli::global::GlobalOptions;
use crate::cli::lookup::{GetArgs, MapArgs, PrefixArgs, SelfTestArgs};
use clap::{Parser, Subcommand};

/// Typed access to environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "envkit",
    author,
    version,
    about = "Typed access to environment variables",
    long_about = "envkit Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads environment variables and converts them on demand.\n\n\
                  `envkit get NAME --as int` prints NAME as an integer, failing\n\
                  if it is not one. See `envkit <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  envkit looks for `envkit.toml` in the current directory. Additional\n\
                  files can be given with --config and are loaded after it, later\n\
                  files overriding earlier ones. ENVKIT_* variables such as\n\
                  ENVKIT_ENVIRONMENT__BLANKIFY=true override the files, and command\n\
                  line flags override everything. Use --no-default-config to skip\n\
                  `envkit.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Prints one variable, optionally converted.
    Get(GetArgs),

    /// Lists all variables as NAME="value".
    List,

    /// Prints variables starting with a prefix as JSON.
    Prefix(PrefixArgs),

    /// Prints variables under alias names as JSON.
    Map(MapArgs),

    /// Runs the built-in self-test suite.
    #[command(name = "self-test")]
    SelfTest(SelfTestArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
