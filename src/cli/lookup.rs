// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the lookup commands and self-test.

use clap::{Args, ValueEnum};

/// How `get` renders a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// The raw value.
    #[default]
    Str,
    Int,
    Float,
    /// One of 1/yes/true/on or 0/no/false/off.
    Bool,
    /// Pretty-printed JSON.
    Json,
    /// One element per line, split on the path separator.
    List,
    Path,
    /// One path per line, split on the path separator.
    PathList,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Conversion to apply before printing.
    #[arg(long = "as", value_enum, default_value_t = View::Str)]
    pub view: View,
}

/// Arguments for the `prefix` command.
#[derive(Debug, Clone, Args)]
pub struct PrefixArgs {
    /// Literal prefix to match.
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Keeps the original case of names instead of lowercasing them.
    #[arg(long = "keep-case")]
    pub keep_case: bool,
}

/// Arguments for the `map` command.
#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    /// Alias assignments such as `username=USER`.
    #[arg(value_name = "ALIAS=NAME", required = true, value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,
}

/// Arguments for the `self-test` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SelfTestArgs {
    /// Prints every check, not only failures.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((alias, name)) if !alias.is_empty() && !name.is_empty() => {
            Ok((alias.to_string(), name.to_string()))
        }
        _ => Err(format!("expected ALIAS=NAME, got '{s}'")),
    }
}
