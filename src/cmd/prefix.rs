// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prefix and map command implementations.
//!
//! Both print a JSON object with raw string values.

use std::io::Write;

use crate::cli::lookup::{MapArgs, PrefixArgs};
use crate::environment::Environment;
use crate::environment::backing::Backing;
use crate::error::Result;

/// Main handler for the prefix command.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn run_prefix_command<B: Backing>(
    args: &PrefixArgs,
    env: &Environment<B>,
    out: &mut impl Write,
) -> Result<()> {
    let matched = env.prefix_with(&args.prefix, !args.keep_case);
    tracing::debug!(prefix = %args.prefix, count = matched.len(), "prefix matched");
    writeln!(out, "{}", serde_json::to_string_pretty(&matched)?)?;
    Ok(())
}

/// Main handler for the map command.
///
/// # Errors
///
/// Returns an error if a variable is missing and neither blankify nor noneify
/// is active, or if serialization or writing fails.
pub fn run_map_command<B: Backing>(
    args: &MapArgs,
    env: &Environment<B>,
    out: &mut impl Write,
) -> Result<()> {
    let mapped = env.map(args.aliases.iter().map(|(alias, name)| (alias.as_str(), name)))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&mapped)?)?;
    Ok(())
}
