// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Get command implementation.

use std::io::Write;

use anyhow::bail;

use crate::cli::lookup::{GetArgs, View};
use crate::entry::Entry;
use crate::environment::Environment;
use crate::environment::backing::Backing;
use crate::error::Result;

/// Main handler for the get command.
///
/// # Errors
///
/// Returns an error if the variable is missing (under any miss policy other
/// than blankify), if the conversion fails, or if writing fails.
pub fn run_get_command<B: Backing>(
    args: &GetArgs,
    env: &Environment<B>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(entry) = env.get(&args.name)? else {
        bail!("{} is not set", args.name);
    };

    for line in render(&entry, args.view)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Renders an entry through `view` as output lines.
///
/// Scalar views produce one line; list views produce one line per element
/// and none for an empty value.
///
/// # Errors
///
/// Returns the conversion error of the view.
pub fn render(entry: &Entry, view: View) -> Result<Vec<String>> {
    let lines = match view {
        View::Str => vec![entry.to_string()],
        View::Int => vec![entry.as_int()?.to_string()],
        View::Float => vec![entry.as_float()?.to_string()],
        View::Bool => vec![entry.as_bool()?.to_string()],
        View::Json => vec![serde_json::to_string_pretty(&entry.from_json()?)?],
        View::List => entry.as_list(),
        View::Path => vec![entry.as_path().display().to_string()],
        View::PathList => entry
            .as_path_list()
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    };
    Ok(lines)
}
