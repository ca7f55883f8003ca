// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use std::io::Write;

use crate::environment::Environment;
use crate::environment::backing::Backing;
use crate::error::Result;

/// Prints every variable in its diagnostic `NAME="value"` form, sorted by key.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run_list_command<B: Backing>(env: &Environment<B>, out: &mut impl Write) -> Result<()> {
    let mut items: Vec<_> = env.items().collect();
    items.sort_by(|a, b| a.0.cmp(&b.0));

    for (_, entry) in &items {
        writeln!(out, "{entry:?}")?;
    }
    Ok(())
}
