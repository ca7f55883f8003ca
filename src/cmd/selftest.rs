// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Self-test command implementation.

use std::io::Write;

use anyhow::bail;

use crate::cli::lookup::SelfTestArgs;
use crate::error::Result;
use crate::selftest::Report;

/// Runs the self-test suite and prints its report.
///
/// # Errors
///
/// Returns an error if any check failed or writing fails.
pub fn run_self_test_command(args: &SelfTestArgs, out: &mut impl Write) -> Result<()> {
    let report = crate::selftest::run();
    write_report(&report, args.verbose, out)?;

    if !report.is_success() {
        bail!("{} self-test check(s) failed", report.failed());
    }
    Ok(())
}

/// Writes failures (and passes when `verbose`) followed by a summary line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report(report: &Report, verbose: bool, out: &mut impl Write) -> Result<()> {
    for outcome in report.outcomes() {
        match &outcome.error {
            None if verbose => writeln!(out, "ok    {}", outcome.name)?,
            None => {}
            Some(message) => writeln!(out, "FAIL  {}: {message}", outcome.name)?,
        }
    }
    writeln!(
        out,
        "{} passed, {} failed",
        report.passed(),
        report.failed()
    )?;
    Ok(())
}
