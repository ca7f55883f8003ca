// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> impl Write (stdout)
//!   get, list, prefix, map, self-test
//! ```
//!
//! Handlers take the environment and the output sink as arguments so they
//! can run against a fixture.

pub mod get;
pub mod list;
pub mod prefix;
pub mod selftest;
