// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          get / list / prefix / map
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config     selftest     |
//!              '------+-------------+------'
//!                     |             |
//!                     v             v
//!   +-----------------------------------------+
//!   |  environment  Environment, Backing, env |
//!   |       |                                 |
//!   |       v                                 |
//!   |  entry        Entry + typed views       |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! ```no_run
//! let env = envkit::env();
//! if let Some(home) = env.get("HOME")? {
//!     println!("{home:?} -> {}", home.as_path().display());
//! }
//! # Ok::<(), envkit::error::EnvError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod entry;
pub mod environment;
pub mod error;
pub mod logging;
pub mod selftest;

pub use entry::Entry;
pub use environment::backing::{Backing, ProcessEnv};
pub use environment::options::{MissPolicy, Options};
pub use environment::{Environment, env};
pub use error::{ConversionError, EnvError, EnvResult};
