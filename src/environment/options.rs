// envkit: Typed access to environment variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options fixed when an environment is constructed.
//!
//! ```text
//! blankify ──yes──> Blank (Entry with "")
//!    │no
//! noneify  ──yes──> Null  (None)
//!    │no
//!    └────────────> Raise (KeyNotFound)
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Whether names are compared case-sensitively unless configured otherwise.
pub const DEFAULT_CASE_SENSITIVE: bool = !cfg!(windows);

/// What a lookup of a missing variable produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    /// An entry with an empty value.
    Blank,
    /// `None`.
    Null,
    /// [`EnvError::KeyNotFound`](crate::error::EnvError::KeyNotFound).
    Raise,
}

/// Environment options.
///
/// `blankify` and `noneify` may both be set; `blankify` takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    #[builder(setters(name = with_blankify), default = false)]
    blankify: bool,
    #[builder(setters(name = with_noneify), default = true)]
    noneify: bool,
    #[builder(setters(name = with_writable), default = false)]
    writable: bool,
    #[builder(setters(name = with_case_sensitive), default = DEFAULT_CASE_SENSITIVE)]
    case_sensitive: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Options {
    #[must_use]
    pub const fn blankify(&self) -> bool {
        self.blankify
    }

    #[must_use]
    pub const fn noneify(&self) -> bool {
        self.noneify
    }

    #[must_use]
    pub const fn writable(&self) -> bool {
        self.writable
    }

    #[must_use]
    pub const fn readonly(&self) -> bool {
        !self.writable
    }

    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The active miss policy: blankify first, else noneify, else raise.
    #[must_use]
    pub const fn miss_policy(&self) -> MissPolicy {
        if self.blankify {
            MissPolicy::Blank
        } else if self.noneify {
            MissPolicy::Null
        } else {
            MissPolicy::Raise
        }
    }
}
