// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Limits the driver checks an index against before running.

use crate::fibonacci::{Index, MAX_INDEX};

/// Configuration used when no other is given.
pub static DEFAULT_CONFIG: Config = Config::new();

/// Parameters used to configure a benchmark run.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Config {
    /// Largest index whose value fits in an [`Index`]; larger ones wrap
    pub max_index: Index,

    /// Index above which the naive variant is expected to take very long
    pub naive_warn_index: Index,
}

impl Config {
    /// Creates a new [`Config`] with default values
    pub const fn new() -> Self {
        Self {
            max_index: MAX_INDEX,
            naive_warn_index: 45,
        }
    }

    /// Whether the value at `n` wraps around.
    pub const fn overflows(&self, n: Index) -> bool {
        n > self.max_index
    }

    /// Whether the naive variant should be flagged as slow for `n`.
    pub const fn naive_is_slow(&self, n: Index) -> bool {
        n > self.naive_warn_index
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
