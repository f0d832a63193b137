// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Wall-clock probe for timing a single action.

use std::time::Instant;

// Durations are reported as whole milliseconds, the same integer type
// `Duration::as_millis` hands out.

/// Type alias for elapsed milliseconds
pub type Millis = u128;

#[derive(Debug, Clone, Copy)]
/// Monotonic reading taken when the stopwatch was started
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Starts a new `Stopwatch` at the current instant.
    pub fn start() -> Stopwatch {
        Stopwatch {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since [`Stopwatch::start`], truncated.
    pub fn elapsed_ms(&self) -> Millis {
        self.started.elapsed().as_millis()
    }
}

/// Runs `action` once and returns how many milliseconds it took.
pub fn measure<F>(action: F) -> Millis
where
    F: FnOnce(),
{
    let watch = Stopwatch::start();
    action();
    watch.elapsed_ms()
}

/// Runs a fallible `action` once and returns how many milliseconds it took.
///
/// The error of a failing action is handed back unchanged.
pub fn try_measure<F, E>(action: F) -> Result<Millis, E>
where
    F: FnOnce() -> Result<(), E>,
{
    let watch = Stopwatch::start();
    action()?;
    Ok(watch.elapsed_ms())
}
