// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Runs every variant under the clock probe and writes the report.

use std::io::Write;

use tracing::{debug, warn};

use crate::clock::{self, Millis};
use crate::fibonacci::{self, Index};
use crate::{BenchError, Config};

/// Elapsed milliseconds of each variant, in the order they ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// [`fibonacci::naive`]
    pub naive: Millis,
    /// [`fibonacci::with_memoization`]
    pub with_memoization: Millis,
    /// [`fibonacci::memoized`]
    pub memoized: Millis,
}

fn timed<W, F>(
    out: &mut W,
    label: &str,
    n: Index,
    variant: F,
) -> Result<Millis, BenchError>
where
    W: Write,
    F: FnOnce(Index) -> Index,
{
    let elapsed = clock::try_measure(|| {
        writeln!(out, "{}({}) -> {}", label, n, variant(n))?;
        out.flush()
    })?;

    writeln!(out, "Duration: {}", elapsed)?;
    out.flush()?;

    debug!(variant = label, n, elapsed_ms = elapsed as u64, "variant done");
    Ok(elapsed)
}

/// Computes `fib(n)` with each variant and writes one value line and one
/// duration line per variant to `out`.
pub fn run<W: Write>(
    config: &Config,
    n: Index,
    out: &mut W,
) -> Result<Timings, BenchError> {
    if config.overflows(n) {
        warn!(n, max = config.max_index, "value wraps around");
    }
    if config.naive_is_slow(n) {
        warn!(n, "naive recursion will take a long time");
    }

    let naive = timed(out, "fibonocci", n, fibonacci::naive)?;
    let with_memoization = timed(
        out,
        "fibonocci_with_memoization",
        n,
        fibonacci::with_memoization,
    )?;

    let memo = fibonacci::memoized();
    let memoized = timed(out, "memoized", n, |n| memo.get(n))?;
    debug!(entries = memo.len(), "memoized table");

    Ok(Timings {
        naive,
        with_memoization,
        memoized,
    })
}
