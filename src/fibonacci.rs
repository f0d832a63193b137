// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Three ways of computing `fib(n)`.
//!
//! All of them follow `fib(0) = 0`, `fib(1) = 1`,
//! `fib(n) = fib(n - 1) + fib(n - 2)` and wrap around silently once the
//! value no longer fits in an [`Index`].

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::Memoized;

/// Type alias for both the position in the sequence and the value there
pub type Index = u64;

/// Largest index whose value still fits in an [`Index`].
pub const MAX_INDEX: Index = 93;

/// Open-recursion body of the sequence, taking its recursive entry point
/// as the first argument.
pub type Recurrence = fn(&dyn Fn(Index) -> Index, Index) -> Index;

/// Handle returned by [`memoized`].
pub type MemoizedFibonacci = Memoized<Index, Index, Recurrence>;

/// Standard recursion, exponential in `n`.
pub fn naive(n: Index) -> Index {
    if n <= 1 {
        return n;
    }
    naive(n - 1).wrapping_add(naive(n - 2))
}

thread_local! {
    // Never cleared; lives as long as the (single) benchmark thread.
    static MEMO: RefCell<BTreeMap<Index, Index>> = RefCell::new(BTreeMap::new());
}

/// Recursion guarded by a private cache that outlives the call.
pub fn with_memoization(n: Index) -> Index {
    if n <= 1 {
        return n;
    }

    if let Some(value) = MEMO.with(|memo| memo.borrow().get(&n).copied()) {
        return value;
    }

    let value = with_memoization(n - 1).wrapping_add(with_memoization(n - 2));
    MEMO.with(|memo| memo.borrow_mut().insert(n, value));
    value
}

/// Number of entries the private cache of [`with_memoization`] holds on
/// this thread.
pub fn with_memoization_cache_len() -> usize {
    MEMO.with(|memo| memo.borrow().len())
}

/// The recurrence, calling back into `fib` for sub-problems.
pub fn recurrence(fib: &dyn Fn(Index) -> Index, n: Index) -> Index {
    if n <= 1 {
        return n;
    }
    fib(n - 1).wrapping_add(fib(n - 2))
}

/// A fresh [`Memoized`] handle over [`recurrence`].
pub fn memoized() -> MemoizedFibonacci {
    Memoized::new(recurrence as Recurrence)
}
