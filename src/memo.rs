// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::cell::{Cell, RefCell};
use std::hash::Hash;

use cached::{Cached, UnboundCache};
use tracing::trace;

/// A caching wrapper around a unary function written in open-recursion
/// style.
///
/// The wrapped body receives the memoized entry point as its first argument
/// and must route its recursive calls through it, so every sub-result lands
/// in the same table:
///
/// ```
/// use memo_bench::Memoized;
///
/// let fib = Memoized::new(|fib: &dyn Fn(u64) -> u64, n: u64| {
///     if n < 2 {
///         n
///     } else {
///         fib(n - 1) + fib(n - 2)
///     }
/// });
///
/// assert_eq!(fib.get(50), 12_586_269_025);
/// assert_eq!(fib.len(), 51);
/// ```
///
/// The body is evaluated at most once per distinct key over the lifetime of
/// the handle. The table is never evicted and is not shared between
/// handles.
pub struct Memoized<K, V, F> {
    table: RefCell<UnboundCache<K, V>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
    f: F,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn with_body(f: F) -> Self {
        Self {
            table: RefCell::new(UnboundCache::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
            f,
        }
    }

    fn peek(&self, key: &K) -> Option<V> {
        self.table.borrow_mut().cache_get(key).cloned()
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let value = self.peek(key);
        let counter = match value {
            Some(_) => &self.hits,
            None => &self.misses,
        };
        counter.set(counter.get() + 1);
        value
    }

    fn store(&self, key: K, value: V) {
        let mut table = self.table.borrow_mut();
        table.cache_set(key, value);
        trace!(entries = table.cache_size(), "memo table grew");
    }

    /// Value stored for `key`, if any. Does not touch the hit and miss
    /// counters.
    pub fn cached(&self, key: &K) -> Option<V> {
        self.peek(key)
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.table.borrow().cache_size()
    }

    /// Whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lookups answered from the table.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    /// Lookups that had to fall through to the body.
    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Wraps a body that may fail.
    pub fn fallible<E>(f: F) -> Self
    where
        F: Fn(&dyn Fn(K) -> Result<V, E>, K) -> Result<V, E>,
    {
        Self::with_body(f)
    }

    /// Like [`Memoized::get`] for a fallible body.
    ///
    /// An error is returned unchanged and nothing is stored for `key`, so a
    /// later call evaluates the body again.
    pub fn try_get<E>(&self, key: K) -> Result<V, E>
    where
        F: Fn(&dyn Fn(K) -> Result<V, E>, K) -> Result<V, E>,
    {
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }

        let value = (self.f)(&|k| self.try_get::<E>(k), key.clone())?;
        self.store(key, value.clone());
        Ok(value)
    }
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: Fn(&dyn Fn(K) -> V, K) -> V,
{
    /// Wraps an infallible body.
    pub fn new(f: F) -> Self {
        Self::with_body(f)
    }

    /// Returns the value of the body at `key`, evaluating it only if the
    /// table does not hold `key` yet.
    pub fn get(&self, key: K) -> V {
        if let Some(value) = self.lookup(&key) {
            return value;
        }

        let value = (self.f)(&|k| self.get(k), key.clone());
        self.store(key, value.clone());
        value
    }
}
