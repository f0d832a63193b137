// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! #Memo-Bench
//!
//! Times three ways of computing Fibonacci numbers: naive recursion,
//! recursion with a hand-written cache, and recursion routed through the
//! generic [`Memoized`] wrapper.
#![warn(missing_docs)]

pub mod clock;
mod config;
mod error;
pub mod fibonacci;
mod memo;
pub mod report;

pub use clock::{Millis, Stopwatch};
pub use config::{Config, DEFAULT_CONFIG};
pub use error::BenchError;
pub use fibonacci::{Index, MAX_INDEX};
pub use memo::Memoized;
pub use report::Timings;
