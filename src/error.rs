// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
/// The errors that can happen while running the benchmark
pub enum BenchError {
    /// Input / Output error
    #[error("Could not write the report: {0}")]
    Io(#[from] io::Error),
}
