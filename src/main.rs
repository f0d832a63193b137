// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;

use clap::Parser;
use memo_bench::{report, BenchError, Config, Index};
use tracing::{info, Level};

/// Times naive, hand-memoized and generically memoized Fibonacci.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position in the sequence to compute
    #[arg(
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    n: i64,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), BenchError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();

    // Negative input is rejected by the parser.
    let n = args.n as Index;
    info!(n, "running benchmark");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&Config::default(), n, &mut out)?;
    Ok(())
}
