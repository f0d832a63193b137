// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io::{self, Write};
use std::process::Command;

use memo_bench::{clock, report, BenchError, Config, Index, DEFAULT_CONFIG};

fn render(n: Index) -> (Vec<String>, report::Timings) {
    let mut out = Vec::new();
    let timings = report::run(&DEFAULT_CONFIG, n, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    (text.lines().map(str::to_string).collect(), timings)
}

fn values(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .step_by(2)
        .map(|line| line.rsplit(" -> ").next().unwrap())
        .collect()
}

#[test]
fn six_lines_in_order() {
    let (lines, timings) = render(10);

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "fibonocci(10) -> 55");
    assert_eq!(lines[1], format!("Duration: {}", timings.naive));
    assert_eq!(lines[2], "fibonocci_with_memoization(10) -> 55");
    assert_eq!(lines[3], format!("Duration: {}", timings.with_memoization));
    assert_eq!(lines[4], "memoized(10) -> 55");
    assert_eq!(lines[5], format!("Duration: {}", timings.memoized));
}

#[test]
fn scenarios() {
    for (n, expected) in
        [(0, "0"), (1, "1"), (10, "55"), (20, "6765"), (30, "832040")]
    {
        let (lines, _) = render(n);
        assert_eq!(values(&lines), [expected; 3], "n = {}", n);
    }
}

#[test]
fn memoized_variants_are_fast() {
    let (_, timings) = render(30);

    assert!(timings.with_memoization <= timings.naive);
    assert!(timings.memoized <= timings.naive);
}

#[test]
fn overflowing_index_still_reports() {
    // naive would take far too long here, so only check the memoized lines
    let mut out = Vec::new();
    let memo = memo_bench::fibonacci::memoized();
    let n = memo_bench::MAX_INDEX + 1;
    clock::try_measure(|| {
        writeln!(out, "memoized({}) -> {}", n, memo.get(n))
    })
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "memoized(94) -> 1293530146158671551\n"
    );
    assert!(Config::new().overflows(n));
}

struct Broken;

impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_propagated() {
    let result = report::run(&DEFAULT_CONFIG, 5, &mut Broken);

    match result {
        Err(BenchError::Io(e)) => {
            assert_eq!(e.kind(), io::ErrorKind::BrokenPipe)
        }
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn binary_prints_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_memo-bench"))
        .arg("20")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "fibonocci(20) -> 6765");
    assert_eq!(lines[2], "fibonocci_with_memoization(20) -> 6765");
    assert_eq!(lines[4], "memoized(20) -> 6765");
    for line in [lines[1], lines[3], lines[5]] {
        let ms = line.strip_prefix("Duration: ").unwrap();
        assert!(ms.parse::<u128>().is_ok(), "{}", line);
    }
}

#[test]
fn binary_requires_an_index() {
    let missing = Command::new(env!("CARGO_BIN_EXE_memo-bench"))
        .output()
        .unwrap();
    assert!(!missing.status.success());
    assert!(missing.stdout.is_empty());

    let garbage = Command::new(env!("CARGO_BIN_EXE_memo-bench"))
        .arg("ten")
        .output()
        .unwrap();
    assert!(!garbage.status.success());
    assert!(garbage.stdout.is_empty());
}

#[test]
fn binary_rejects_negative_index() {
    let output = Command::new(env!("CARGO_BIN_EXE_memo-bench"))
        .arg("-1")
        .output()
        .unwrap();

    // a usage error, not an abort
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
