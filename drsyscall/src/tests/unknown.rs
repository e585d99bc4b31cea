// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use super::{Trace, OUT};
use crate::{options::Options, unknown::SENTINEL};

const UNDESCRIBED: i32 = 4242;
const BUF: u64 = 0x10000;

/// Eight addressable bytes at `BUF`, the upper half undefined.
fn tracing_options() -> Options {
    Options::new()
        .with_unknown_syscall_analysis(true)
        .with_byte_addressable(|a| (BUF..BUF + 8).contains(&a))
        .with_byte_undefined(|a| (BUF + 4..BUF + 8).contains(&a))
}

fn unknown_call(options: Options) -> Trace {
    let trace = Trace::linux_with(options);
    trace.host.map(BUF, &[1, 2, 3, 4, 5, 6, 7, 8]);
    trace
}

#[test]
fn sentinels_catch_writes() {
    let mut trace = unknown_call(tracing_options().with_sentinels(true));
    assert!(trace.enter(UNDESCRIBED, &[BUF]).is_empty());
    assert_eq!(
        trace.host.bytes(BUF, 8).unwrap(),
        vec![1, 2, 3, 4, SENTINEL, SENTINEL, SENTINEL, SENTINEL]
    );

    // The kernel writes one byte, with the value it already held.
    trace.host.map(BUF + 4, &[5]);
    assert_eq!(trace.exit(0), vec![(0, BUF + 4, 1, OUT)]);
    assert_eq!(trace.host.bytes(BUF, 8).unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn without_sentinels_only_changes_show() {
    let mut trace = unknown_call(tracing_options());
    assert!(trace.enter(UNDESCRIBED, &[BUF]).is_empty());
    assert_eq!(trace.host.bytes(BUF, 8).unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    trace.host.map(BUF + 4, &[5, 0x11]);
    assert_eq!(trace.exit(0), vec![(0, BUF + 5, 1, OUT)]);
}

#[test]
fn dword_granularity() {
    let options = tracing_options()
        .with_sentinels(true)
        .with_dword_granularity(true);
    let mut trace = unknown_call(options);
    trace.enter(UNDESCRIBED, &[BUF]);

    trace.host.map(BUF + 5, &[0, 0]);
    assert_eq!(trace.exit(0), vec![(0, BUF + 4, 4, OUT)]);
    assert_eq!(trace.host.bytes(BUF + 4, 4).unwrap(), vec![5, 0, 0, 8]);
}

#[test]
fn defined_bytes_are_never_outputs() {
    let mut trace = unknown_call(tracing_options());
    trace.enter(UNDESCRIBED, &[BUF]);
    trace.host.map(BUF, &[0xff; 4]);
    assert!(trace.exit(0).is_empty());
}

#[test]
fn analysis_is_opt_in() {
    let options = Options::new()
        .with_byte_addressable(|a| (BUF..BUF + 8).contains(&a))
        .with_byte_undefined(|a| (BUF..BUF + 8).contains(&a));
    let mut trace = unknown_call(options);
    trace.enter(UNDESCRIBED, &[BUF]);
    trace.host.map(BUF, &[0xff; 8]);
    assert!(trace.exit(0).is_empty());
}

#[test]
fn snapshot_stops_below_the_top_of_memory() {
    const TOP: u64 = u64::MAX - 7;
    let options = Options::new()
        .with_unknown_syscall_analysis(true)
        .with_byte_addressable(|a| a >= TOP)
        .with_byte_undefined(|a| a >= TOP);
    let mut trace = Trace::linux_with(options);
    trace.host.map(TOP, &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(trace.enter(UNDESCRIBED, &[TOP]).is_empty());

    trace.host.map(TOP + 2, &[0x11]);
    trace.host.map(u64::MAX, &[0x22]);
    assert_eq!(trace.exit(0), vec![(0, TOP + 2, 1, OUT)]);
}
