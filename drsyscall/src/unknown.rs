// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Best-effort write detection for calls the tables do not describe.
//!
//! Every parameter that looks like a pointer gets the memory behind it
//! copied at entry, and bytes that differ at exit are reported as written.
//! Another thread touching the same memory defeats this, as does the
//! kernel writing back the same value unless sentinels are enabled.

use drsyscall_common::{ParamType, SysargFlags};
use log::{debug, trace, warn};

use crate::{
    arg::Location,
    engine::Engine,
    host::Host,
    options::Options,
    state::ThreadState,
    walk::Walk,
};

/// Longest region tracked per parameter.
pub(crate) const TRACK_MAX_SIZE: usize = 2048;

/// Written over undefined bytes at entry so that writes of the value the
/// memory already held are caught.
pub(crate) const SENTINEL: u8 = 0xab;

fn param_defined(engine: &Engine, state: &ThreadState, ordinal: usize) -> bool {
    let options = engine.options();
    match engine
        .platform()
        .param_location(engine.personality(), &state.mc, ordinal)
    {
        Some(Location::Register(_)) => options.register_defined(ordinal),
        Some(Location::Stack(addr)) => options.byte_defined(addr),
        None => false,
    }
}

fn overlaps_earlier(state: &ThreadState, ordinal: usize, start: u64, end: u64) -> bool {
    state.unknown[..ordinal]
        .iter()
        .filter(|s| s.len() > 0)
        .any(|s| s.start < end && s.start.saturating_add(s.len() as u64) > start)
}

/// Snapshots what every pointer-like parameter points at.
pub(crate) fn pre(walk: &mut Walk<'_>) {
    let engine = walk.engine;
    let options = engine.options();
    // A second pass would snapshot the sentinels.
    if !options.analyze_unknown_syscalls || !walk.first_iter() {
        return;
    }
    debug!("unknown system call #{} {}", walk.state.num, walk.syscall.name());

    let slots = engine
        .platform()
        .unknown_arg_slots()
        .min(walk.state.unknown.len());
    for i in 0..slots {
        walk.state.unknown[i].clear();
        if !param_defined(engine, walk.state, i) {
            continue;
        }
        let Some(start) = engine.param_value(walk.host, &walk.state.mc, i) else {
            continue;
        };
        if start % 4 != 0 || !options.byte_addressable(start) {
            continue;
        }

        // The region may mix inputs and outputs, so it only ends at
        // unaddressable memory, an earlier parameter or the size cap.
        let mut len = 0;
        while len < TRACK_MAX_SIZE {
            // Snapshots stay below the top of the address space.
            let Some(end) = start.checked_add(len as u64 + 1) else {
                break;
            };
            let addr = end - 1;
            if overlaps_earlier(walk.state, i, start, end) || !options.byte_addressable(addr) {
                break;
            }
            len += 1;
        }
        if len == 0 {
            continue;
        }
        trace!("pre-unknown #{}: param {i} = {start:#x} {len} bytes", walk.state.num);

        let mut bytes = vec![0; len];
        if !walk.host.safe_read(start, &mut bytes) {
            warn!("unable to read syscall arg {start:#x}-{:#x}", start + len as u64);
            continue;
        }
        walk.state.unknown[i].start = start;
        walk.state.unknown[i].bytes = bytes;

        if options.syscall_sentinels {
            write_sentinels(options, walk.host, start, len);
        }
    }
}

fn write_sentinels(options: &Options, host: &dyn Host, start: u64, len: usize) {
    for j in 0..len as u64 {
        let addr = start + j;
        if !options.byte_undefined(addr) {
            continue;
        }
        // A read-only page holds no outputs.
        if !host.safe_write(addr, &[SENTINEL]) {
            warn!("unable to write sentinel value at {addr:#x}");
            break;
        }
    }
}

/// Whether the kernel wrote a byte that held `before` at entry.
fn changed(options: &Options, after: u8, before: u8) -> bool {
    if options.syscall_sentinels {
        after != SENTINEL
    } else {
        after != before
    }
}

/// Reports the tracked bytes the call changed. Undefined bytes are the
/// only candidates: defined ones are inputs as far as anyone can tell.
pub(crate) fn post(walk: &mut Walk<'_>) {
    let engine = walk.engine;
    let options = engine.options();
    if !options.analyze_unknown_syscalls {
        return;
    }
    // Parameters are analyzed even when the call failed, since some
    // failing calls still write outputs.
    for i in 0..walk.state.unknown.len() {
        let snapshot = &walk.state.unknown[i];
        if snapshot.len() == 0 {
            continue;
        }
        let start = snapshot.start;
        let before = snapshot.bytes.clone();
        let mut after = vec![0; before.len()];
        if !walk.host.safe_read(start, &mut after) {
            warn!("unable to read app sysarg at {start:#x}");
            continue;
        }

        let mut last_dword = None;
        for (j, (&a, &b)) in after.iter().zip(&before).enumerate() {
            let addr = start + j as u64;
            if !options.byte_undefined(addr) || !changed(options, a, b) {
                continue;
            }
            let (ptr, size) = if options.syscall_dword_granularity {
                // Unchanged bytes, often zeros, are easy to miss, so the
                // containing dword is reported.
                let dword = addr & !3;
                if last_dword == Some(dword) {
                    continue;
                }
                last_dword = Some(dword);
                (dword, 4)
            } else {
                (addr, 1)
            };
            if !walk.report_memarg_type(
                i as i32,
                SysargFlags::WRITE,
                ptr,
                size,
                None,
                ParamType::Unknown,
                None,
            ) {
                return;
            }
        }
    }
}

/// Puts back the application bytes the sentinels replaced where the
/// kernel left them alone.
pub(crate) fn restore(engine: &Engine, state: &mut ThreadState, host: &dyn Host) {
    let options = engine.options();
    if !options.analyze_unknown_syscalls {
        return;
    }
    let tracked = state.unknown.iter().filter(|s| s.len() > 0);
    for snapshot in tracked.filter(|_| options.syscall_sentinels) {
        let start = snapshot.start;
        let mut after = vec![0; snapshot.len()];
        // Can't read means can't write either.
        if !host.safe_read(start, &mut after) {
            warn!("unable to read app sysarg at {start:#x}");
            continue;
        }
        for (j, (&a, &b)) in after.iter().zip(&snapshot.bytes).enumerate() {
            let addr = start + j as u64;
            if !options.byte_undefined(addr) || changed(options, a, b) {
                continue;
            }
            if a == SENTINEL && b != SENTINEL && !host.safe_write(addr, &[b]) {
                warn!("unable to restore app sysval at {addr:#x}");
            }
        }
    }
    for snapshot in state.unknown.iter_mut() {
        snapshot.clear();
    }
}
