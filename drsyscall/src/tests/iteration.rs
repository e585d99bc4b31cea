// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use drsyscall_common::{ParamMode, ParamType};

use super::{Trace, IN, OUT};
use crate::{
    arg::Arg,
    error::DrsysError,
    syscall::Sysnum,
};

const SYS_READ: i32 = 0;

#[test]
fn declared_parameters_without_values() {
    let trace = Trace::linux();
    let read = trace.engine.name_to_syscall("read").unwrap();
    let args = trace.engine.collect_arg_types(&read).unwrap();
    assert_eq!(args.len(), 4);

    let fd = &args[0];
    assert_eq!(fd.ordinal, 0);
    assert_eq!(fd.ty, ParamType::SignedInt);
    assert_eq!(fd.size, 4);
    assert_eq!(fd.mode, IN | ParamMode::INLINED);

    let buf = &args[1];
    assert_eq!(buf.ty, ParamType::Struct);
    assert_eq!(buf.mode, OUT);
    assert_eq!(buf.size, 8);

    assert_eq!(args[2].ty, ParamType::UnsignedInt);

    let ret = &args[3];
    assert!(ret.is_retval());
    assert_eq!(ret.ordinal, -1);
    assert_eq!(ret.mode, ParamMode::RETVAL | ParamMode::INLINED);

    for arg in &args {
        assert!(!arg.valid);
        assert_eq!(arg.value, 0);
        assert_eq!(arg.start_addr, 0);
        assert_eq!(arg.reg, None);
    }
}

#[test]
fn live_parameters_carry_values() {
    let mut trace = Trace::linux();
    trace.start(SYS_READ, &[0xffff_ffff_0000_0003, 0x1000, 64]);
    let args = trace.engine.collect_args(&mut trace.state, &trace.host).unwrap();

    let fd = &args[0];
    assert!(fd.valid && fd.pre);
    assert_eq!(fd.reg, Some("rdi"));
    // Only the declared four bytes of the register count.
    assert_eq!(fd.value, 3);
    assert_eq!(args[1].reg, Some("rsi"));
    assert_eq!(args[1].value, 0x1000);
    assert_eq!(args[2].value, 64);

    trace.host.set_result(12);
    trace.engine.post_syscall(&mut trace.state, &trace.host);
    let args = trace.engine.collect_args(&mut trace.state, &trace.host).unwrap();
    let ret = args.iter().find(|a| a.is_retval()).unwrap();
    assert!(!ret.pre);
    assert_eq!(ret.value, 12);
}

#[test]
fn parameters_of_unknown_calls_are_not_described() {
    let mut trace = Trace::linux();
    trace.start(4242, &[0x1000]);
    assert_eq!(
        trace.engine.collect_args(&mut trace.state, &trace.host).err(),
        Some(DrsysError::DetailsUnknown)
    );
}

#[test]
fn parameter_callback_can_stop() {
    let trace = Trace::linux();
    let read = trace.engine.name_to_syscall("read").unwrap();
    let mut seen = Vec::new();
    trace
        .engine
        .iterate_arg_types(&read, &mut |arg: &Arg| {
            seen.push(arg.ordinal);
            arg.ordinal < 1
        })
        .unwrap();
    assert_eq!(seen, vec![0, 1]);
}

#[test]
fn calls_in_table_order() {
    let trace = Trace::linux();
    let mut calls = Vec::new();
    trace.engine.iterate_syscalls(|num, syscall| {
        calls.push((num, syscall.name()));
        calls.len() < 4
    });
    assert_eq!(
        calls,
        vec![
            (Sysnum::new(219), "restart_syscall"),
            (Sysnum::new(60), "exit"),
            (Sysnum::new(57), "fork"),
            (Sysnum::new(SYS_READ), "read"),
        ]
    );
}

#[test]
fn secondary_entries_are_not_listed() {
    let trace = Trace::windows();
    let mut names = Vec::new();
    trace.engine.iterate_syscalls(|_, syscall| {
        names.push(syscall.name());
        true
    });
    assert!(names.contains(&"NtQueryKey"));
    assert!(!names.iter().any(|n| n.starts_with("NtQueryKey.")));
}
