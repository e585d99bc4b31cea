// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use drsyscall_common::{
    sizes as sz,
    tables::linux_ioctl::{iowr, IPMICTL_RECEIVE_MSG, IPMICTL_SEND_COMMAND, SIOCGIFCONF, TCGETS},
    ParamType, Personality,
};

use super::{Trace, IN, INOUT, OUT};
use crate::{
    arg::Arg,
    host::FakeHost,
    memarg_test,
    options::{Options, Os},
    syscall::Sysnum,
};

const SYS_READ: i32 = 0;
const SYS_IOCTL: i32 = 16;
const SYS_READV: i32 = 19;
const SYS_SENDTO: i32 = 44;
const SYS_RECVFROM: i32 = 45;
const SYS_RECVMSG: i32 = 47;
const SYS_CLONE: i32 = 56;
const SYS_EXECVE: i32 = 59;
const SYS_SEMOP: i32 = 65;
const SYS_SEMCTL: i32 = 66;
const SYS_GETCWD: i32 = 79;
const SYS_CHDIR: i32 = 80;

const SYS_IOCTL_X86: i32 = 54;
const SYS_SOCKETCALL_X86: i32 = 102;

const CLONE_PARENT_SETTID: u64 = 0x0010_0000;
const CLONE_CHILD_SETTID: u64 = 0x0100_0000;
const GETALL: u64 = 13;

const TOP: u64 = u64::MAX;

fn no_memory(_: &FakeHost) {}

fn x86() -> Trace {
    Trace::new(
        Options::new()
            .with_os(Os::Linux)
            .with_personality(Personality::X86),
        FakeHost::new(100),
    )
}

fn with_semaphores() -> Trace {
    Trace::new(
        Options::new()
            .with_os(Os::Linux)
            .with_personality(Personality::X86_64),
        FakeHost::new(100).with_sem_count(7, 5),
    )
}

memarg_test!(
    read_writes_what_it_returns,
    Trace::linux(),
    SYS_READ,
    [3, 0x1000, 64],
    no_memory,
    [(1, 0x1000, 64, OUT)],
    10,
    no_memory,
    [(1, 0x1000, 10, OUT)]
);

memarg_test!(
    failed_read_writes_nothing,
    Trace::linux(),
    SYS_READ,
    [3, 0x1000, 64],
    no_memory,
    [(1, 0x1000, 64, OUT)],
    (-9i64) as u64,
    no_memory,
    []
);

memarg_test!(
    tcgets_fills_termios,
    Trace::linux(),
    SYS_IOCTL,
    [1, TCGETS as u64, 0x4000],
    no_memory,
    [(2, 0x4000, 36, OUT)],
    0,
    no_memory,
    [(2, 0x4000, 36, OUT)]
);

memarg_test!(
    recvfrom_trims_to_kernel_lengths,
    Trace::linux(),
    SYS_RECVFROM,
    [3, 0x1000, 128, 0, 0x2000, 0x3000],
    |host: &FakeHost| {
        host.map_zeroed(0x2000, 16);
        host.put_u32(0x3000, 16);
    },
    [(1, 0x1000, 128, OUT), (4, 0x2000, 16, OUT), (5, 0x3000, 4, INOUT)],
    20,
    |host: &FakeHost| host.put_u32(0x3000, 8),
    [(1, 0x1000, 20, OUT), (4, 0x2000, 8, OUT), (5, 0x3000, 4, INOUT)]
);

memarg_test!(
    poisoned_length_skips_only_its_buffer,
    Trace::linux(),
    SYS_RECVFROM,
    [3, 0x1000, 128, 0, 0x2000, 0x9000],
    no_memory,
    [(1, 0x1000, 128, OUT), (5, 0x9000, 4, INOUT)],
    20,
    no_memory,
    [(1, 0x1000, 20, OUT), (5, 0x9000, 4, INOUT)]
);

memarg_test!(
    readv_stops_at_bytes_transferred,
    Trace::linux(),
    SYS_READV,
    [3, 0x5000, 2],
    |host: &FakeHost| {
        host.put_u64(0x5000, 0x6000);
        host.put_u64(0x5008, 16);
        host.put_u64(0x5010, 0x7000);
        host.put_u64(0x5018, 32);
    },
    [(1, 0x5000, 32, OUT), (1, 0x6000, 16, OUT), (1, 0x7000, 32, OUT)],
    20,
    no_memory,
    [(1, 0x5000, 32, OUT), (1, 0x6000, 16, OUT), (1, 0x7000, 4, OUT)]
);

memarg_test!(
    getcwd_writes_returned_length,
    Trace::linux(),
    SYS_GETCWD,
    [0x1000, 4096],
    no_memory,
    [(0, 0x1000, 4096, OUT)],
    12,
    no_memory,
    [(0, 0x1000, 12, OUT)]
);

#[test]
fn ioctl_resolves_request_entry() {
    let mut trace = Trace::linux();
    trace.start(SYS_IOCTL, &[1, TCGETS as u64, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "ioctl.TCGETS");
    assert_eq!(syscall.number(), Sysnum::with_secondary(16, 0x5401));
    assert!(syscall.is_known());

    // Unlisted requests are not described.
    trace.start(SYS_IOCTL, &[1, 0xdead, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "<unknown>");
    assert!(!trace.state.known);
}

#[test]
fn sockaddr_is_typed() {
    let mut trace = Trace::linux();
    trace.host.map_zeroed(0x2000, 16);
    trace.host.put_u32(0x3000, 16);
    trace.start(SYS_RECVFROM, &[3, 0x1000, 128, 0, 0x2000, 0x3000]);
    let args = trace
        .engine
        .collect_memargs(&mut trace.state, &trace.host)
        .unwrap();

    let addr = args.iter().find(|a| a.ordinal == 4).unwrap();
    assert_eq!(addr.ty, ParamType::Sockaddr);
    assert_eq!(addr.type_name, Some("struct sockaddr"));
    let len = args.iter().find(|a| a.ordinal == 5).unwrap();
    assert_eq!(len.ty, ParamType::UnsignedInt);
    assert!(args.iter().all(|a| a.pre && a.valid));
}

#[test]
fn callback_can_stop_iteration() {
    let mut trace = Trace::linux();
    trace.host.map_zeroed(0x2000, 16);
    trace.host.put_u32(0x3000, 16);
    trace.start(SYS_RECVFROM, &[3, 0x1000, 128, 0, 0x2000, 0x3000]);

    let mut seen = 0;
    trace
        .engine
        .iterate_memargs(&mut trace.state, &trace.host, &mut |_: &Arg| {
            seen += 1;
            false
        })
        .unwrap();
    assert_eq!(seen, 1);
}

#[test]
fn exit_needs_entry_pass() {
    let mut trace = Trace::linux();
    trace.start(SYS_READ, &[3, 0x1000, 64]);
    trace.host.set_result(10);
    trace.engine.post_syscall(&mut trace.state, &trace.host);
    assert_eq!(
        trace
            .engine
            .collect_memargs(&mut trace.state, &trace.host)
            .err(),
        Some(crate::error::DrsysError::InvalidCall)
    );
}

#[test]
fn result_and_errno() {
    let mut trace = Trace::linux();
    trace.enter(SYS_READ, &[3, 0x1000, 64]);
    trace.exit((-14i64) as u64);
    let res = trace.engine.cur_syscall_result(&trace.state).unwrap();
    assert!(!res.success);
    assert_eq!(res.error_code, 14);

    // Inputs are never reported after the call.
    trace.enter(SYS_READ, &[3, 0x1000, 64]);
    let post = trace.exit(64);
    assert!(post.iter().all(|&(_, _, _, mode)| mode.contains(OUT)));
    assert!(!post.iter().any(|&(_, _, _, mode)| mode == IN));
}

memarg_test!(
    iovec_array_at_the_top_of_memory,
    Trace::linux(),
    SYS_READV,
    [3, TOP - 15, 4],
    |host: &FakeHost| {
        host.put_u64(TOP - 15, 0x6000);
        host.put_u64(TOP - 7, 8);
    },
    [(1, TOP - 15, 64, OUT), (1, 0x6000, 8, OUT)],
    8,
    no_memory,
    [(1, TOP - 15, 64, OUT), (1, 0x6000, 8, OUT)]
);

memarg_test!(
    msghdr_at_the_top_of_memory,
    Trace::linux(),
    SYS_RECVMSG,
    [3, TOP - 20, 0],
    no_memory,
    [],
    0,
    no_memory,
    []
);

memarg_test!(
    sockaddr_at_the_top_of_memory,
    Trace::linux(),
    SYS_SENDTO,
    [3, 0x1000, 16, 0, TOP - 1, 16],
    |host: &FakeHost| host.put_u16(TOP - 1, 2),
    [(1, 0x1000, 16, IN), (4, TOP - 1, 2, IN)],
    16,
    no_memory,
    []
);

memarg_test!(
    argv_at_the_top_of_memory,
    Trace::linux(),
    SYS_EXECVE,
    [0x1000, TOP - 7, 0],
    |host: &FakeHost| {
        host.map(0x1000, b"/bin/sh\0");
        host.put_u64(TOP - 7, 0x2000);
        host.map(0x2000, b"ab\0");
    },
    [(0, 0x1000, 8, IN), (1, 0x2000, 3, IN)],
    0,
    no_memory,
    []
);

memarg_test!(
    path_includes_terminator,
    Trace::linux(),
    SYS_CHDIR,
    [0x1000],
    |host: &FakeHost| host.map(0x1000, b"/tmp\0"),
    [(0, 0x1000, 5, IN)],
    0,
    no_memory,
    []
);

memarg_test!(
    path_at_the_top_of_memory,
    Trace::linux(),
    SYS_CHDIR,
    [TOP - 2],
    |host: &FakeHost| host.map(TOP - 2, b"abc"),
    [(0, TOP - 2, 3, IN)],
    0,
    no_memory,
    []
);

memarg_test!(
    msghdr_fields_before_and_after,
    Trace::linux(),
    SYS_RECVMSG,
    [3, 0x5000, 0],
    |host: &FakeHost| {
        host.put_u64(0x5000, 0x6000);
        host.put_u32(0x5008, 16);
        host.put_u64(0x5010, 0x7000);
        host.put_u64(0x5018, 1);
        host.put_u64(0x5020, 0x8000);
        host.put_u64(0x5028, 64);
        host.put_u64(0x7000, 0x9000);
        host.put_u64(0x7008, 100);
        host.map_zeroed(0x6000, 16);
    },
    [
        (1, 0x5000, 48, OUT),
        (1, 0x5030, 4, OUT),
        (1, 0x6000, 16, OUT),
        (1, 0x7000, 16, OUT),
        (1, 0x9000, 100, OUT),
        (1, 0x8000, 64, OUT)
    ],
    40,
    |host: &FakeHost| {
        host.put_u32(0x5008, 8);
        host.put_u64(0x5028, 24);
        host.put_u64(0x5020, 0);
    },
    [
        (1, 0x5030, 4, OUT),
        (1, 0x7000, 16, OUT),
        (1, 0x9000, 40, OUT),
        (1, 0x6000, 8, OUT),
        (1, 0x5028, 8, OUT),
        (1, 0x8000, 24, OUT)
    ]
);

memarg_test!(
    semctl_getall_sized_by_semaphore_count,
    with_semaphores(),
    SYS_SEMCTL,
    [7, 0, GETALL, 0x8000],
    no_memory,
    [(3, 0x8000, 10, OUT)],
    0,
    no_memory,
    [(3, 0x8000, 10, OUT)]
);

memarg_test!(
    semop_reads_every_operation,
    Trace::linux(),
    SYS_SEMOP,
    [7, 0x1000, 3],
    no_memory,
    [(1, 0x1000, 18, IN)],
    0,
    no_memory,
    []
);

memarg_test!(
    socketcall_reports_connect_arguments,
    x86(),
    SYS_SOCKETCALL_X86,
    [3, 0x5000],
    |host: &FakeHost| {
        host.put_u32(0x5000, 3);
        host.put_u32(0x5004, 0x6000);
        host.put_u32(0x5008, 16);
        host.put_u16(0x6000, 2);
    },
    [
        (1, 0x5000, 12, IN),
        (1, 0x6000, 2, IN),
        (1, 0x6002, 2, IN),
        (1, 0x6004, 4, IN)
    ],
    0,
    no_memory,
    []
);

memarg_test!(
    clone_writes_requested_tids,
    Trace::linux(),
    SYS_CLONE,
    [CLONE_PARENT_SETTID | CLONE_CHILD_SETTID, 0, 0x2000, 0x3000, 0],
    no_memory,
    [(2, 0x2000, 4, OUT), (3, 0x3000, 4, OUT)],
    1234,
    no_memory,
    []
);

memarg_test!(
    address_length_ignored_without_address,
    Trace::linux(),
    SYS_RECVFROM,
    [3, 0x1000, 128, 0, 0, 0x3000],
    no_memory,
    [(1, 0x1000, 128, OUT)],
    20,
    no_memory,
    [(1, 0x1000, 20, OUT), (5, 0x3000, 4, INOUT)]
);

memarg_test!(
    siocgifconf_writes_returned_length,
    Trace::linux(),
    SYS_IOCTL,
    [3, SIOCGIFCONF as u64, 0x4000],
    |host: &FakeHost| {
        host.put_u32(0x4000, 64);
        host.put_u64(0x4008, 0x5000);
    },
    [(2, 0x4000, 16, IN), (2, 0x5000, 64, OUT)],
    0,
    |host: &FakeHost| host.put_u32(0x4000, 32),
    [(2, 0x5000, 32, OUT)]
);

memarg_test!(
    ipmi_send_command_reads_address_and_data,
    Trace::linux(),
    SYS_IOCTL,
    [3, IPMICTL_SEND_COMMAND as u64, 0x4000],
    |host: &FakeHost| {
        host.put_u64(0x4000, 0x6000);
        host.put_u32(0x4008, 8);
        host.put_u16(0x401a, 3);
        host.put_u64(0x4020, 0x7000);
        host.put_u32(0x6000, 0x0c);
    },
    [(2, 0x4000, 40, IN), (2, 0x6000, 7, IN), (2, 0x7000, 3, IN)],
    0,
    no_memory,
    []
);

memarg_test!(
    ipmi_receive_at_the_top_of_memory,
    Trace::linux(),
    SYS_IOCTL,
    [3, IPMICTL_RECEIVE_MSG as u64, TOP - 7],
    no_memory,
    [(2, TOP - 7, 48, OUT)],
    0,
    no_memory,
    []
);

#[test]
fn pointer_sized_ioctl_codes_use_64_bit_layouts() {
    let mut trace = Trace::linux();
    trace.start(SYS_IOCTL, &[3, IPMICTL_RECEIVE_MSG as u64, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "ioctl.IPMICTL_RECEIVE_MSG");

    // The 32-bit encoding of the same request is not listed.
    let code = iowr(b'i', 12, sz::IPMI_RECV.get(Personality::X86));
    assert_ne!(code, IPMICTL_RECEIVE_MSG);
    let mut trace = x86();
    trace.start(SYS_IOCTL_X86, &[3, code as u64, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "<unknown>");
    assert!(!trace.state.known);
}
