// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{fs, path::PathBuf};

use drsyscall_common::{
    kernel_types::windows::{STATUS_BUFFER_TOO_SMALL, STATUS_PENDING},
    ParamType, Personality,
};

use super::{Trace, IN, OUT};
use crate::{
    error::InitStatus,
    host::FakeHost,
    memarg_test,
    options::{Options, Os},
    syscall::{SyscallType, Sysnum},
};

const NT_READ_FILE: i32 = 0x06;
const NT_OPEN_KEY: i32 = 0x12;
const NT_QUERY_KEY: i32 = 0x16;

const NT_USER_GET_GUI_THREAD_INFO: i32 = 0x1060;
const NT_USER_GET_KEY_NAME_TEXT: i32 = 0x1061;
const NT_USER_CALL_ONE_PARAM: i32 = 0x1062;

const STATUS_ACCESS_DENIED: u64 = 0xC000_0022;

/// A sysnum file numbering a few win32k calls, keyed on NtGetContextThread.
struct Win32k {
    dir: PathBuf,
    trace: Trace,
}

impl Win32k {
    fn new(tag: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("drsys-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sysnums.drsyscall");
        fs::write(
            &path,
            indoc::indoc! {"
                DrSyscall Number File
                1
                NtGetContextThread
                START=0xf2
                NtUserCheckMenuItem=0x1050
                NtUserGetAtomName=0x1051
                NtUserGetDC=0x100a
                NtGdiBitBlt=0x1008
                NtClose=0x0f
                NtUserGetGUIThreadInfo=0x1060
                NtUserGetKeyNameText=0x1061
                NtUserCallOneParam=0x1062
                NtUserCallOneParam.GETCURSORPOS=0x1c
                NtGdiDescribePixelFormat=0x1070
                NtGdiGetRasterizerCaps=0x1071
                =END
            "},
        )
        .unwrap();

        let host = FakeHost::new(100).with_wrapper_number("NtGetContextThread", 0xf2);
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_sysnum_file(&path);
        Win32k {
            dir,
            trace: Trace::new(options, host),
        }
    }
}

impl Drop for Win32k {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

memarg_test!(
    nt_read_file_written_size_from_io_status,
    Trace::windows(),
    NT_READ_FILE,
    [0x44, 0, 0, 0, 0x2000, 0x3000, 0x100, 0, 0],
    |_: &FakeHost| {},
    [(4, 0x2000, 16, OUT), (5, 0x3000, 0x100, OUT)],
    0,
    |host: &FakeHost| {
        host.put_u64(0x2000, 0);
        host.put_u64(0x2008, 0x40);
    },
    [(4, 0x2000, 16, OUT), (5, 0x3000, 0x40, OUT)]
);

memarg_test!(
    too_small_buffer_writes_only_needed_length,
    Trace::windows(),
    NT_QUERY_KEY,
    [0x44, 2, 0x3000, 0x40, 0x4000],
    |_: &FakeHost| {},
    [(2, 0x3000, 0x40, OUT), (4, 0x4000, 4, OUT)],
    STATUS_BUFFER_TOO_SMALL as u64,
    |host: &FakeHost| host.put_u32(0x4000, 0x90),
    [(4, 0x4000, 4, OUT)]
);

memarg_test!(
    failed_status_writes_nothing,
    Trace::windows(),
    NT_READ_FILE,
    [0x44, 0, 0, 0, 0x2000, 0x3000, 0x100, 0, 0],
    |_: &FakeHost| {},
    [(4, 0x2000, 16, OUT), (5, 0x3000, 0x100, OUT)],
    STATUS_ACCESS_DENIED,
    |_: &FakeHost| {},
    []
);

#[test]
fn parameters_past_registers_come_from_the_stack() {
    let mut trace = Trace::windows();
    trace.start(NT_READ_FILE, &[0x44, 0, 0, 0, 0x2000, 0x3000, 0x100, 0, 0]);
    let engine = &trace.engine;
    assert_eq!(engine.pre_syscall_arg(&trace.state, 0), Ok(0x44));
    assert_eq!(engine.pre_syscall_arg(&trace.state, 4), Ok(0x2000));
    assert_eq!(engine.pre_syscall_arg(&trace.state, 6), Ok(0x100));

    let args = engine.collect_args(&mut trace.state, &trace.host).unwrap();
    let length = args.iter().find(|a| a.ordinal == 6).unwrap();
    assert_eq!(length.reg, None);
    assert_eq!(length.start_addr, super::STACK + 8 * 7);
    assert_eq!(length.size, 4);
    let handle = args.iter().find(|a| a.ordinal == 0).unwrap();
    assert_eq!(handle.reg, Some("r10"));
    assert_eq!(handle.ty, ParamType::Handle);
}

#[test]
fn information_class_picks_secondary_entry() {
    let mut trace = Trace::windows();
    trace.start(NT_QUERY_KEY, &[0x44, 2, 0x3000, 0x40, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "NtQueryKey.KeyFullInformation");
    assert_eq!(syscall.number(), Sysnum::with_secondary(NT_QUERY_KEY, 2));

    trace.start(NT_QUERY_KEY, &[0x44, 99, 0x3000, 0x40, 0x4000]);
    let syscall = trace.engine.cur_syscall(&trace.state);
    assert_eq!(syscall.name(), "NtQueryKey.UNKNOWN");
    assert_eq!(syscall.number(), Sysnum::with_secondary(NT_QUERY_KEY, -1));
}

#[test]
fn names_round_trip_ignoring_case() {
    let trace = Trace::windows();
    let engine = &trace.engine;
    for name in ["NtReadFile", "ntreadfile", "ZwReadFile"] {
        let syscall = engine.name_to_syscall(name).unwrap();
        assert_eq!(syscall.name(), "NtReadFile");
        assert_eq!(syscall.number(), Sysnum::new(NT_READ_FILE));
        let again = engine.number_to_syscall(syscall.number()).unwrap();
        assert_eq!(again.name(), syscall.name());
    }

    let full = engine
        .name_to_syscall("NtQueryKey.KeyFullInformation")
        .unwrap();
    assert_eq!(full.number(), Sysnum::with_secondary(NT_QUERY_KEY, 2));
}

#[test]
fn pending_counts_as_success() {
    let trace = Trace::windows();
    let read = trace.engine.name_to_syscall("NtReadFile").unwrap();
    assert_eq!(trace.engine.syscall_succeeded(&read, 0), Ok(true));
    assert_eq!(
        trace.engine.syscall_succeeded(&read, STATUS_PENDING as u64),
        Ok(true)
    );
    assert_eq!(
        trace.engine.syscall_succeeded(&read, STATUS_ACCESS_DENIED),
        Ok(false)
    );
}

#[test]
fn minus_one_and_zero_fail() {
    let win = Win32k::new("fail-codes");
    let engine = &win.trace.engine;

    let check = engine.name_to_syscall("NtUserCheckMenuItem").unwrap();
    assert_eq!(engine.syscall_succeeded(&check, 0), Ok(true));
    assert_eq!(engine.syscall_succeeded(&check, u64::MAX), Ok(false));
    assert_eq!(engine.syscall_succeeded(&check, -2i64 as u64), Ok(true));

    let atom = engine.name_to_syscall("GetAtomName").unwrap();
    assert_eq!(atom.name(), "NtUserGetAtomName");
    assert_eq!(engine.syscall_succeeded(&atom, 0), Ok(false));
    assert_eq!(engine.syscall_succeeded(&atom, 5), Ok(true));

    let dc = engine.name_to_syscall("NtUserGetDC").unwrap();
    assert_eq!(engine.syscall_succeeded(&dc, 0), Ok(false));
}

#[test]
fn win32k_call_types() {
    let win = Win32k::new("call-types");
    let engine = &win.trace.engine;
    assert_eq!(
        engine.name_to_syscall("NtUserGetDC").unwrap().syscall_type(),
        SyscallType::User
    );
    assert_eq!(
        engine.name_to_syscall("NtGdiBitBlt").unwrap().syscall_type(),
        SyscallType::Graphics
    );
    assert_eq!(
        engine.name_to_syscall("ZwClose").unwrap().syscall_type(),
        SyscallType::Kernel
    );
}

#[test]
fn unknown_kernel_is_a_warning() {
    let options = Options::new()
        .with_os(Os::Windows)
        .with_personality(Personality::X86_64)
        .with_windows_build(1);
    let (engine, status) = crate::engine::Engine::new(options, &FakeHost::new(1)).unwrap();
    assert_eq!(status, InitStatus::WarningUnsupportedKernel);
    assert!(engine.name_to_syscall("NtReadFile").is_err());
}

/// An OBJECT_ATTRIBUTES at 0x2000 naming a UNICODE_STRING at 0x3000.
fn object_attributes(host: &FakeHost) {
    host.put_u32(0x2000, 48);
    host.put_u64(0x2008, 0);
    host.put_u64(0x2010, 0x3000);
    host.put_u32(0x2018, 0x40);
    host.put_u64(0x2020, 0);
    host.put_u64(0x2028, 0);
    host.put_u16(0x3000, 8);
    host.put_u16(0x3002, 10);
    host.put_u64(0x3008, 0x4000);
}

memarg_test!(
    object_attributes_fields_and_name,
    Trace::windows(),
    NT_OPEN_KEY,
    [0x1000, 0x20019, 0x2000],
    object_attributes,
    [
        (0, 0x1000, 8, OUT),
        (2, 0x2000, 4, IN),
        (2, 0x2008, 8, IN),
        (2, 0x2010, 8, IN),
        (2, 0x2018, 4, IN),
        (2, 0x2020, 8, IN),
        (2, 0x2028, 8, IN),
        (2, 0x3000, 2, IN),
        (2, 0x3008, 8, IN),
        (2, 0x4000, 8, IN),
    ],
    0,
    |_: &FakeHost| {},
    [(0, 0x1000, 8, OUT)]
);

memarg_test!(
    object_name_at_the_top_of_memory_is_skipped,
    Trace::windows(),
    NT_OPEN_KEY,
    [0x1000, 0x20019, 0x2000],
    |host: &FakeHost| {
        object_attributes(host);
        host.put_u64(0x2010, u64::MAX - 4);
    },
    [
        (0, 0x1000, 8, OUT),
        (2, 0x2000, 4, IN),
        (2, 0x2008, 8, IN),
        (2, 0x2010, 8, IN),
        (2, 0x2018, 4, IN),
        (2, 0x2020, 8, IN),
        (2, 0x2028, 8, IN),
    ],
    0,
    |_: &FakeHost| {},
    [(0, 0x1000, 8, OUT)]
);

memarg_test!(
    object_attributes_at_the_top_of_memory_are_skipped,
    Trace::windows(),
    NT_OPEN_KEY,
    [0x1000, 0x20019, u64::MAX - 20],
    |_: &FakeHost| {},
    [(0, 0x1000, 8, OUT)],
    0,
    |_: &FakeHost| {},
    [(0, 0x1000, 8, OUT)]
);

#[test]
fn structure_sized_by_its_own_field() {
    let mut win = Win32k::new("in-field");
    win.trace.host.put_u32(0x5000, 72);
    assert_eq!(
        win.trace.enter(NT_USER_GET_GUI_THREAD_INFO, &[0, 0x5000]),
        vec![(1, 0x5000, 4, IN), (1, 0x5000, 72, OUT)]
    );
    assert_eq!(win.trace.exit(1), vec![(1, 0x5000, 72, OUT)]);
}

#[test]
fn size_field_past_the_top_of_memory_reads_as_empty() {
    let mut win = Win32k::new("in-field-top");
    assert_eq!(
        win.trace.enter(NT_USER_GET_GUI_THREAD_INFO, &[0, u64::MAX - 1]),
        vec![(1, u64::MAX - 1, 4, IN)]
    );
    assert!(win.trace.exit(1).is_empty());
}

#[test]
fn returned_length_leaves_out_the_terminator() {
    let mut win = Win32k::new("size-plus-1");
    assert_eq!(
        win.trace.enter(NT_USER_GET_KEY_NAME_TEXT, &[0x20, 0x6000, 16]),
        vec![(1, 0x6000, 32, OUT)]
    );
    // Five characters plus the terminator.
    assert_eq!(win.trace.exit(5), vec![(1, 0x6000, 12, OUT)]);
}

#[test]
fn usercall_code_picks_secondary_entry() {
    let mut win = Win32k::new("usercall");
    assert_eq!(
        win.trace.enter(NT_USER_CALL_ONE_PARAM, &[0x5000, 0x1c]),
        vec![(0, 0x5000, 8, OUT)]
    );
    let syscall = win.trace.engine.cur_syscall(&win.trace.state);
    assert_eq!(syscall.name(), "NtUserCallOneParam.GETCURSORPOS");
    assert_eq!(
        syscall.number(),
        Sysnum::with_secondary(NT_USER_CALL_ONE_PARAM, 0x1c)
    );
    assert_eq!(win.trace.exit(1), vec![(0, 0x5000, 8, OUT)]);

    let by_code = win.trace.engine.name_to_syscall("GETCURSORPOS").unwrap();
    assert_eq!(by_code.name(), "NtUserCallOneParam.GETCURSORPOS");

    win.trace.start(NT_USER_CALL_ONE_PARAM, &[0x5000, 0x77]);
    let syscall = win.trace.engine.cur_syscall(&win.trace.state);
    assert_eq!(syscall.name(), "NtUserCallOneParam.UNKNOWN");
}

#[test]
fn graphics_calls_with_their_own_success() {
    let win = Win32k::new("gdi-success");
    let engine = &win.trace.engine;

    let describe = engine.name_to_syscall("DescribePixelFormat").unwrap();
    assert_eq!(engine.syscall_succeeded(&describe, 4), Ok(true));
    assert_eq!(engine.syscall_succeeded(&describe, 0), Ok(false));

    let caps = engine.name_to_syscall("NtGdiGetRasterizerCaps").unwrap();
    assert_eq!(engine.syscall_succeeded(&caps, 1), Ok(true));
    assert_eq!(engine.syscall_succeeded(&caps, 2), Ok(false));
}
