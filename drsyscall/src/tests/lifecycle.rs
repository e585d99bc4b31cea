// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::sync::Arc;

use drsyscall_common::Personality;
use serial_test::serial;

use crate::{
    error::{DrsysError, InitStatus},
    host::FakeHost,
    options::{Options, Os},
};

fn linux() -> Options {
    Options::new()
        .with_os(Os::Linux)
        .with_personality(Personality::X86_64)
}

#[test]
#[serial]
fn init_is_reference_counted() {
    let host = FakeHost::new(1);
    let (first, status) = crate::init(linux(), &host).unwrap();
    assert_eq!(status, InitStatus::Success);

    // Later options are ignored while the engine lives.
    let (second, _) = crate::init(linux().with_personality(Personality::X86), &host).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.personality(), Personality::X86_64);

    crate::exit().unwrap();
    crate::exit().unwrap();
    assert_eq!(crate::exit(), Err(DrsysError::InvalidCall));

    // The handed out engine outlives the teardown.
    assert!(first.name_to_syscall("read").is_ok());

    let (third, _) = crate::init(linux().with_personality(Personality::X86), &host).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.personality(), Personality::X86);
    crate::exit().unwrap();
}

#[test]
#[serial]
fn exit_without_init() {
    assert_eq!(crate::exit(), Err(DrsysError::InvalidCall));
}
