// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

#![no_std]

pub mod flags;
pub mod kernel_types;
pub mod record;
pub mod sizes;
pub mod tables;
pub mod types;

pub use flags::{ParamMode, SysargFlags, SysinfoFlags};
pub use record::{
    AbiSize, ArgDesc, Misc, Numbers, Personality, SecondaryTable, SizeSpec, SyscallRecord,
};
pub use types::{ArgType, ParamType};

/// Number of raw argument slots captured at syscall entry. Linux only uses
/// the first six; Windows system calls take up to seventeen.
pub const SYSCALL_NUM_ARG_STORE: usize = 18;

/// Upper bound on the number of parameters a single record may declare.
pub const MAX_ARGS_IN_ENTRY: usize = 18;

/// Sentinel secondary number of the fallback entry of a secondary table.
pub const BASE_ENTRY_INDEX: i32 = -1;
