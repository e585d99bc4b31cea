// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use drsyscall_common::{SyscallRecord, MAX_ARGS_IN_ENTRY, SYSCALL_NUM_ARG_STORE};

use crate::{host::MachineContext, syscall::Sysnum};

/// Number of arguments the unknown-syscall heuristic tracks. Windows calls
/// can take many more parameters than fit in registers.
pub(crate) const UNKNOWN_MAX_ARGS: usize = 26;

/// Values stashed between the pre and post passes of a single call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ExtraInfo {
    /// Size read from a struct field on the first pass.
    pub size_from_field: Option<u64>,
    /// Caller-provided sockaddr capacity.
    pub sockaddr: Option<u64>,
    pub msg_control: Option<u64>,
    pub msg_controllen: Option<u64>,
    pub socket: SocketStash,
}

/// Pointers a multiplexed socket call reads from its argument block at
/// entry, needed again once the call returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SocketStash {
    pub addr: u64,
    pub addrlen: u64,
    pub buf: u64,
    pub buflen: u64,
    pub msg: u64,
}

/// A copy of the memory an unknown call may write, taken at entry.
#[derive(Clone, Debug, Default)]
pub(crate) struct UnknownSnapshot {
    pub start: u64,
    pub bytes: Vec<u8>,
}

impl UnknownSnapshot {
    pub fn clear(&mut self) {
        self.start = 0;
        self.bytes.clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Live state of the system call a thread is executing. Owned by the host's
/// per-thread storage and reset at every entry.
#[derive(Debug)]
pub struct ThreadState {
    pub(crate) num: Sysnum,
    pub(crate) record: Option<&'static SyscallRecord>,
    pub(crate) known: bool,
    pub(crate) pre: bool,
    pub(crate) first_iter: bool,
    pub(crate) memargs_iterated: bool,
    pub(crate) mc: MachineContext,
    pub(crate) sysarg: [u64; SYSCALL_NUM_ARG_STORE],
    pub(crate) known_sz: [u64; MAX_ARGS_IN_ENTRY],
    pub(crate) extra: ExtraInfo,
    pub(crate) unknown: Vec<UnknownSnapshot>,
}

impl Default for ThreadState {
    fn default() -> Self {
        ThreadState::new()
    }
}

impl ThreadState {
    pub fn new() -> Self {
        ThreadState {
            num: Sysnum::default(),
            record: None,
            known: false,
            pre: true,
            first_iter: true,
            memargs_iterated: false,
            mc: MachineContext::default(),
            sysarg: [0; SYSCALL_NUM_ARG_STORE],
            known_sz: [0; MAX_ARGS_IN_ENTRY],
            extra: ExtraInfo::default(),
            unknown: vec![UnknownSnapshot::default(); UNKNOWN_MAX_ARGS],
        }
    }

    /// Prepares for a new call entry.
    pub(crate) fn reset(&mut self, mc: MachineContext) {
        self.pre = true;
        self.first_iter = true;
        self.memargs_iterated = false;
        self.mc = mc;
        self.extra = ExtraInfo::default();
        self.sysarg = [0; SYSCALL_NUM_ARG_STORE];
        self.known_sz = [0; MAX_ARGS_IN_ENTRY];
    }

    /// Whether the call is between entry and exit.
    pub fn is_pre(&self) -> bool {
        self.pre
    }

    pub fn sysnum(&self) -> Sysnum {
        self.num
    }

    pub(crate) fn sysarg(&self, i: usize) -> u64 {
        self.sysarg.get(i).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_stash() {
        let mut state = ThreadState::new();
        state.pre = false;
        state.first_iter = false;
        state.memargs_iterated = true;
        state.extra.sockaddr = Some(16);
        state.known_sz[1] = 64;

        state.reset(MachineContext {
            sp: 0x7000,
            ..Default::default()
        });

        assert!(state.pre);
        assert!(state.first_iter);
        assert!(!state.memargs_iterated);
        assert_eq!(state.extra, ExtraInfo::default());
        assert_eq!(state.known_sz[1], 0);
        assert_eq!(state.mc.sp, 0x7000);
    }
}
