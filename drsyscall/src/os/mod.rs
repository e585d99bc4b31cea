// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Per-OS behavior: where parameters live, how success is decided and the
//! handlers for calls the tables cannot describe on their own.

use std::collections::HashMap;

use drsyscall_common::{ArgDesc, ArgType, Personality, SysargFlags, SyscallRecord};
use log::trace;

use crate::{
    arg::Location, host::MachineContext, index::Index, options::Os, syscall::SyscallType,
    walk::Walk,
};

pub(crate) mod linux;
pub(crate) mod windows;

/// A memory parameter about to be reported, offered to the complex-type
/// handlers first.
pub(crate) struct ArgAccess<'d> {
    pub desc: &'d ArgDesc,
    pub start: u64,
    /// Zero when the size is only known by scanning.
    pub size: u64,
}

/// Returns true when it took care of reporting the argument.
pub(crate) type ComplexHandler = fn(&mut Walk<'_>, &ArgAccess<'_>) -> bool;
pub(crate) type SyscallHandler = fn(&mut Walk<'_>);

/// Handlers keyed by complex type tag and by call name.
#[derive(Default)]
pub(crate) struct Handlers {
    complex: HashMap<ArgType, ComplexHandler>,
    pre: HashMap<&'static str, SyscallHandler>,
    post: HashMap<&'static str, SyscallHandler>,
}

impl Handlers {
    pub fn on_type(mut self, ty: impl Into<ArgType>, handler: ComplexHandler) -> Self {
        self.complex.insert(ty.into(), handler);
        self
    }

    pub fn on_pre(mut self, names: &[&'static str], handler: SyscallHandler) -> Self {
        for name in names {
            self.pre.insert(name, handler);
        }
        self
    }

    pub fn on_post(mut self, names: &[&'static str], handler: SyscallHandler) -> Self {
        for name in names {
            self.post.insert(name, handler);
        }
        self
    }

    pub fn arg_access(&self, walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
        if !access.desc.flags.contains(SysargFlags::COMPLEX_TYPE) {
            return false;
        }
        let Some(ty) = access.desc.arg_type() else {
            return false;
        };
        match self.complex.get(&ty) {
            Some(handler) => handler(walk, access),
            None => false,
        }
    }

    pub fn pre_syscall(&self, walk: &mut Walk<'_>) {
        if let Some(handler) = self.pre.get(dispatch_name(walk.syscall.name())) {
            trace!("pre handler for {}", walk.syscall.name());
            handler(walk);
        }
    }

    pub fn post_syscall(&self, walk: &mut Walk<'_>) {
        if let Some(handler) = self.post.get(dispatch_name(walk.syscall.name())) {
            trace!("post handler for {}", walk.syscall.name());
            handler(walk);
        }
    }
}

/// Secondary entries such as `ioctl.TCGETS` share their parent's handlers.
fn dispatch_name(name: &str) -> &str {
    name.split_once('.').map_or(name, |(parent, _)| parent)
}

pub(crate) trait Platform: Send + Sync {
    fn os(&self) -> Os;

    /// Raw argument slots captured at entry.
    fn arg_slots(&self) -> usize;

    /// Register arguments the unknown-call heuristic inspects.
    fn unknown_arg_slots(&self) -> usize;

    fn param_location(
        &self,
        personality: Personality,
        mc: &MachineContext,
        ordinal: usize,
    ) -> Option<Location>;

    fn syscall_type(&self, record: &SyscallRecord) -> SyscallType;

    /// Whether a call returning `result` succeeded. `sysarg` holds the entry
    /// arguments, all zero when answering without a live call.
    fn succeeded(&self, record: &SyscallRecord, result: u64, sysarg: &[u64]) -> bool;

    /// Success decided by a per-call rule, in which case the table-driven
    /// post pass does not apply.
    fn succeeded_custom(&self, _record: &SyscallRecord, _result: u64, _sysarg: &[u64]) -> bool {
        false
    }

    /// Whether a too-small buffer status left only the last parameter
    /// written.
    fn small_write_last(&self, _record: &SyscallRecord, _result: u64) -> bool {
        false
    }

    /// The error code reported for a failed call.
    fn error_code(&self, result: u64) -> u32;

    fn handlers(&self) -> &Handlers;

    /// Numbers and names of every call observable on this platform.
    fn build_index(&self) -> Index;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_names_share_handlers() {
        assert_eq!(dispatch_name("ioctl.TCGETS"), "ioctl");
        assert_eq!(dispatch_name("NtQueryKey.KeyBasicInformation"), "NtQueryKey");
        assert_eq!(dispatch_name("futex"), "futex");
    }
}
