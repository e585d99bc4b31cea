// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Parameter and memory iteration, the main way callers learn what a call
//! reads and writes.

use drsyscall_common::{ParamMode, ParamType, SysargFlags, SysinfoFlags};
use log::{debug, trace};

use crate::{
    arg::{type_name_for, Arg},
    engine::Engine,
    error::{DrsysError, Result},
    host::{Host, MachineContext},
    interp,
    state::ThreadState,
    syscall::{Syscall, Sysnum},
    unknown,
    walk::{truncate, Callback, Walk},
};

impl Engine {
    /// Enumerates the declared parameters of `syscall` and its return
    /// value, with types but no values.
    pub fn iterate_arg_types(&self, syscall: &Syscall, cb: &mut Callback<'_>) -> Result<()> {
        self.iterate_args_common(None, syscall, cb)
    }

    /// Enumerates the parameters of the call in flight with their values,
    /// plus the return value once the call returned.
    ///
    /// Parameters only known by looking inside others, such as the real
    /// arguments of multiplexed calls, are reported too.
    pub fn iterate_args(
        &self,
        state: &mut ThreadState,
        host: &dyn Host,
        cb: &mut Callback<'_>,
    ) -> Result<()> {
        let syscall = self.cur_syscall(state);
        let Some(record) = state.record else {
            return Err(DrsysError::DetailsUnknown);
        };
        self.iterate_args_common(Some(&*state), &syscall, cb)?;

        // Replays the entry pass so handlers report the parameters they
        // decode, and so what the memory pass needs is stashed on the
        // first iteration.
        let mut nop = |_: &Arg| true;
        let arg_cb: &mut Callback<'_> = cb;
        let mut walk = Walk::new(self, state, host, syscall, &mut nop, Some(arg_cb)).with_pre(true);
        interp::pre_reads_and_writes(&mut walk, record);
        self.platform().handlers().pre_syscall(&mut walk);
        walk.state.first_iter = false;
        Ok(())
    }

    fn iterate_args_common(
        &self,
        live: Option<&ThreadState>,
        syscall: &Syscall,
        cb: &mut Callback<'_>,
    ) -> Result<()> {
        if !syscall.is_in_table() {
            return Err(DrsysError::DetailsUnknown);
        }
        let record = syscall.record();
        let p = self.personality();
        let ptr = self.ptr_size();
        trace!("iterating over args for system call #{} {}", syscall.number(), record.name);

        let (mc, pre, valid) = match live {
            Some(state) => (state.mc, state.pre, true),
            None => (MachineContext::default(), true, false),
        };

        // Inlined values count as inputs like everything else: there are no
        // inlined outputs.
        let mut descs = record.args.iter().peekable();
        for i in 0..record.arg_count as usize {
            let mut arg = Arg::new(*syscall, mc, pre, valid);
            arg.ordinal = i as i32;
            arg.size = ptr;
            arg.ty = ParamType::Unknown;
            arg.mode = ParamMode::IN;
            if let Some(state) = live {
                arg.set_location(self.platform().param_location(p, &state.mc, i));
                arg.value64 = state.sysarg(i);
                arg.value = truncate(arg.value64, ptr);
            }

            if let Some(desc) = descs.next_if(|d| d.param as usize == i) {
                if desc.flags.carries_type() {
                    arg.ty = desc
                        .arg_type()
                        .map_or(ParamType::Unknown, |t| t.param_type());
                } else if !desc.flags.contains(SysargFlags::INLINED) {
                    // Untyped pointers are taken to point at structures.
                    arg.ty = ParamType::Struct;
                }
                if desc.flags.contains(SysargFlags::INLINED) {
                    debug_assert!(
                        desc.fixed_size(p).is_some_and(|s| s > 0),
                        "{}: inlined parameter {i} needs a size",
                        record.name
                    );
                    if let Some(size) = desc.fixed_size(p).filter(|&s| s > 0) {
                        arg.size = size as u64;
                        // The upper bits are whatever the register held.
                        if arg.size < ptr {
                            arg.value = truncate(arg.value, arg.size);
                            arg.value64 = arg.value;
                        }
                    }
                }
                arg.mode = ParamMode::from_flags(desc.flags);
                arg.enum_name = desc.enum_name;
                while descs.next_if(|d| d.param == desc.param).is_some() {}
            }
            arg.type_name = type_name_for(arg.ty, None);

            if !cb(&arg) {
                break;
            }
        }

        let live_post = live.is_some_and(|s| !s.pre);
        if live.is_none() || !record.flags.contains(SysinfoFlags::RET_TYPE_VARIES) {
            let (ty, size) = record.ret.exported();
            let mut arg = Arg::new(*syscall, mc, pre, valid);
            arg.ordinal = -1;
            arg.size = size.map_or(ptr, |s| s as u64);
            arg.ty = ty;
            arg.type_name = type_name_for(ty, None);
            arg.mode = ParamMode::RETVAL | ParamMode::INLINED;
            if let Some(state) = live.filter(|_| live_post) {
                let value = self.cur_syscall_result(state)?.value;
                arg.value64 = value;
                arg.value = value;
            }
            cb(&arg);
        }
        Ok(())
    }

    /// Enumerates the memory the call in flight reads (at entry) or wrote
    /// (at exit).
    ///
    /// At entry, output buffers are reported too so their capacity can be
    /// checked. The exit pass relies on what the entry pass stashed and
    /// fails with [`DrsysError::InvalidCall`] without one.
    pub fn iterate_memargs(
        &self,
        state: &mut ThreadState,
        host: &dyn Host,
        cb: &mut Callback<'_>,
    ) -> Result<()> {
        if !state.memargs_iterated {
            if !state.pre {
                return Err(DrsysError::InvalidCall);
            }
            state.memargs_iterated = true;
        }

        let syscall = self.cur_syscall(state);
        let record = state.record;
        let known = state.known;
        let mut walk = Walk::new(self, state, host, syscall, cb, None);

        if walk.pre() {
            if let Some(record) = record {
                interp::pre_reads_and_writes(&mut walk, record);
                self.platform().handlers().pre_syscall(&mut walk);
            }
            if !known {
                unknown::pre(&mut walk);
            }
        } else {
            if let Some(record) = record {
                let result = walk.result();
                let sysarg = walk.state.sysarg;
                if !self.platform().succeeded(record, result, &sysarg) {
                    debug!(
                        "system call #{} {} failed with {result:#x}",
                        walk.state.num, record.name
                    );
                } else if !self.platform().succeeded_custom(record, result, &sysarg) {
                    interp::post_reads_and_writes(&mut walk, record);
                }
                self.platform().handlers().post_syscall(&mut walk);
            }
            if !known {
                unknown::post(&mut walk);
            }
        }
        walk.state.first_iter = false;
        Ok(())
    }

    /// Walks every call the active tables number, in table order.
    pub fn iterate_syscalls(&self, mut cb: impl FnMut(Sysnum, &Syscall) -> bool) {
        for &(num, record) in self.index().primary_entries() {
            if !cb(num, &self.handle(record, num)) {
                break;
            }
        }
    }

    /// [`Engine::iterate_memargs`] collected into a vector.
    pub fn collect_memargs(&self, state: &mut ThreadState, host: &dyn Host) -> Result<Vec<Arg>> {
        let mut args = Vec::new();
        self.iterate_memargs(state, host, &mut |arg: &Arg| {
            args.push(arg.clone());
            true
        })?;
        Ok(args)
    }

    /// [`Engine::iterate_args`] collected into a vector.
    pub fn collect_args(&self, state: &mut ThreadState, host: &dyn Host) -> Result<Vec<Arg>> {
        let mut args = Vec::new();
        self.iterate_args(state, host, &mut |arg: &Arg| {
            args.push(arg.clone());
            true
        })?;
        Ok(args)
    }

    /// [`Engine::iterate_arg_types`] collected into a vector.
    pub fn collect_arg_types(&self, syscall: &Syscall) -> Result<Vec<Arg>> {
        let mut args = Vec::new();
        self.iterate_arg_types(syscall, &mut |arg: &Arg| {
            args.push(arg.clone());
            true
        })?;
        Ok(args)
    }
}
