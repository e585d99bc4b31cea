// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! The reporting side of argument interpretation: every region or value
//! the interpreter and the handlers find goes through a [`Walk`].

use drsyscall_common::{ArgDesc, ParamMode, ParamType, Personality, SysargFlags};
use log::{trace, warn};

use crate::{
    arg::{type_name_for, Arg},
    engine::Engine,
    host::{self, Host},
    state::ThreadState,
    syscall::Syscall,
};

/// Iteration callback. Returning false stops the iteration.
pub type Callback<'c> = dyn FnMut(&Arg) -> bool + 'c;

/// Longest string scanned when no bound is known.
pub(crate) const MAX_PATH: u64 = 4096;

/// One pass over a call's arguments: the live state, the host to read
/// through and the callbacks to report to.
pub(crate) struct Walk<'w> {
    pub engine: &'w Engine,
    pub state: &'w mut ThreadState,
    pub host: &'w dyn Host,
    pub syscall: Syscall,
    mem_cb: &'w mut Callback<'w>,
    arg_cb: Option<&'w mut Callback<'w>>,
    /// Phase the reports claim. Usually the state's, but parameter
    /// iteration replays the entry pass after the call returned.
    pre: bool,
    pub abort: bool,
}

impl<'w> Walk<'w> {
    pub fn new(
        engine: &'w Engine,
        state: &'w mut ThreadState,
        host: &'w dyn Host,
        syscall: Syscall,
        mem_cb: &'w mut Callback<'w>,
        arg_cb: Option<&'w mut Callback<'w>>,
    ) -> Self {
        let pre = state.pre;
        Walk {
            engine,
            state,
            host,
            syscall,
            mem_cb,
            arg_cb,
            pre,
            abort: false,
        }
    }

    pub fn with_pre(mut self, pre: bool) -> Self {
        self.pre = pre;
        self
    }

    pub fn personality(&self) -> Personality {
        self.engine.personality()
    }

    pub fn ptr_size(&self) -> u64 {
        self.personality().pointer_size() as u64
    }

    pub fn pre(&self) -> bool {
        self.pre
    }

    pub fn first_iter(&self) -> bool {
        self.state.first_iter
    }

    pub fn sysarg(&self, i: usize) -> u64 {
        self.state.sysarg(i)
    }

    pub fn result(&self) -> u64 {
        self.state.mc.result
    }

    /// The return value sign-extended from the traced code's register width.
    pub fn signed_result(&self) -> i64 {
        if self.ptr_size() == 4 {
            self.result() as u32 as i32 as i64
        } else {
            self.result() as i64
        }
    }

    pub fn read(&self, addr: u64, buf: &mut [u8]) -> bool {
        self.host.safe_read(addr, buf)
    }

    pub fn read_u16(&self, addr: u64) -> Option<u16> {
        host::read_u16(self.host, addr)
    }

    pub fn read_u32(&self, addr: u64) -> Option<u32> {
        host::read_u32(self.host, addr)
    }

    /// Reads a pointer-sized value of the traced code.
    pub fn read_ptr(&self, addr: u64) -> Option<u64> {
        host::read_uint(self.host, addr, self.ptr_size() as usize)
    }

    pub fn read_uint(&self, addr: u64, size: usize) -> Option<u64> {
        host::read_uint(self.host, addr, size)
    }

    /// Reads the pointer `offset` bytes into the object at `base`. Objects
    /// running past the top of the address space read as unmapped.
    pub fn read_ptr_at(&self, base: u64, offset: u64) -> Option<u64> {
        self.read_ptr(base.checked_add(offset)?)
    }

    pub fn read_u32_at(&self, base: u64, offset: u64) -> Option<u32> {
        self.read_u32(base.checked_add(offset)?)
    }

    pub fn read_u16_at(&self, base: u64, offset: u64) -> Option<u16> {
        self.read_u16(base.checked_add(offset)?)
    }

    /// Whether reporting should go on. The first pass keeps running after a
    /// callback asks to stop so that handlers still stash what the post pass
    /// needs.
    fn keep_going(&self) -> bool {
        self.state.first_iter || !self.abort
    }

    #[allow(clippy::too_many_arguments)]
    pub fn report_memarg_ex(
        &mut self,
        ordinal: i32,
        mode: ParamMode,
        ptr: u64,
        size: u64,
        id: Option<&'static str>,
        ty: ParamType,
        type_name: Option<&'static str>,
        containing_type: ParamType,
    ) -> bool {
        if !self.pre && !mode.contains(ParamMode::OUT) {
            return true;
        }

        trace!(
            "{} {}: {:#x}-{:#x} {:?} {}",
            self.syscall.name(),
            id.unwrap_or(""),
            ptr,
            ptr.wrapping_add(size),
            mode,
            ty.name()
        );

        if !self.abort {
            let mut arg = Arg::new(self.syscall, self.state.mc, self.pre, true);
            arg.ordinal = ordinal;
            arg.mode = mode;
            arg.ty = ty;
            arg.type_name = type_name_for(ty, type_name);
            arg.containing_type = containing_type;
            arg.arg_name = id;
            arg.start_addr = ptr;
            arg.size = size;
            if !(self.mem_cb)(&arg) {
                self.abort = true;
            }
        }
        self.keep_going()
    }

    pub fn report_memarg_type(
        &mut self,
        ordinal: i32,
        flags: SysargFlags,
        ptr: u64,
        size: u64,
        id: Option<&'static str>,
        ty: ParamType,
        type_name: Option<&'static str>,
    ) -> bool {
        self.report_memarg_ex(
            ordinal,
            ParamMode::from_flags(flags),
            ptr,
            size,
            id,
            ty,
            type_name,
            ParamType::Invalid,
        )
    }

    /// Reports a field of the structure `desc` points at.
    pub fn report_field(
        &mut self,
        desc: &ArgDesc,
        ptr: u64,
        size: u64,
        id: Option<&'static str>,
        ty: ParamType,
        type_name: Option<&'static str>,
    ) -> bool {
        self.report_memarg_ex(
            desc.param as i32,
            ParamMode::from_flags(desc.flags),
            ptr,
            size,
            id,
            ty,
            type_name,
            desc_type(desc),
        )
    }

    /// Reports the region `desc` describes as a whole, typed from the table.
    pub fn report_nonfield(
        &mut self,
        desc: &ArgDesc,
        ptr: u64,
        size: u64,
        id: Option<&'static str>,
    ) -> bool {
        self.report_memarg_type(
            desc.param as i32,
            desc.flags,
            ptr,
            size,
            id,
            desc_type(desc),
            None,
        )
    }

    pub fn report(&mut self, desc: &ArgDesc, ptr: u64, size: u64, id: Option<&'static str>) -> bool {
        self.report_field(desc, ptr, size, id, ParamType::Struct, None)
    }

    /// Reports a parameter value discovered by a handler, such as the real
    /// arguments of a multiplexed call.
    pub fn report_sysarg(&mut self, ordinal: usize, flags: SysargFlags) -> bool {
        self.report_sysarg_type(ordinal, flags, self.ptr_size(), ParamType::Unknown, None)
    }

    pub fn report_sysarg_type(
        &mut self,
        ordinal: usize,
        flags: SysargFlags,
        size: u64,
        ty: ParamType,
        type_name: Option<&'static str>,
    ) -> bool {
        if !self.abort && self.arg_cb.is_some() {
            let mut arg = Arg::new(self.syscall, self.state.mc, self.pre, true);
            arg.ordinal = ordinal as i32;
            arg.size = size;
            arg.set_location(self.engine.platform().param_location(
                self.personality(),
                &self.state.mc,
                ordinal,
            ));
            arg.value64 = self.state.sysarg(ordinal);
            arg.value = truncate(arg.value64, self.ptr_size());
            arg.ty = ty;
            arg.type_name = type_name_for(ty, type_name);
            arg.mode = ParamMode::from_flags(flags);
            if let Some(cb) = self.arg_cb.as_mut() {
                if !cb(&arg) {
                    self.abort = true;
                }
            }
        }
        self.keep_going()
    }

    /// Handles a NUL-terminated string. `size` is the buffer capacity, or 0
    /// when unbounded.
    pub fn handle_cstring(
        &mut self,
        ordinal: i32,
        flags: SysargFlags,
        id: Option<&'static str>,
        start: u64,
        size: u64,
        check_addr: bool,
    ) -> bool {
        self.handle_string(ordinal, flags, id, start, size, check_addr, 1)
    }

    /// Like [`Walk::handle_cstring`] for strings of 16-bit units.
    pub fn handle_cwstring(
        &mut self,
        ordinal: i32,
        flags: SysargFlags,
        id: Option<&'static str>,
        start: u64,
        size: u64,
        check_addr: bool,
    ) -> bool {
        self.handle_string(ordinal, flags, id, start, size, check_addr, 2)
    }

    #[allow(clippy::too_many_arguments)]
    fn handle_string(
        &mut self,
        ordinal: i32,
        flags: SysargFlags,
        id: Option<&'static str>,
        start: u64,
        size: u64,
        check_addr: bool,
        unit: u64,
    ) -> bool {
        let max = if size == 0 { MAX_PATH * unit } else { size };
        if start == 0 {
            return false;
        }
        if self.pre && !flags.contains(SysargFlags::READ) {
            if !check_addr {
                return false;
            }
            if size > 0 {
                self.report_memarg_type(ordinal, flags, start, size, id, ParamType::Cstring, None);
                return true;
            }
        }
        if !self.pre && !flags.contains(SysargFlags::WRITE) {
            return false;
        }

        let mut i = 0;
        let mut c = [0u8; 2];
        while i < max {
            let c = &mut c[..unit as usize];
            let Some(addr) = start.checked_add(i) else {
                break;
            };
            if !self.read(addr, c) {
                warn!("unable to read syscall param string at {addr:#x}");
                break;
            }
            if c.iter().all(|&b| b == 0) {
                break;
            }
            i += unit;
        }
        let len = if i < max { i + unit } else { max };
        // A string running into the top of the address space ends there.
        let len = len.min((u64::MAX - start).saturating_add(1));
        self.report_memarg_type(ordinal, flags, start, len, id, ParamType::Cstring, None);
        true
    }
}

/// The table type of `desc`, if it carries one.
pub(crate) fn desc_type(desc: &ArgDesc) -> ParamType {
    desc.arg_type()
        .map(|t| t.param_type())
        .unwrap_or(ParamType::Invalid)
}

pub(crate) fn truncate(value: u64, size: u64) -> u64 {
    match size {
        1 => value & 0xff,
        2 => value & 0xffff,
        4 => value & 0xffff_ffff,
        _ => value,
    }
}
