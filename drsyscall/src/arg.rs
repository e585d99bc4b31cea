// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use drsyscall_common::{ParamMode, ParamType};

use crate::{
    host::MachineContext,
    syscall::{Syscall, Sysnum},
};

/// Where a parameter lives at syscall entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Register(&'static str),
    Stack(u64),
}

/// One parameter or memory region handed to an iteration callback.
///
/// For parameter iteration `value` holds the register or stack value and
/// `reg`/`start_addr` say where it came from. For memory iteration
/// `start_addr` and `size` delimit the region and `reg` is `None`.
#[derive(Clone, Debug)]
pub struct Arg {
    pub syscall: Syscall,
    pub sysnum: Sysnum,
    pub mc: MachineContext,
    /// Parameter position; -1 for the return value.
    pub ordinal: i32,
    pub mode: ParamMode,
    pub ty: ParamType,
    pub type_name: Option<&'static str>,
    /// For a field inside a structure, the type of the structure.
    pub containing_type: ParamType,
    pub arg_name: Option<&'static str>,
    pub enum_name: Option<&'static str>,
    pub reg: Option<&'static str>,
    pub start_addr: u64,
    pub size: u64,
    /// The value truncated to the traced code's pointer width.
    pub value: u64,
    pub value64: u64,
    pub pre: bool,
    /// False for static iteration, where no live values exist.
    pub valid: bool,
}

impl Arg {
    pub(crate) fn new(syscall: Syscall, mc: MachineContext, pre: bool, valid: bool) -> Self {
        Arg {
            syscall,
            sysnum: syscall.number(),
            mc,
            ordinal: 0,
            mode: ParamMode::empty(),
            ty: ParamType::Invalid,
            type_name: None,
            containing_type: ParamType::Invalid,
            arg_name: None,
            enum_name: None,
            reg: None,
            start_addr: 0,
            size: 0,
            value: 0,
            value64: 0,
            pre,
            valid,
        }
    }

    pub(crate) fn set_location(&mut self, location: Option<Location>) {
        match location {
            Some(Location::Register(r)) => {
                self.reg = Some(r);
                self.start_addr = 0;
            }
            Some(Location::Stack(addr)) => {
                self.reg = None;
                self.start_addr = addr;
            }
            None => {
                self.reg = None;
                self.start_addr = 0;
            }
        }
    }

    pub fn is_retval(&self) -> bool {
        self.mode.contains(ParamMode::RETVAL)
    }

    pub fn end_addr(&self) -> u64 {
        self.start_addr.wrapping_add(self.size)
    }
}

/// Display name for `ty` unless a more specific one was given. Unknown and
/// invalid types have no name of their own.
pub(crate) fn type_name_for(ty: ParamType, type_name: Option<&'static str>) -> Option<&'static str> {
    match (type_name, ty) {
        (Some(n), _) => Some(n),
        (None, ParamType::Unknown | ParamType::Invalid) => None,
        (None, t) => Some(t.name()),
    }
}

/// Ids used when reporting a whole parameter.
pub(crate) const PARAM_IDS: [&str; drsyscall_common::MAX_ARGS_IN_ENTRY] = [
    "parameter #0",
    "parameter #1",
    "parameter #2",
    "parameter #3",
    "parameter #4",
    "parameter #5",
    "parameter #6",
    "parameter #7",
    "parameter #8",
    "parameter #9",
    "parameter #10",
    "parameter #11",
    "parameter #12",
    "parameter #13",
    "parameter #14",
    "parameter #15",
    "parameter #16",
    "parameter #17",
];

pub(crate) fn param_id(param: u8) -> Option<&'static str> {
    PARAM_IDS.get(param as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(type_name_for(ParamType::Cstring, None), Some("char *"));
        assert_eq!(type_name_for(ParamType::Unknown, None), None);
        assert_eq!(
            type_name_for(ParamType::Struct, Some("MEMORY_WORKING_SET_LIST")),
            Some("MEMORY_WORKING_SET_LIST")
        );
    }

    #[test]
    fn param_ids() {
        assert_eq!(param_id(0), Some("parameter #0"));
        assert_eq!(param_id(17), Some("parameter #17"));
        assert_eq!(param_id(18), None);
    }
}
