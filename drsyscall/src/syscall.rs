// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::fmt;

use drsyscall_common::{
    ArgType, Numbers, ParamType, SysinfoFlags, SyscallRecord, BASE_ENTRY_INDEX,
};

/// A system call number. `secondary` is non-zero only for calls whose
/// identity depends on an argument value, such as ioctl requests or Windows
/// information classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sysnum {
    pub number: i32,
    pub secondary: i32,
}

impl Sysnum {
    pub const fn new(number: i32) -> Sysnum {
        Sysnum {
            number,
            secondary: 0,
        }
    }

    pub const fn with_secondary(number: i32, secondary: i32) -> Sysnum {
        Sysnum { number, secondary }
    }

    pub const fn is_base(&self) -> bool {
        self.secondary == BASE_ENTRY_INDEX
    }
}

impl From<i32> for Sysnum {
    fn from(number: i32) -> Self {
        Sysnum::new(number)
    }
}

impl fmt::Display for Sysnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secondary == 0 {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{}.{}", self.number, self.secondary)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallType {
    Kernel,
    /// Windows win32k calls handling windowing and input.
    User,
    /// Windows win32k calls handling drawing.
    Graphics,
}

/// Stands in for calls missing from the tables so callers always get a
/// handle back.
pub(crate) static UNKNOWN_RECORD: SyscallRecord = SyscallRecord {
    nums: Numbers::Packed([None; 4]),
    name: "<unknown>",
    flags: SysinfoFlags::empty(),
    ret: ArgType::Param(ParamType::Unknown),
    arg_count: 0,
    args: &[],
    secondary: None,
};

/// Handle to a system call description, tied to the number it was resolved
/// under for the active personality.
#[derive(Clone, Copy)]
pub struct Syscall {
    record: &'static SyscallRecord,
    num: Sysnum,
    kind: SyscallType,
}

impl Syscall {
    pub(crate) fn new(record: &'static SyscallRecord, num: Sysnum, kind: SyscallType) -> Self {
        Syscall { record, num, kind }
    }

    pub(crate) fn unknown(num: Sysnum) -> Self {
        Syscall {
            record: &UNKNOWN_RECORD,
            num,
            kind: SyscallType::Kernel,
        }
    }

    pub fn name(&self) -> &'static str {
        self.record.name
    }

    pub fn number(&self) -> Sysnum {
        self.num
    }

    pub fn syscall_type(&self) -> SyscallType {
        self.kind
    }

    /// Whether every parameter of the call is described.
    pub fn is_known(&self) -> bool {
        self.record.flags.contains(SysinfoFlags::ALL_PARAMS_KNOWN)
    }

    pub fn return_type(&self) -> ParamType {
        self.record.ret.param_type()
    }

    pub fn record(&self) -> &'static SyscallRecord {
        self.record
    }

    pub(crate) fn is_in_table(&self) -> bool {
        !std::ptr::eq(self.record, &UNKNOWN_RECORD)
    }
}

impl fmt::Debug for Syscall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syscall")
            .field("name", &self.record.name)
            .field("num", &self.num)
            .field("kind", &self.kind)
            .finish()
    }
}

impl PartialEq for Syscall {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.record, other.record) && self.num == other.num
    }
}

impl Eq for Syscall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_number() {
        assert_eq!(Sysnum::new(16).to_string(), "16");
        assert_eq!(Sysnum::with_secondary(16, 0x5401).to_string(), "16.21505");
        assert_eq!(Sysnum::with_secondary(22, -1).to_string(), "22.-1");
        assert!(Sysnum::with_secondary(22, -1).is_base());
    }

    #[test]
    fn unknown_handle() {
        let s = Syscall::unknown(Sysnum::new(4242));
        assert_eq!(s.name(), "<unknown>");
        assert_eq!(s.number(), Sysnum::new(4242));
        assert!(!s.is_known());
        assert!(!s.is_in_table());
        assert_eq!(s.return_type(), ParamType::Unknown);
    }
}
