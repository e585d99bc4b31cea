// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Static system call tables. Records are written with the `syscall!` macro
//! and the shorthands in [`dsl`], so each entry reads close to a prototype.

/// Builds a [`SyscallRecord`](crate::SyscallRecord) literal.
///
/// `syscall!(numbers, "name", flags, return type, parameter count, [descriptors])`,
/// optionally followed by `; secondary table`.
macro_rules! syscall {
    ($nums:expr, $name:expr, $flags:expr, $ret:expr, $count:literal, [$($arg:expr),* $(,)?] $(; $sec:expr)?) => {
        $crate::SyscallRecord {
            nums: $nums,
            name: $name,
            flags: $crate::SysinfoFlags::from_bits_retain($flags),
            ret: $ret,
            arg_count: $count,
            args: &[$($arg),*],
            secondary: syscall!(@secondary $($sec)?),
        }
    };
    (@secondary) => {
        None
    };
    (@secondary $sec:expr) => {
        Some($sec)
    };
}

pub mod linux;
pub mod linux_ioctl;
pub mod windows;
pub mod windows_numbers;

pub mod dsl {
    pub use crate::sizes as sz;
    use crate::{
        AbiSize, ArgDesc, ArgType, Numbers, ParamType, SizeSpec, SysargFlags, SysinfoFlags,
    };

    pub const R: u32 = SysargFlags::READ.bits();
    pub const W: u32 = SysargFlags::WRITE.bits();
    pub const CT: u32 = SysargFlags::COMPLEX_TYPE.bits();
    pub const HT: u32 = SysargFlags::HAS_TYPE.bits();
    /// Written, with the size argument pointing at the real size.
    pub const WI: u32 = W | SysargFlags::LENGTH_INOUT.bits();
    pub const INLINED: u32 = SysargFlags::INLINED.bits();
    pub const SIZE_IN_ELEMENTS: u32 = SysargFlags::SIZE_IN_ELEMENTS.bits();
    pub const IGNORE_IF_PREV_NULL: u32 = SysargFlags::IGNORE_IF_PREV_NULL.bits();
    pub const IGNORE_IF_NEXT_NULL: u32 = SysargFlags::IGNORE_IF_NEXT_NULL.bits();
    pub const NON_MEMARG: u32 = SysargFlags::NON_MEMARG.bits();
    pub const SIZE_PLUS_1: u32 = SysargFlags::SIZE_PLUS_1.bits();
    pub const POST_SIZE_IO_STATUS: u32 = SysargFlags::POST_SIZE_IO_STATUS.bits();
    pub const NO_WRITE_IF_COUNT_0: u32 = SysargFlags::NO_WRITE_IF_COUNT_0.bits();

    pub const OK: u32 = SysinfoFlags::ALL_PARAMS_KNOWN.bits();
    pub const UNKNOWN: u32 = 0;
    pub const SECONDARY_TABLE: u32 = SysinfoFlags::SECONDARY_TABLE.bits();
    pub const RET_ZERO_FAIL: u32 = SysinfoFlags::RET_ZERO_FAIL.bits();
    pub const RET_MINUS1_FAIL: u32 = SysinfoFlags::RET_MINUS1_FAIL.bits();
    pub const RET_SMALL_WRITE_LAST: u32 = SysinfoFlags::RET_SMALL_WRITE_LAST.bits();
    pub const RET_TYPE_VARIES: u32 = SysinfoFlags::RET_TYPE_VARIES.bits();
    pub const RET_64BIT: u32 = SysinfoFlags::RET_64BIT.bits();

    pub const RET: SizeSpec = SizeSpec::Retval;
    pub const IN_FIELD: SizeSpec = SizeSpec::InField;

    pub const fn fixed(n: u32) -> SizeSpec {
        SizeSpec::Fixed(AbiSize::all(n))
    }

    pub const fn abi(s: AbiSize) -> SizeSpec {
        SizeSpec::Fixed(s)
    }

    pub const fn from(param: u8) -> SizeSpec {
        SizeSpec::Arg(param)
    }

    pub const fn arg(param: u8, size: SizeSpec, flags: u32) -> ArgDesc {
        ArgDesc::new(param, size, flags)
    }

    /// Per-personality numbers: x86_64, x86, arm, aarch64. Negative means
    /// the call does not exist for that personality.
    pub const fn nums(x86_64: i32, x86: i32, arm: i32, aarch64: i32) -> Numbers {
        const fn opt(n: i32) -> Option<i32> {
            if n < 0 {
                None
            } else {
                Some(n)
            }
        }
        Numbers::Packed([opt(x86_64), opt(x86), opt(arm), opt(aarch64)])
    }

    pub const fn code(c: u32) -> Numbers {
        Numbers::Code(c)
    }

    pub const BY_NAME: Numbers = Numbers::ByName;

    const fn t(p: ParamType) -> ArgType {
        ArgType::Param(p)
    }

    pub const RLONG: ArgType = t(ParamType::SignedInt);
    pub const RNTST: ArgType = t(ParamType::Ntstatus);
    pub const RBOOL: ArgType = ArgType::Bool32;
    pub const RHANDLE: ArgType = t(ParamType::Handle);
    pub const RVOID: ArgType = t(ParamType::Void);

    pub const VOID: ArgType = t(ParamType::Void);
    pub const BOOL: ArgType = t(ParamType::Bool);
    pub const NTSTATUS: ArgType = t(ParamType::Ntstatus);
    pub const FUNCTION: ArgType = t(ParamType::Function);
    pub const UNKNOWN_TYPE: ArgType = t(ParamType::Unknown);
    pub const SIGNED_INT: ArgType = t(ParamType::SignedInt);
    pub const UNSIGNED_INT: ArgType = t(ParamType::UnsignedInt);
    pub const POINTER: ArgType = t(ParamType::Pointer);
    pub const HANDLE: ArgType = t(ParamType::Handle);
    pub const CSTRING: ArgType = t(ParamType::Cstring);
    pub const CWSTRING: ArgType = t(ParamType::Cwstring);
    pub const CARRAY: ArgType = t(ParamType::Carray);
    pub const CSTRARRAY: ArgType = t(ParamType::Cstrarray);
    pub const SOCKADDR: ArgType = t(ParamType::Sockaddr);
    pub const MSGHDR: ArgType = t(ParamType::Msghdr);
    pub const MSGBUF: ArgType = t(ParamType::Msgbuf);
    pub const STRUCT: ArgType = t(ParamType::Struct);
    pub const UNICODE_STRING: ArgType = t(ParamType::UnicodeString);
    pub const UNICODE_STRING_NOLEN: ArgType = ArgType::UnicodeStringNoLen;
    pub const OBJECT_ATTRIBUTES: ArgType = t(ParamType::ObjectAttributes);
    pub const SECURITY_DESCRIPTOR: ArgType = t(ParamType::SecurityDescriptor);
    pub const SECURITY_QOS: ArgType = t(ParamType::SecurityQos);
    pub const LARGE_INTEGER: ArgType = t(ParamType::LargeInteger);
    pub const IO_STATUS_BLOCK: ArgType = t(ParamType::IoStatusBlock);
    pub const PORT_MESSAGE: ArgType = t(ParamType::PortMessage);
    pub const CONTEXT: ArgType = t(ParamType::Context);
    pub const LCID: ArgType = t(ParamType::Lcid);
    pub const ATOM: ArgType = t(ParamType::Atom);
    pub const HWND: ArgType = t(ParamType::Handle);
    pub const SINT32: ArgType = ArgType::Sint32;
    pub const UINT32: ArgType = ArgType::Uint32;
    pub const SINT16: ArgType = ArgType::Sint16;
    pub const BOOL8: ArgType = ArgType::Bool8;
    pub const BOOL32: ArgType = ArgType::Bool32;
}

#[cfg(test)]
mod tests {
    use crate::{Personality, SysargFlags, SizeSpec};

    use super::{linux, windows};

    #[test]
    fn linux_read_shape() {
        let read = linux::SYSCALLS
            .iter()
            .find(|r| r.name == "read")
            .expect("read is in the table");
        assert_eq!(read.nums.primary(Personality::X86_64), Some(0));
        assert_eq!(read.nums.primary(Personality::Aarch64), Some(63));
        assert!(read.args[0].flags.contains(SysargFlags::INLINED));
        let (i, buf) = read.find_arg(0, 1).expect("buffer descriptor");
        assert_eq!(buf.size, SizeSpec::Arg(2));
        assert!(buf.flags.contains(SysargFlags::WRITE));
        let (_, written) = read.find_arg(i + 1, 1).expect("written size descriptor");
        assert_eq!(written.size, SizeSpec::Retval);
    }

    #[test]
    fn descriptors_stay_within_parameter_count() {
        for r in linux::SYSCALLS.iter().chain(windows::NTOSKRNL.iter()) {
            for a in r.args {
                assert!(
                    (a.param as usize) < crate::MAX_ARGS_IN_ENTRY,
                    "{} has descriptor for parameter {}",
                    r.name,
                    a.param
                );
            }
        }
    }
}
