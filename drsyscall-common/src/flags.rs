// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use bitflags::bitflags;

bitflags! {
    /// Per-descriptor interpretation flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SysargFlags: u32 {
        const READ = 0x0001;
        const WRITE = 0x0002;
        /// The argument needs a dedicated handler keyed by its type tag.
        const COMPLEX_TYPE = 0x0004;
        /// Windows only: the written size is the Information field of the
        /// IO_STATUS_BLOCK passed in the size argument.
        const POST_SIZE_IO_STATUS = 0x0008;
        /// The size argument is a pointer to the real size.
        const LENGTH_INOUT = 0x0020;
        /// The size counts elements; the stride lives in `misc`.
        const SIZE_IN_ELEMENTS = 0x0040;
        /// The register value itself is the argument, not a pointer to it.
        const INLINED = 0x0080;
        /// The second entry of a double entry is skipped when the count
        /// pointed at by the previous entry's size argument is zero.
        const NO_WRITE_IF_COUNT_0 = 0x0100;
        const HAS_TYPE = 0x0200;
        const IGNORE_IF_NEXT_NULL = 0x0400;
        const IGNORE_IF_PREV_NULL = 0x0800;
        /// A pointer that the kernel never dereferences.
        const NON_MEMARG = 0x1000;
        const SIZE_PLUS_1 = 0x2000;
    }
}

impl SysargFlags {
    /// Whether `misc` holds a type tag for a descriptor with these flags.
    pub const fn carries_type(self) -> bool {
        self.intersects(
            SysargFlags::COMPLEX_TYPE
                .union(SysargFlags::INLINED)
                .union(SysargFlags::HAS_TYPE),
        )
    }
}

bitflags! {
    /// Per-record flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SysinfoFlags: u32 {
        const ALL_PARAMS_KNOWN = 0x0001;
        const REQUIRES_PREFIX = 0x0002;
        const IMM32_DLL = 0x0004;
        const RET_ZERO_FAIL = 0x0008;
        /// Buffer-too-small statuses still write the last parameter.
        const RET_SMALL_WRITE_LAST = 0x0010;
        const SECONDARY_TABLE = 0x0020;
        const RET_MINUS1_FAIL = 0x0040;
        const RET_TYPE_VARIES = 0x0080;
        const RET_64BIT = 0x0100;
    }
}

bitflags! {
    /// How an argument or memory region is used by the system call.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParamMode: u32 {
        const IN = 0x01;
        const OUT = 0x02;
        const BOUNDS = 0x04;
        const RETVAL = 0x08;
        const INLINED = 0x10;
    }
}

impl ParamMode {
    pub const fn from_flags(flags: SysargFlags) -> ParamMode {
        let mut mode = ParamMode::empty();
        if flags.contains(SysargFlags::WRITE) {
            mode = mode.union(ParamMode::OUT);
        }
        if flags.intersects(SysargFlags::READ.union(SysargFlags::INLINED)) {
            mode = mode.union(ParamMode::IN);
        }
        if flags.contains(SysargFlags::INLINED) {
            mode = mode.union(ParamMode::INLINED);
        }
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_flags() {
        assert_eq!(ParamMode::from_flags(SysargFlags::WRITE), ParamMode::OUT);
        assert_eq!(ParamMode::from_flags(SysargFlags::READ), ParamMode::IN);
        assert_eq!(
            ParamMode::from_flags(SysargFlags::INLINED),
            ParamMode::IN | ParamMode::INLINED
        );
        assert_eq!(
            ParamMode::from_flags(SysargFlags::READ | SysargFlags::WRITE),
            ParamMode::IN | ParamMode::OUT
        );
    }

    #[test]
    fn type_carrying_flags() {
        assert!(SysargFlags::COMPLEX_TYPE.carries_type());
        assert!((SysargFlags::WRITE | SysargFlags::HAS_TYPE).carries_type());
        assert!(!(SysargFlags::READ | SysargFlags::SIZE_IN_ELEMENTS).carries_type());
    }
}
