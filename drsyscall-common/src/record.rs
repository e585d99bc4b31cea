// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use crate::{ArgType, ParamType, SysargFlags, SysinfoFlags};

/// Binary personality of the traced code. One table serves all of them;
/// numbers and ABI-dependent sizes are selected per personality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Personality {
    #[default]
    X86_64,
    X86,
    Arm,
    Aarch64,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::X86_64,
        Personality::X86,
        Personality::Arm,
        Personality::Aarch64,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn pointer_size(self) -> usize {
        match self {
            Personality::X86_64 | Personality::Aarch64 => 8,
            Personality::X86 | Personality::Arm => 4,
        }
    }

    pub const fn is_64bit(self) -> bool {
        self.pointer_size() == 8
    }

    /// The personality matching the build target.
    pub const fn native() -> Personality {
        if cfg!(target_arch = "aarch64") {
            Personality::Aarch64
        } else if cfg!(target_arch = "arm") {
            Personality::Arm
        } else if cfg!(target_arch = "x86") {
            Personality::X86
        } else {
            Personality::X86_64
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Personality::X86_64 => "x86_64",
            Personality::X86 => "x86",
            Personality::Arm => "arm",
            Personality::Aarch64 => "aarch64",
        }
    }
}

/// A byte count that may differ per personality, indexed like
/// [`Personality::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AbiSize(pub [u32; 4]);

impl AbiSize {
    pub const fn all(n: u32) -> AbiSize {
        AbiSize([n; 4])
    }

    /// Sizes for LP64 (x86_64, aarch64) and ILP32 (x86, arm) layouts.
    pub const fn by_width(lp64: u32, ilp32: u32) -> AbiSize {
        AbiSize([lp64, ilp32, ilp32, lp64])
    }

    pub const fn times(self, n: u32) -> AbiSize {
        let [a, b, c, d] = self.0;
        AbiSize([a * n, b * n, c * n, d * n])
    }

    pub const fn get(self, p: Personality) -> u32 {
        self.0[p.index()]
    }
}

/// Where the size of a memory argument comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeSpec {
    Fixed(AbiSize),
    /// The value of another parameter.
    Arg(u8),
    /// The return value; only meaningful after the call.
    Retval,
    /// A 4-byte field inside the pointed-to struct, at the offset in `misc`.
    InField,
}

/// Auxiliary descriptor payload, interpreted according to the flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Misc {
    #[default]
    None,
    Type(ArgType),
    Stride(AbiSize),
    /// The element stride is the value of another parameter.
    StrideArg(u8),
    Field(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgDesc {
    pub param: u8,
    pub size: SizeSpec,
    pub flags: SysargFlags,
    pub misc: Misc,
    pub enum_name: Option<&'static str>,
}

impl ArgDesc {
    pub const fn new(param: u8, size: SizeSpec, flags: u32) -> ArgDesc {
        ArgDesc {
            param,
            size,
            flags: SysargFlags::from_bits_retain(flags),
            misc: Misc::None,
            enum_name: None,
        }
    }

    pub const fn ty(mut self, t: ArgType) -> ArgDesc {
        self.misc = Misc::Type(t);
        self
    }

    pub const fn stride(mut self, s: AbiSize) -> ArgDesc {
        self.misc = Misc::Stride(s);
        self
    }

    pub const fn stride_arg(mut self, param: u8) -> ArgDesc {
        self.misc = Misc::StrideArg(param);
        self
    }

    pub const fn field(mut self, offset: u32) -> ArgDesc {
        self.misc = Misc::Field(offset);
        self
    }

    pub const fn named(mut self, enum_name: &'static str) -> ArgDesc {
        self.enum_name = Some(enum_name);
        self
    }

    /// The type tag in `misc`, when the flags say it carries one.
    pub const fn arg_type(&self) -> Option<ArgType> {
        match self.misc {
            Misc::Type(t) if self.flags.carries_type() => Some(t),
            _ => None,
        }
    }

    /// Whether this is a complex argument of type `t`.
    pub const fn is_complex(&self, t: ParamType) -> bool {
        if !self.flags.contains(SysargFlags::COMPLEX_TYPE) {
            return false;
        }
        match self.arg_type() {
            Some(a) => a.is(t),
            None => false,
        }
    }

    /// The fixed size for `p`, if this descriptor has one.
    pub const fn fixed_size(&self, p: Personality) -> Option<u32> {
        match self.size {
            SizeSpec::Fixed(s) => Some(s.get(p)),
            _ => None,
        }
    }
}

/// How a record is numbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Numbers {
    /// Per-personality primary numbers, indexed like [`Personality::index`].
    Packed([Option<i32>; 4]),
    /// A secondary code under the parent record's number (ioctl requests).
    Code(u32),
    /// Numbered at runtime from a per-version number set.
    ByName,
}

impl Numbers {
    pub const fn primary(&self, p: Personality) -> Option<i32> {
        match self {
            Numbers::Packed(n) => n[p.index()],
            _ => None,
        }
    }
}

/// A table selected by the runtime value of the record's first described
/// parameter. Entries carry their codes as [`Numbers::Code`]; `base`
/// answers for codes without an entry.
#[derive(Clone, Copy, Debug)]
pub struct SecondaryTable {
    pub entries: &'static [SyscallRecord],
    pub base: Option<&'static SyscallRecord>,
}

#[derive(Clone, Copy, Debug)]
pub struct SyscallRecord {
    pub nums: Numbers,
    pub name: &'static str,
    pub flags: SysinfoFlags,
    pub ret: ArgType,
    pub arg_count: u8,
    pub args: &'static [ArgDesc],
    pub secondary: Option<SecondaryTable>,
}

impl SyscallRecord {
    /// The code of a secondary entry.
    pub const fn code(&self) -> Option<u32> {
        match self.nums {
            Numbers::Code(c) => Some(c),
            _ => None,
        }
    }

    /// Parameter ordinal whose value selects the secondary entry.
    pub fn selector(&self) -> Option<u8> {
        self.secondary?;
        self.args.first().map(|a| a.param)
    }

    /// The descriptor for `param` searching forward from `from`.
    pub fn find_arg(&self, from: usize, param: u8) -> Option<(usize, &ArgDesc)> {
        self.args
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, a)| a.param == param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abi_size_selection() {
        let s = AbiSize::by_width(16, 8);
        assert_eq!(s.get(Personality::X86_64), 16);
        assert_eq!(s.get(Personality::Arm), 8);
        assert_eq!(s.get(Personality::Aarch64), 16);
        assert_eq!(s.times(2).get(Personality::X86), 16);
    }

    #[test]
    fn type_only_when_flagged() {
        let plain = ArgDesc::new(0, SizeSpec::Fixed(AbiSize::all(4)), SysargFlags::WRITE.bits())
            .ty(ArgType::Param(ParamType::SignedInt));
        assert_eq!(plain.arg_type(), None);

        let typed = ArgDesc::new(
            0,
            SizeSpec::Fixed(AbiSize::all(4)),
            (SysargFlags::WRITE | SysargFlags::HAS_TYPE).bits(),
        )
        .ty(ArgType::Param(ParamType::SignedInt));
        assert_eq!(typed.arg_type(), Some(ArgType::Param(ParamType::SignedInt)));
    }
}
