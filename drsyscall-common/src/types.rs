// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

/// Semantic type of an argument, a return value or a memory region.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParamType {
    #[default]
    Invalid,
    Unknown,
    Void,
    Bool,
    Int,
    SignedInt,
    UnsignedInt,
    SizeT,
    Handle,
    Ntstatus,
    Atom,
    Lcid,
    Lparam,
    Hmodule,
    Hfile,
    Pointer,
    Struct,
    Cstring,
    Cwstring,
    Carray,
    Cwarray,
    Cstrarray,
    UnicodeString,
    LargeString,
    ObjectAttributes,
    SecurityDescriptor,
    SecurityQos,
    PortMessage,
    Context,
    ExceptionRecord,
    Devmodew,
    Wndclassexw,
    Clsmenuname,
    Menuiteminfow,
    AlpcPortAttributes,
    AlpcSecurityAttributes,
    Logfontw,
    Nonclientmetricsw,
    Iconmetricsw,
    Serialkeysw,
    Sockaddr,
    Msghdr,
    Msgbuf,
    LargeInteger,
    UlargeInteger,
    IoStatusBlock,
    Function,
    Bitmapinfo,
    AlpcContextAttributes,
    AlpcMessageAttributes,
    T2SetParameters,
}

impl ParamType {
    /// Human-readable name, as a C declaration would spell it.
    pub const fn name(self) -> &'static str {
        match self {
            ParamType::Invalid => "<invalid>",
            ParamType::Unknown => "<unknown>",
            ParamType::Void => "void",
            ParamType::Bool => "bool",
            ParamType::Int | ParamType::SignedInt => "int",
            ParamType::UnsignedInt => "unsigned int",
            ParamType::SizeT => "size_t",
            ParamType::Handle => "HANDLE",
            ParamType::Ntstatus => "NTSTATUS",
            ParamType::Atom => "ATOM",
            ParamType::Lcid => "LCID",
            ParamType::Lparam => "LPARAM",
            ParamType::Hmodule => "HMODULE",
            ParamType::Hfile => "HFILE",
            ParamType::Pointer => "void *",
            ParamType::Struct => "<struct>",
            ParamType::Cstring => "char *",
            ParamType::Cwstring => "wchar_t *",
            ParamType::Carray => "char[]",
            ParamType::Cwarray => "wchar_t[]",
            ParamType::Cstrarray => "char **",
            ParamType::UnicodeString => "UNICODE_STRING",
            ParamType::LargeString => "LARGE_STRING",
            ParamType::ObjectAttributes => "OBJECT_ATTRIBUTES",
            ParamType::SecurityDescriptor => "SECURITY_DESCRIPTOR",
            ParamType::SecurityQos => "SECURITY_QOS",
            ParamType::PortMessage => "PORT_MESSAGE",
            ParamType::Context => "CONTEXT",
            ParamType::ExceptionRecord => "EXCEPTION_RECORD",
            ParamType::Devmodew => "DEVMODEW",
            ParamType::Wndclassexw => "WNDCLASSEXW",
            ParamType::Clsmenuname => "CLSMENUNAME",
            ParamType::Menuiteminfow => "MENUITEMINFOW",
            ParamType::AlpcPortAttributes => "ALPC_PORT_ATTRIBUTES",
            ParamType::AlpcSecurityAttributes => "ALPC_SECURITY_ATTRIBUTES",
            ParamType::Logfontw => "LOGFONTW",
            ParamType::Nonclientmetricsw => "NONCLIENTMETRICSW",
            ParamType::Iconmetricsw => "ICONMETRICSW",
            ParamType::Serialkeysw => "SERIALKEYSW",
            ParamType::Sockaddr => "struct sockaddr",
            ParamType::Msghdr => "struct msghdr",
            ParamType::Msgbuf => "struct msgbuf",
            ParamType::LargeInteger => "LARGE_INTEGER",
            ParamType::UlargeInteger => "ULARGE_INTEGER",
            ParamType::IoStatusBlock => "IO_STATUS_BLOCK",
            ParamType::Function => "<function>",
            ParamType::Bitmapinfo => "BITMAPINFO",
            ParamType::AlpcContextAttributes => "ALPC_CONTEXT_ATTRIBUTES",
            ParamType::AlpcMessageAttributes => "ALPC_MESSAGE_ATTRIBUTES",
            ParamType::T2SetParameters => "T2_SET_PARAMETERS",
        }
    }
}

/// Type tag as stored in the tables. Besides every exported type it carries
/// a few table-only refinements that collapse to an exported type plus a
/// width when handed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgType {
    Param(ParamType),
    /// A UNICODE_STRING whose Length field does not cover the buffer.
    UnicodeStringNoLen,
    Sint32,
    Uint32,
    Sint16,
    Uint16,
    Bool32,
    Bool8,
}

impl ArgType {
    /// The exported type and, for sized refinements, its width in bytes.
    pub const fn exported(self) -> (ParamType, Option<usize>) {
        match self {
            ArgType::Param(ParamType::Ntstatus) => (ParamType::Ntstatus, Some(4)),
            ArgType::Param(t) => (t, None),
            ArgType::UnicodeStringNoLen => (ParamType::UnicodeString, None),
            ArgType::Sint32 => (ParamType::SignedInt, Some(4)),
            ArgType::Uint32 => (ParamType::UnsignedInt, Some(4)),
            ArgType::Sint16 => (ParamType::SignedInt, Some(2)),
            ArgType::Uint16 => (ParamType::UnsignedInt, Some(2)),
            ArgType::Bool32 => (ParamType::Bool, Some(4)),
            ArgType::Bool8 => (ParamType::Bool, Some(1)),
        }
    }

    pub const fn param_type(self) -> ParamType {
        self.exported().0
    }

    pub const fn is(self, t: ParamType) -> bool {
        matches!(self, ArgType::Param(p) if p as u32 == t as u32)
    }
}

impl From<ParamType> for ArgType {
    fn from(t: ParamType) -> Self {
        ArgType::Param(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(ParamType::Pointer.name(), "void *");
        assert_eq!(ParamType::SignedInt.name(), "int");
        assert_eq!(ParamType::Sockaddr.name(), "struct sockaddr");
        assert_eq!(ParamType::UnicodeString.name(), "UNICODE_STRING");
        assert_eq!(ParamType::Invalid.name(), "<invalid>");
    }

    #[test]
    fn refinements_collapse() {
        assert_eq!(ArgType::Sint16.exported(), (ParamType::SignedInt, Some(2)));
        assert_eq!(ArgType::Bool8.exported(), (ParamType::Bool, Some(1)));
        assert_eq!(
            ArgType::UnicodeStringNoLen.exported(),
            (ParamType::UnicodeString, None)
        );
        assert_eq!(
            ArgType::Param(ParamType::Ntstatus).exported(),
            (ParamType::Ntstatus, Some(4))
        );
        assert_eq!(
            ArgType::Param(ParamType::Handle).exported(),
            (ParamType::Handle, None)
        );
    }
}
