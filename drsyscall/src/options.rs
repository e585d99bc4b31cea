// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{fmt, path::PathBuf, sync::Arc};

use clap::ValueEnum;
use drsyscall_common::Personality;

/// Address query used by the unknown-syscall heuristic.
pub type ByteQuery = Arc<dyn Fn(u64) -> bool + Send + Sync>;
/// Takes the argument ordinal whose register is being asked about.
pub type RegisterQuery = Arc<dyn Fn(usize) -> bool + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Os {
    Linux,
    Windows,
    #[value(name = "macos")]
    MacOs,
}

impl Os {
    pub const fn host() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            Os::Linux
        }
    }
}

impl Default for Os {
    fn default() -> Self {
        Os::host()
    }
}

#[derive(Clone, Default)]
pub struct Options {
    pub analyze_unknown_syscalls: bool,
    pub syscall_dword_granularity: bool,
    pub syscall_sentinels: bool,
    pub is_byte_addressable: Option<ByteQuery>,
    pub is_byte_defined: Option<ByteQuery>,
    pub is_byte_undefined: Option<ByteQuery>,
    pub is_register_defined: Option<RegisterQuery>,
    pub sysnum_file: Option<PathBuf>,
    pub skip_internal_tables: bool,
    pub os: Os,
    pub personality: Personality,
    pub windows_build: Option<u32>,
}

impl Options {
    pub fn new() -> Self {
        Options {
            personality: Personality::native(),
            ..Default::default()
        }
    }

    pub fn with_os(mut self, os: Os) -> Self {
        self.os = os;
        self
    }

    pub fn with_personality(mut self, personality: Personality) -> Self {
        self.personality = personality;
        self
    }

    pub fn with_windows_build(mut self, build: u32) -> Self {
        self.windows_build = Some(build);
        self
    }

    pub fn with_sysnum_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sysnum_file = Some(path.into());
        self
    }

    pub fn with_skip_internal_tables(mut self, skip: bool) -> Self {
        self.skip_internal_tables = skip;
        self
    }

    pub fn with_unknown_syscall_analysis(mut self, enable: bool) -> Self {
        self.analyze_unknown_syscalls = enable;
        self
    }

    pub fn with_dword_granularity(mut self, enable: bool) -> Self {
        self.syscall_dword_granularity = enable;
        self
    }

    pub fn with_sentinels(mut self, enable: bool) -> Self {
        self.syscall_sentinels = enable;
        self
    }

    pub fn with_byte_addressable(mut self, f: impl Fn(u64) -> bool + Send + Sync + 'static) -> Self {
        self.is_byte_addressable = Some(Arc::new(f));
        self
    }

    pub fn with_byte_defined(mut self, f: impl Fn(u64) -> bool + Send + Sync + 'static) -> Self {
        self.is_byte_defined = Some(Arc::new(f));
        self
    }

    pub fn with_byte_undefined(mut self, f: impl Fn(u64) -> bool + Send + Sync + 'static) -> Self {
        self.is_byte_undefined = Some(Arc::new(f));
        self
    }

    pub fn with_register_defined(
        mut self,
        f: impl Fn(usize) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_register_defined = Some(Arc::new(f));
        self
    }

    pub(crate) fn byte_addressable(&self, addr: u64) -> bool {
        self.is_byte_addressable.as_ref().is_none_or(|f| f(addr))
    }

    /// Without a definedness oracle every addressable byte counts as defined.
    pub(crate) fn byte_defined(&self, addr: u64) -> bool {
        match &self.is_byte_defined {
            Some(f) => f(addr),
            None => self.byte_addressable(addr),
        }
    }

    pub(crate) fn byte_undefined(&self, addr: u64) -> bool {
        match (&self.is_byte_undefined, &self.is_byte_defined, &self.is_byte_addressable) {
            (Some(f), _, _) => f(addr),
            (None, Some(defined), Some(addressable)) => addressable(addr) && !defined(addr),
            _ => false,
        }
    }

    pub(crate) fn register_defined(&self, argnum: usize) -> bool {
        self.is_register_defined.as_ref().is_none_or(|f| f(argnum))
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("analyze_unknown_syscalls", &self.analyze_unknown_syscalls)
            .field("syscall_dword_granularity", &self.syscall_dword_granularity)
            .field("syscall_sentinels", &self.syscall_sentinels)
            .field("sysnum_file", &self.sysnum_file)
            .field("skip_internal_tables", &self.skip_internal_tables)
            .field("os", &self.os)
            .field("personality", &self.personality)
            .field("windows_build", &self.windows_build)
            .finish_non_exhaustive()
    }
}
