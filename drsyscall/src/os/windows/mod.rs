// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

mod query;
mod strings;

use std::collections::HashMap;

use drsyscall_common::{
    kernel_types::windows::{
        nt_success, STATUS_BUFFER_OVERFLOW, STATUS_BUFFER_TOO_SMALL, STATUS_INFO_LENGTH_MISMATCH,
    },
    tables::{self, windows_numbers},
    ArgType, ParamType, Personality, SysinfoFlags, SyscallRecord,
};
use log::{debug, error, warn};

pub(crate) use query::working_set_count_only;

use super::{Handlers, Platform};
use crate::{
    arg::Location,
    error::InitStatus,
    host::{Host, MachineContext},
    index::Index,
    options::{Options, Os},
    syscall::SyscallType,
    sysnum_file::SysnumFile,
};

/// Register parameters on x64; the rest follow the shadow space.
const X64_REGS: [&str; 4] = ["r10", "rdx", "r8", "r9"];

pub(crate) struct WindowsPlatform {
    personality: Personality,
    /// Running numbers by call name, for the kernel this engine was
    /// started for.
    numbers: HashMap<String, i32>,
    handlers: Handlers,
}

impl WindowsPlatform {
    pub fn new(options: &Options, host: &dyn Host) -> (Self, InitStatus) {
        let (numbers, status) = resolve_numbers(options, host);
        debug!("{} Windows system call numbers known", numbers.len());
        let platform = WindowsPlatform {
            personality: options.personality,
            numbers,
            handlers: handlers(),
        };
        (platform, status)
    }

    fn signed(&self, result: u64) -> i64 {
        if self.personality.is_64bit() {
            result as i64
        } else {
            result as u32 as i32 as i64
        }
    }
}

fn builtin_numbers(options: &Options, host: &dyn Host) -> Option<HashMap<String, i32>> {
    if options.skip_internal_tables {
        return None;
    }
    let build = options.windows_build?;
    // The built-in sets are for x64 kernels.
    if options.personality != Personality::X86_64 {
        debug!("no built-in numbers for {}", options.personality.name());
        return None;
    }
    let Some(set) = windows_numbers::for_build(build) else {
        debug!("no built-in numbers for build {build}");
        return None;
    };
    let expected = set.number(set.differentiator);
    match host.wrapper_number(set.differentiator) {
        Some(n) if Some(n) == expected => {}
        Some(n) => {
            warn!(
                "{} is {n:#x} but {} expects {:#x?}; ignoring the built-in numbers",
                set.differentiator, set.name, expected
            );
            return None;
        }
        None => warn!(
            "cannot check {} against the running kernel; trusting {} for build {build}",
            set.differentiator, set.name
        ),
    }
    debug!("using built-in number set {}", set.name);
    Some(
        set.numbers
            .iter()
            .map(|&(name, num)| (name.to_string(), num))
            .collect(),
    )
}

fn file_numbers(options: &Options, host: &dyn Host) -> Option<HashMap<String, i32>> {
    let path = options.sysnum_file.as_ref()?;
    let file = match SysnumFile::load(path) {
        Ok(file) => file,
        Err(e) => {
            error!("{e:#}");
            return None;
        }
    };
    let Some(start) = host.wrapper_number(&file.differentiator) else {
        error!(
            "{}: cannot find the running number of {}",
            path.display(),
            file.differentiator
        );
        return None;
    };
    let Some(block) = file.block(start) else {
        error!(
            "{}: no block for {} = {start:#x}",
            path.display(),
            file.differentiator
        );
        return None;
    };
    debug!("{}: using block START={start:#x}", path.display());
    Some(block.numbers.iter().cloned().collect())
}

fn resolve_numbers(options: &Options, host: &dyn Host) -> (HashMap<String, i32>, InitStatus) {
    if let Some(numbers) = builtin_numbers(options, host) {
        return (numbers, InitStatus::Success);
    }
    if let Some(numbers) = file_numbers(options, host) {
        return (numbers, InitStatus::Success);
    }
    warn!("unknown Windows kernel; only calls without tables will be analyzed");
    (HashMap::new(), InitStatus::WarningUnsupportedKernel)
}

/// Names a record is also known by besides its own.
fn aliases(name: &str) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(rest) = name.strip_prefix("NtUser").or_else(|| name.strip_prefix("NtGdi")) {
        names.push(rest.to_string());
    } else if let Some(rest) = name.strip_prefix("Nt") {
        names.push(format!("Zw{rest}"));
    }
    names
}

/// GDI calls whose success is not what their return type suggests.
fn graphics_succeeded(record: &SyscallRecord, res: i64) -> Option<bool> {
    match record.name {
        "NtGdiDescribePixelFormat" => Some(res > 0),
        "NtGdiGetRasterizerCaps" => Some(res == 1),
        _ => None,
    }
}

/// Registers the `NtUserCall*` entries under their code name alone, as
/// in `GETCURSORPOS`. The first family to claim a code name keeps it.
fn add_usercall_names(index: &mut Index, record: &SyscallRecord) {
    if !record.name.starts_with("NtUserCall") {
        return;
    }
    let Some(table) = record.secondary else {
        return;
    };
    for entry in table.entries {
        let (Some(num), Some((_, code_name))) =
            (index.number(entry.name), entry.name.split_once('.'))
        else {
            continue;
        };
        if index.number(code_name).is_none() {
            index.add_name(code_name, num);
        }
    }
}

fn in_table(table: &[SyscallRecord], record: &SyscallRecord) -> bool {
    table.as_ptr_range().contains(&(record as *const SyscallRecord))
}

fn handlers() -> Handlers {
    Handlers::default()
        .on_type(ParamType::UnicodeString, strings::unicode_string_access)
        .on_type(ArgType::UnicodeStringNoLen, strings::unicode_string_nolen_access)
        .on_type(ParamType::ObjectAttributes, strings::object_attributes_access)
        .on_type(ParamType::SecurityDescriptor, strings::security_descriptor_access)
        .on_type(ParamType::SecurityQos, strings::security_qos_access)
        .on_type(ParamType::Cwstring, strings::cwstring_access)
        .on_pre(&["NtQueryInformationThread"], query::query_information_thread)
        .on_post(&["NtQueryInformationThread"], query::query_information_thread)
        .on_pre(&["NtQuerySystemInformation"], query::query_system_information)
        .on_post(&["NtQuerySystemInformation"], query::query_system_information)
        .on_post(&["NtQueryVirtualMemory"], query::post_query_virtual_memory)
}

impl Platform for WindowsPlatform {
    fn os(&self) -> Os {
        Os::Windows
    }

    fn arg_slots(&self) -> usize {
        drsyscall_common::SYSCALL_NUM_ARG_STORE
    }

    fn unknown_arg_slots(&self) -> usize {
        crate::state::UNKNOWN_MAX_ARGS
    }

    fn param_location(
        &self,
        personality: Personality,
        mc: &MachineContext,
        ordinal: usize,
    ) -> Option<Location> {
        if personality.is_64bit() {
            match X64_REGS.get(ordinal) {
                Some(r) => Some(Location::Register(r)),
                // Return address and shadow space sit below.
                None => mc.sp.checked_add(8 * (ordinal as u64 + 1)).map(Location::Stack),
            }
        } else {
            mc.sp.checked_add(4 * ordinal as u64).map(Location::Stack)
        }
    }

    fn syscall_type(&self, record: &SyscallRecord) -> SyscallType {
        if in_table(tables::windows::NTUSER, record) || record.name.starts_with("NtUser") {
            SyscallType::User
        } else if in_table(tables::windows::NTGDI, record) {
            SyscallType::Graphics
        } else {
            SyscallType::Kernel
        }
    }

    fn succeeded(&self, record: &SyscallRecord, result: u64, sysarg: &[u64]) -> bool {
        if let Some(success) = graphics_succeeded(record, self.signed(result)) {
            return success;
        }
        if self.succeeded_custom(record, result, sysarg) {
            return true;
        }
        if self.small_write_last(record, result) {
            return true;
        }
        let res = self.signed(result);
        let ret = record.ret;
        if record.flags.contains(SysinfoFlags::RET_ZERO_FAIL)
            || matches!(ret, ArgType::Bool32 | ArgType::Bool8)
            || ret.is(ParamType::Handle)
            || ret.is(ParamType::Pointer)
        {
            return res != 0;
        }
        if record.flags.contains(SysinfoFlags::RET_MINUS1_FAIL) {
            return res != -1;
        }
        // Calls without a described return are taken to return NTSTATUS.
        if !ret.is(ParamType::Ntstatus) && !ret.is(ParamType::Unknown) {
            return true;
        }
        let status = result as u32;
        status == STATUS_BUFFER_OVERFLOW || nt_success(status)
    }

    fn succeeded_custom(&self, record: &SyscallRecord, result: u64, sysarg: &[u64]) -> bool {
        record.name == "NtQueryVirtualMemory"
            && working_set_count_only(result, sysarg, self.personality.pointer_size() as u64)
    }

    fn small_write_last(&self, record: &SyscallRecord, result: u64) -> bool {
        if !record.flags.contains(SysinfoFlags::RET_SMALL_WRITE_LAST) {
            return false;
        }
        match record.ret {
            ArgType::Bool32 | ArgType::Bool8 => self.signed(result) == 0,
            ret if ret.is(ParamType::Ntstatus) => matches!(
                result as u32,
                STATUS_BUFFER_TOO_SMALL | STATUS_BUFFER_OVERFLOW | STATUS_INFO_LENGTH_MISMATCH
            ),
            _ => false,
        }
    }

    fn error_code(&self, result: u64) -> u32 {
        result as u32
    }

    fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    fn build_index(&self) -> Index {
        let mut index = Index::new(true);
        let all = tables::windows::NTOSKRNL
            .iter()
            .chain(tables::windows::NTUSER)
            .chain(tables::windows::NTGDI);
        for record in all {
            // Calls without a number on this kernel cannot be observed.
            let Some(&num) = self.numbers.get(record.name) else {
                continue;
            };
            // Secondary codes without a fixed value come from the number
            // set too, as `NtUserCallOneParam.GETCURSORPOS=0x1c`.
            let code_of = |entry: &SyscallRecord| {
                entry
                    .code()
                    .map(|c| c as i32)
                    .or_else(|| self.numbers.get(entry.name).copied())
            };
            if index.add_with_codes(num, record, &aliases(record.name), &code_of) {
                add_usercall_names(&mut index, record);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use drsyscall_common::kernel_types::windows::STATUS_PENDING;

    use super::*;
    use crate::{host::FakeHost, syscall::Sysnum};

    fn win10() -> WindowsPlatform {
        let host = FakeHost::new(1).with_wrapper_number("NtQueryKey", 0x16);
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_windows_build(19045);
        let (platform, status) = WindowsPlatform::new(&options, &host);
        assert_eq!(status, InitStatus::Success);
        platform
    }

    fn record(name: &str) -> &'static SyscallRecord {
        tables::windows::NTOSKRNL
            .iter()
            .chain(tables::windows::NTUSER)
            .chain(tables::windows::NTGDI)
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn builtin_set_with_aliases() {
        let index = win10().build_index();
        assert_eq!(index.number("NtReadFile"), Some(Sysnum::new(6)));
        assert_eq!(index.number("zwreadfile"), Some(Sysnum::new(6)));
        assert_eq!(
            index.number("NtQueryKey.KeyNameInformation"),
            Some(Sysnum::with_secondary(0x16, 3))
        );
        assert_eq!(
            index.number("NtQueryKey.UNKNOWN"),
            Some(Sysnum::with_secondary(0x16, -1))
        );
        // No numbers for win32k calls in the built-in set.
        assert_eq!(index.number("NtUserGetKeyState"), None);
    }

    #[test]
    fn mismatched_differentiator_drops_builtin_set() {
        let host = FakeHost::new(1).with_wrapper_number("NtQueryKey", 0x17);
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_windows_build(19045);
        let (platform, status) = WindowsPlatform::new(&options, &host);
        assert_eq!(status, InitStatus::WarningUnsupportedKernel);
        assert_eq!(platform.build_index().len(), 0);
    }

    #[test]
    fn sysnum_file_fallback() {
        let dir = std::env::temp_dir().join(format!("drsys-win-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sysnums.drsyscall");
        std::fs::write(
            &path,
            "DrSyscall Number File\n1\nNtGetContextThread\n\
             START=0xf2\nNtUserGetKeyState=0x1003\nNtGdiBitBlt=0x1008\n=END\n",
        )
        .unwrap();

        let host = FakeHost::new(1).with_wrapper_number("NtGetContextThread", 0xf2);
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_sysnum_file(&path);
        let (platform, status) = WindowsPlatform::new(&options, &host);
        assert_eq!(status, InitStatus::Success);

        let index = platform.build_index();
        assert_eq!(index.number("GetKeyState"), Some(Sysnum::new(0x1003)));
        assert_eq!(index.number("ntgdibitblt"), Some(Sysnum::new(0x1008)));
        assert!(index.number("NtReadFile").is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn parameter_locations() {
        let w = win10();
        let mc = MachineContext {
            sp: 0x1000,
            ..Default::default()
        };
        assert_eq!(
            w.param_location(Personality::X86_64, &mc, 0),
            Some(Location::Register("r10"))
        );
        assert_eq!(
            w.param_location(Personality::X86_64, &mc, 4),
            Some(Location::Stack(0x1028))
        );
        assert_eq!(
            w.param_location(Personality::X86, &mc, 2),
            Some(Location::Stack(0x1008))
        );
    }

    #[test]
    fn usercall_codes_from_sysnum_file() {
        let dir = std::env::temp_dir().join(format!("drsys-usercall-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sysnums.drsyscall");
        std::fs::write(
            &path,
            "DrSyscall Number File\n1\nNtGetContextThread\n\
             START=0xf2\nNtUserCallOneParam=0x1002\nNtUserCallTwoParam=0x1029\n\
             NtUserCallOneParam.GETCURSORPOS=0x1c\nNtUserCallTwoParam.GETCURSORPOS=0x2\n\
             NtUserCallTwoParam.SETCARETPOS=0x5\n=END\n",
        )
        .unwrap();

        let host = FakeHost::new(1).with_wrapper_number("NtGetContextThread", 0xf2);
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_sysnum_file(&path);
        let (platform, _) = WindowsPlatform::new(&options, &host);
        let index = platform.build_index();

        let one = Sysnum::with_secondary(0x1002, 0x1c);
        assert_eq!(index.number("NtUserCallOneParam.GETCURSORPOS"), Some(one));
        assert_eq!(
            index.number("ntusercalltwoparam.setcaretpos"),
            Some(Sysnum::with_secondary(0x1029, 5))
        );
        // Short names go to the first family listing the code name.
        assert_eq!(index.number("GETCURSORPOS"), Some(one));
        assert_eq!(index.number("SETCARETPOS"), Some(Sysnum::with_secondary(0x1029, 5)));
        assert_eq!(
            index.number("NtUserCallOneParam.UNKNOWN"),
            Some(Sysnum::with_secondary(0x1002, -1))
        );
        assert_eq!(index.number("UNKNOWN"), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn stack_parameters_at_the_top_of_memory() {
        let w = win10();
        let mc = MachineContext {
            sp: u64::MAX - 8,
            ..Default::default()
        };
        assert_eq!(w.param_location(Personality::X86_64, &mc, 4), None);
        assert_eq!(
            w.param_location(Personality::X86_64, &mc, 3),
            Some(Location::Register("r9"))
        );
        assert_eq!(w.param_location(Personality::X86, &mc, 3), None);
        assert_eq!(
            w.param_location(Personality::X86, &mc, 2),
            Some(Location::Stack(u64::MAX))
        );
    }

    #[test]
    fn graphics_success_rules() {
        let w = win10();
        let describe = record("NtGdiDescribePixelFormat");
        assert!(w.succeeded(describe, 3, &[]));
        assert!(!w.succeeded(describe, 0, &[]));
        assert!(!w.succeeded(describe, u64::MAX, &[]));

        let caps = record("NtGdiGetRasterizerCaps");
        assert!(w.succeeded(caps, 1, &[]));
        assert!(!w.succeeded(caps, 2, &[]));
        assert!(!w.succeeded(caps, 0, &[]));

        assert_eq!(graphics_succeeded(record("NtGdiBitBlt"), 0), None);
    }

    #[test]
    fn call_types() {
        let w = win10();
        assert_eq!(w.syscall_type(record("NtReadFile")), SyscallType::Kernel);
        assert_eq!(w.syscall_type(record("NtUserGetKeyState")), SyscallType::User);
        assert_eq!(w.syscall_type(record("NtGdiBitBlt")), SyscallType::Graphics);
    }

    #[test]
    fn status_classification() {
        let w = win10();
        let read = record("NtReadFile");
        assert!(w.succeeded(read, 0, &[]));
        assert!(w.succeeded(read, STATUS_PENDING as u64, &[]));
        assert!(w.succeeded(read, STATUS_BUFFER_OVERFLOW as u64, &[]));
        assert!(!w.succeeded(read, 0xc000_0005, &[]));
        assert_eq!(w.error_code(0xc000_0005), 0xc000_0005);

        let dc = record("NtUserGetDC");
        assert!(!w.succeeded(dc, 0, &[]));
        assert!(w.succeeded(dc, 0x1234, &[]));

        let sysinfo = record("NtQuerySystemInformation");
        assert!(w.small_write_last(sysinfo, STATUS_INFO_LENGTH_MISMATCH as u64));
        assert!(w.succeeded(sysinfo, STATUS_INFO_LENGTH_MISMATCH as u64, &[]));
        assert!(!w.small_write_last(read, STATUS_BUFFER_TOO_SMALL as u64));
    }

    #[test]
    fn working_set_count_is_custom_success() {
        let w = win10();
        let query = record("NtQueryVirtualMemory");
        let sysarg = [0, 0x1000, 1, 0x2000, 8, 0];
        let mismatch = STATUS_INFO_LENGTH_MISMATCH as u64;
        assert!(w.succeeded_custom(query, mismatch, &sysarg));
        assert!(w.succeeded(query, mismatch, &sysarg));
        assert!(!w.succeeded_custom(query, mismatch, &[0, 0x1000, 0, 0x2000, 8, 0]));
    }
}
