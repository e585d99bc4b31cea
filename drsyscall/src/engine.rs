// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        RwLock,
    },
};

use drsyscall_common::{Personality, SysinfoFlags, SyscallRecord, SYSCALL_NUM_ARG_STORE};
use log::{debug, trace};

use crate::{
    arg::Location,
    error::{DrsysError, InitStatus, Result},
    host::{self, Host, MachineContext},
    index::Index,
    options::{Options, Os},
    os::{linux::LinuxPlatform, windows::WindowsPlatform, Platform},
    state::ThreadState,
    syscall::{Syscall, Sysnum, UNKNOWN_RECORD},
    unknown,
    walk::truncate,
};

/// Outcome of the call a thread just returned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyscallResult {
    pub success: bool,
    /// The raw return value, widened with the high half on 32-bit
    /// personalities for calls returning 64-bit values.
    pub value: u64,
    /// errno on Linux, the NTSTATUS on Windows; 0 on success.
    pub error_code: u32,
}

/// The system call database for one OS and personality, plus the
/// interpreter driving it.
pub struct Engine {
    options: Options,
    platform: Box<dyn Platform>,
    index: Index,
    filter_all: AtomicBool,
    filtered: RwLock<HashSet<i32>>,
}

impl Engine {
    /// Builds the tables for `options.os`. `host` is only consulted to
    /// tell Windows kernel versions apart.
    pub fn new(options: Options, host: &dyn Host) -> Result<(Engine, InitStatus)> {
        let personality = options.personality;
        let (platform, status): (Box<dyn Platform>, InitStatus) = match options.os {
            Os::Linux => (
                Box::new(LinuxPlatform::new(personality)),
                InitStatus::Success,
            ),
            Os::Windows => {
                if !matches!(personality, Personality::X86_64 | Personality::X86) {
                    return Err(DrsysError::FeatureNotAvailable);
                }
                let (platform, status) = WindowsPlatform::new(&options, host);
                (Box::new(platform), status)
            }
            Os::MacOs => return Err(DrsysError::FeatureNotAvailable),
        };

        let index = platform.build_index();
        debug!(
            "{:?}/{}: {} system call entries indexed",
            options.os,
            personality.name(),
            index.len()
        );

        let engine = Engine {
            options,
            platform,
            index,
            filter_all: AtomicBool::new(false),
            filtered: RwLock::new(HashSet::new()),
        };
        Ok((engine, status))
    }

    pub fn personality(&self) -> Personality {
        self.options.personality
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    pub(crate) fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn ptr_size(&self) -> u64 {
        self.personality().pointer_size() as u64
    }

    pub(crate) fn handle(&self, record: &'static SyscallRecord, num: Sysnum) -> Syscall {
        Syscall::new(record, num, self.platform.syscall_type(record))
    }

    pub fn number_to_syscall(&self, num: Sysnum) -> Result<Syscall> {
        self.index
            .lookup(num, true)
            .map(|record| self.handle(record, num))
            .ok_or(DrsysError::NotFound)
    }

    /// Names are case-insensitive on Windows, where `Zw` aliases and
    /// dotted secondary names such as `NtQueryKey.KeyBasicInformation` are
    /// accepted too.
    pub fn name_to_syscall(&self, name: &str) -> Result<Syscall> {
        let num = self.index.number(name).ok_or(DrsysError::NotFound)?;
        self.number_to_syscall(num)
    }

    /// Whether `syscall` returning `result` counts as a success, without a
    /// live call to look at.
    pub fn syscall_succeeded(&self, syscall: &Syscall, result: u64) -> Result<bool> {
        if self.options.os == Os::MacOs {
            return Err(DrsysError::FeatureNotAvailable);
        }
        Ok(self.platform.succeeded(syscall.record(), result, &[]))
    }

    /// The call `state` is in. Calls missing from the tables get a handle
    /// named `<unknown>` carrying the observed number.
    pub fn cur_syscall(&self, state: &ThreadState) -> Syscall {
        match state.record {
            Some(record) => self.handle(record, state.num),
            None => Syscall::unknown(state.num),
        }
    }

    pub fn cur_syscall_result(&self, state: &ThreadState) -> Result<SyscallResult> {
        if state.pre {
            return Err(DrsysError::InvalidCall);
        }
        let record = state.record.unwrap_or(&UNKNOWN_RECORD);
        let mc = &state.mc;
        let success = self.platform.succeeded(record, mc.result, &state.sysarg);
        let value = if !self.personality().is_64bit()
            && record.flags.contains(SysinfoFlags::RET_64BIT)
        {
            (mc.result & 0xffff_ffff) | (mc.result_hi << 32)
        } else {
            mc.result
        };
        let error_code = if success {
            0
        } else {
            self.platform.error_code(mc.result)
        };
        Ok(SyscallResult {
            success,
            value,
            error_code,
        })
    }

    /// Parameter `ordinal` as captured at entry, truncated to the traced
    /// code's pointer width.
    pub fn pre_syscall_arg(&self, state: &ThreadState, ordinal: usize) -> Result<u64> {
        self.pre_syscall_arg64(state, ordinal)
            .map(|v| truncate(v, self.ptr_size()))
    }

    pub fn pre_syscall_arg64(&self, state: &ThreadState, ordinal: usize) -> Result<u64> {
        if ordinal >= SYSCALL_NUM_ARG_STORE {
            return Err(DrsysError::InvalidParameter);
        }
        Ok(state.sysarg[ordinal])
    }

    pub fn get_mcontext(&self, state: &ThreadState) -> MachineContext {
        state.mc
    }

    /// Asks for events on calls with `num`'s primary number. Secondary
    /// numbers are not known until entry, so all of them are included.
    pub fn filter_syscall(&self, num: Sysnum) {
        let mut filtered = self.filtered.write().unwrap_or_else(|e| e.into_inner());
        filtered.insert(num.number);
    }

    pub fn filter_all_syscalls(&self) {
        self.filter_all.store(true, Ordering::Relaxed);
    }

    /// Whether the host should deliver entry and exit events for `number`.
    pub fn event_filter(&self, number: i32) -> bool {
        if self.filter_all.load(Ordering::Relaxed) {
            return true;
        }
        let filtered = self.filtered.read().unwrap_or_else(|e| e.into_inner());
        filtered.contains(&number)
    }

    /// Reads parameter `ordinal` from where the calling convention puts it.
    pub(crate) fn param_value(
        &self,
        host: &dyn Host,
        mc: &MachineContext,
        ordinal: usize,
    ) -> Option<u64> {
        match self.platform.param_location(self.personality(), mc, ordinal)? {
            Location::Register(_) => mc.args.get(ordinal).copied(),
            Location::Stack(addr) => host::read_uint(host, addr, self.ptr_size() as usize),
        }
    }

    /// Call entry: captures the registers and parameters and resolves the
    /// call. Must run before any other consumer of the event.
    pub fn pre_syscall(&self, state: &mut ThreadState, host: &dyn Host, number: i32) {
        let mc = host.machine_context();
        state.reset(mc);

        // Reads past the real parameter count may fail; those slots stay 0.
        let slots = self.platform.arg_slots().min(SYSCALL_NUM_ARG_STORE);
        for i in 0..slots {
            state.sysarg[i] = self.param_value(host, &mc, i).unwrap_or(0);
        }

        let (num, record) = self.index.resolve(number, |i| state.sysarg(i));
        state.num = num;
        state.record = record;
        state.known = record.is_some_and(|r| r.flags.contains(SysinfoFlags::ALL_PARAMS_KNOWN));
        trace!(
            "pre system call #{num} {} known={} args={:x?}",
            record.map_or("<unknown>", |r| r.name),
            state.known,
            &state.sysarg[..slots]
        );
    }

    /// Call exit: refreshes the registers, result included.
    pub fn post_syscall(&self, state: &mut ThreadState, host: &dyn Host) {
        state.mc = host.machine_context();
        state.pre = false;
        trace!("post system call #{} res={:#x}", state.num, state.mc.result);
    }

    /// Runs after every other consumer of the exit event, to undo what the
    /// unknown-call analysis did to the traced memory.
    pub fn post_syscall_last(&self, state: &mut ThreadState, host: &dyn Host) {
        if !state.known {
            unknown::restore(self, state, host);
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("options", &self.options)
            .field("entries", &self.index.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FakeHost;

    fn linux() -> Engine {
        let options = Options::new()
            .with_os(Os::Linux)
            .with_personality(Personality::X86_64);
        let (engine, status) = Engine::new(options, &FakeHost::new(1)).unwrap();
        assert_eq!(status, InitStatus::Success);
        engine
    }

    #[test]
    fn macos_is_not_available() {
        let options = Options::new().with_os(Os::MacOs);
        assert_eq!(
            Engine::new(options, &FakeHost::new(1)).err(),
            Some(DrsysError::FeatureNotAvailable)
        );

        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::Aarch64);
        assert!(Engine::new(options, &FakeHost::new(1)).is_err());
    }

    #[test]
    fn names_and_numbers() {
        let engine = linux();
        let read = engine.name_to_syscall("read").unwrap();
        assert_eq!(read.number(), Sysnum::new(0));
        assert_eq!(engine.number_to_syscall(Sysnum::new(0)).unwrap(), read);
        assert_eq!(
            engine.name_to_syscall("NtReadFile").err(),
            Some(DrsysError::NotFound)
        );
        assert_eq!(
            engine.number_to_syscall(Sysnum::new(99_999)).err(),
            Some(DrsysError::NotFound)
        );
    }

    #[test]
    fn entry_captures_arguments() {
        let engine = linux();
        let host = FakeHost::new(1);
        host.set_args(&[3, 0x1000, 64]);
        let mut state = ThreadState::new();
        engine.pre_syscall(&mut state, &host, 0);

        assert_eq!(engine.cur_syscall(&state).name(), "read");
        assert!(state.known);
        assert_eq!(engine.pre_syscall_arg(&state, 1), Ok(0x1000));
        assert_eq!(
            engine.pre_syscall_arg64(&state, SYSCALL_NUM_ARG_STORE),
            Err(DrsysError::InvalidParameter)
        );
        assert_eq!(
            engine.cur_syscall_result(&state).err(),
            Some(DrsysError::InvalidCall)
        );

        host.set_result((-9i64) as u64);
        engine.post_syscall(&mut state, &host);
        let res = engine.cur_syscall_result(&state).unwrap();
        assert!(!res.success);
        assert_eq!(res.error_code, 9);
    }

    #[test]
    fn unknown_numbers_get_a_handle() {
        let engine = linux();
        let host = FakeHost::new(1);
        let mut state = ThreadState::new();
        engine.pre_syscall(&mut state, &host, 4242);
        let syscall = engine.cur_syscall(&state);
        assert_eq!(syscall.name(), "<unknown>");
        assert_eq!(syscall.number(), Sysnum::new(4242));
        assert!(!state.known);
    }

    #[test]
    fn filters() {
        let engine = linux();
        assert!(!engine.event_filter(16));
        engine.filter_syscall(Sysnum::with_secondary(16, 0x5401));
        assert!(engine.event_filter(16));
        assert!(!engine.event_filter(0));
        engine.filter_all_syscalls();
        assert!(engine.event_filter(0));
    }

    #[test]
    fn windows_x86_arguments_come_from_the_stack() {
        let dir = std::env::temp_dir().join(format!("drsys-x86-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sysnums.drsyscall");
        std::fs::write(
            &path,
            "DrSyscall Number File\n1\nNtQueryKey\nSTART=0xd1\nNtClose=0x1b0\n=END\n",
        )
        .unwrap();
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86)
            .with_sysnum_file(&path);
        let host = FakeHost::new(1).with_wrapper_number("NtQueryKey", 0xd1);
        let (engine, status) = Engine::new(options, &host).unwrap();
        assert_eq!(status, InitStatus::Success);
        std::fs::remove_dir_all(&dir).unwrap();

        host.set_mc(MachineContext {
            sp: 0x8000,
            ..Default::default()
        });
        host.put_u32(0x8000, 0x44);
        host.put_u32(0x8004, 0x1234);
        let mut state = ThreadState::new();
        engine.pre_syscall(&mut state, &host, 0x1b0);

        assert_eq!(engine.cur_syscall(&state).name(), "NtClose");
        assert_eq!(engine.pre_syscall_arg(&state, 0), Ok(0x44));
        assert_eq!(engine.pre_syscall_arg(&state, 1), Ok(0x1234));
        // Unmapped stack slots read as zero.
        assert_eq!(engine.pre_syscall_arg(&state, 2), Ok(0));
    }
}
