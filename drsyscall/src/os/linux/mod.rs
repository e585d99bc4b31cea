// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

mod ioctl;
mod ipc;
mod misc;
mod net;

use drsyscall_common::{
    kernel_types::linux::PAGE_SIZE, tables, ParamType, Personality, SyscallRecord,
};

use super::{Handlers, Platform};
use crate::{
    arg::Location, host::MachineContext, index::Index, options::Os, syscall::SyscallType,
};

/// Registers holding system call parameters, in order.
const X86_64_REGS: [&str; 6] = ["rdi", "rsi", "rdx", "r10", "r8", "r9"];
const X86_REGS: [&str; 6] = ["ebx", "ecx", "edx", "esi", "edi", "ebp"];
const ARM_REGS: [&str; 6] = ["r0", "r1", "r2", "r3", "r4", "r5"];
const AARCH64_REGS: [&str; 6] = ["x0", "x1", "x2", "x3", "x4", "x5"];

pub(crate) struct LinuxPlatform {
    personality: Personality,
    handlers: Handlers,
}

impl LinuxPlatform {
    pub fn new(personality: Personality) -> Self {
        LinuxPlatform {
            personality,
            handlers: handlers(),
        }
    }

    /// The records of every call the personality has.
    pub fn records(&self) -> impl Iterator<Item = &'static SyscallRecord> + '_ {
        tables::linux::SYSCALLS
            .iter()
            .filter(move |r| r.nums.primary(self.personality).is_some())
    }
}

fn handlers() -> Handlers {
    Handlers::default()
        .on_type(ParamType::Cstring, misc::cstring_access)
        .on_type(ParamType::Sockaddr, net::sockaddr_access)
        .on_type(ParamType::Msghdr, net::msghdr_access)
        .on_type(ParamType::Msgbuf, ipc::msgbuf_access)
        .on_type(ParamType::Cstrarray, misc::strarray_access)
        .on_pre(&["clone"], misc::pre_clone)
        .on_pre(&["_sysctl"], misc::pre_sysctl)
        .on_post(&["_sysctl"], misc::post_sysctl)
        .on_pre(&["mremap"], misc::pre_mremap)
        .on_pre(&["open"], misc::pre_open)
        .on_pre(&["fcntl", "fcntl64"], misc::pre_fcntl)
        .on_pre(&["ioctl"], ioctl::pre_ioctl)
        .on_post(&["ioctl"], ioctl::post_ioctl)
        .on_pre(&["semctl"], ipc::semctl)
        .on_post(&["semctl"], ipc::semctl)
        .on_pre(&["msgctl"], ipc::msgctl)
        .on_post(&["msgctl"], ipc::msgctl)
        .on_pre(&["shmctl"], ipc::shmctl)
        .on_post(&["shmctl"], ipc::shmctl)
        .on_pre(&["socketcall"], net::pre_socketcall)
        .on_post(&["socketcall"], net::post_socketcall)
        .on_pre(&["ipc"], ipc::pre_ipc)
        .on_post(&["ipc"], ipc::post_ipc)
        .on_pre(&["select", "pselect6"], misc::pre_select)
        .on_pre(&["poll"], misc::poll)
        .on_post(&["poll"], misc::poll)
        .on_pre(&["prctl"], misc::pre_prctl)
        .on_post(&["prctl"], misc::post_prctl)
        .on_pre(&["rt_sigaction"], misc::pre_rt_sigaction)
        .on_pre(&["futex"], misc::pre_futex)
        .on_pre(&["process_vm_readv", "process_vm_writev"], misc::pre_process_vm)
        .on_post(&["process_vm_readv", "process_vm_writev"], misc::post_process_vm)
        .on_pre(&["arch_prctl"], misc::arch_prctl)
        .on_post(&["arch_prctl"], misc::arch_prctl)
        .on_pre(&["readv", "writev"], net::pre_rw_vector)
        .on_post(&["readv", "writev"], net::post_rw_vector)
}

impl Platform for LinuxPlatform {
    fn os(&self) -> Os {
        Os::Linux
    }

    fn arg_slots(&self) -> usize {
        6
    }

    fn unknown_arg_slots(&self) -> usize {
        6
    }

    fn param_location(
        &self,
        personality: Personality,
        _mc: &MachineContext,
        ordinal: usize,
    ) -> Option<Location> {
        let regs = match personality {
            Personality::X86_64 => &X86_64_REGS,
            Personality::X86 => &X86_REGS,
            Personality::Arm => &ARM_REGS,
            Personality::Aarch64 => &AARCH64_REGS,
        };
        regs.get(ordinal).map(|r| Location::Register(r))
    }

    fn syscall_type(&self, _record: &SyscallRecord) -> SyscallType {
        SyscallType::Kernel
    }

    /// Mapping calls return addresses, which can look negative on 32-bit
    /// personalities; only the top page encodes errors.
    fn succeeded(&self, record: &SyscallRecord, result: u64, _sysarg: &[u64]) -> bool {
        let res = self.signed(result);
        match record.name {
            "mmap" | "mmap2" | "mremap" => res >= 0 || res < -PAGE_SIZE,
            _ => res >= 0,
        }
    }

    fn error_code(&self, result: u64) -> u32 {
        (self.signed(result) as i32).wrapping_neg() as u32
    }

    fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    fn build_index(&self) -> Index {
        let mut index = Index::new(false);
        for record in self.records() {
            if let Some(num) = record.nums.primary(self.personality) {
                index.add(num, record, &[]);
            }
        }
        index
    }
}

impl LinuxPlatform {
    fn signed(&self, result: u64) -> i64 {
        if self.personality.is_64bit() {
            result as i64
        } else {
            result as u32 as i32 as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> &'static SyscallRecord {
        tables::linux::SYSCALLS
            .iter()
            .find(|r| r.name == name && r.nums.primary(Personality::X86_64).is_some())
            .unwrap()
    }

    #[test]
    fn parameter_registers() {
        let linux = LinuxPlatform::new(Personality::X86_64);
        let mc = MachineContext::default();
        assert_eq!(
            linux.param_location(Personality::X86_64, &mc, 3),
            Some(Location::Register("r10"))
        );
        assert_eq!(
            linux.param_location(Personality::X86, &mc, 0),
            Some(Location::Register("ebx"))
        );
        assert_eq!(
            linux.param_location(Personality::Aarch64, &mc, 5),
            Some(Location::Register("x5"))
        );
        assert_eq!(linux.param_location(Personality::Arm, &mc, 6), None);
    }

    #[test]
    fn mmap_addresses_are_not_errors() {
        let linux = LinuxPlatform::new(Personality::X86_64);
        let high = 0xffff_8000_0000_0000u64;
        assert!(linux.succeeded(record("mmap"), high, &[]));
        assert!(!linux.succeeded(record("mmap"), (-12i64) as u64, &[]));
        assert!(!linux.succeeded(record("read"), high, &[]));
        assert!(linux.succeeded(record("read"), 0, &[]));
    }

    #[test]
    fn errno_from_result() {
        let linux = LinuxPlatform::new(Personality::X86_64);
        assert_eq!(linux.error_code((-2i64) as u64), 2);

        let x86 = LinuxPlatform::new(Personality::X86);
        assert_eq!(x86.error_code(0xffff_fff2), 14);
        assert!(!x86.succeeded(record("read"), 0xffff_fff2, &[]));
    }
}
