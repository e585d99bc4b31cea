// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! The narrow interface to whatever runtime observes the traced thread.

mod fake;
#[cfg(target_os = "linux")]
mod process;

pub use fake::FakeHost;
#[cfg(target_os = "linux")]
pub use process::ProcessHost;

/// Integer register state of the traced thread at a syscall boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MachineContext {
    /// Argument registers in the order the personality passes syscall
    /// parameters (rdi, rsi, rdx, r10, r8, r9 on x86_64; r10, rdx, r8, r9
    /// on Windows x64).
    pub args: [u64; 6],
    /// Stack pointer. On 32-bit Windows this points at the parameter block.
    pub sp: u64,
    pub pc: u64,
    /// rax, eax, r0 or x0.
    pub result: u64,
    /// edx or r1, the high half of 64-bit results on 32-bit personalities.
    pub result_hi: u64,
}

pub trait Host {
    fn machine_context(&self) -> MachineContext;

    /// Reads `buf.len()` bytes at `addr` without faulting. Returns false
    /// unless the whole range was read.
    fn safe_read(&self, addr: u64, buf: &mut [u8]) -> bool;

    fn safe_write(&self, addr: u64, buf: &[u8]) -> bool;

    fn pid(&self) -> u32;

    /// Number of semaphores in the set, for semctl GETALL/SETALL.
    fn sem_count(&self, _semid: i32) -> Option<u32> {
        None
    }

    /// The number a system library wrapper passes to the kernel for `name`.
    fn wrapper_number(&self, _name: &str) -> Option<i32> {
        None
    }
}

/// Reads a little-endian unsigned value of `size` bytes (at most 8).
pub(crate) fn read_uint(host: &dyn Host, addr: u64, size: usize) -> Option<u64> {
    let mut buf = [0u8; 8];
    let size = size.min(8);
    if !host.safe_read(addr, &mut buf[..size]) {
        return None;
    }
    Some(u64::from_le_bytes(buf))
}

pub(crate) fn read_u16(host: &dyn Host, addr: u64) -> Option<u16> {
    read_uint(host, addr, 2).map(|v| v as u16)
}

pub(crate) fn read_u32(host: &dyn Host, addr: u64) -> Option<u32> {
    read_uint(host, addr, 4).map(|v| v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_words() {
        let host = FakeHost::new(1);
        host.map(0x1000, &[0x78, 0x56, 0x34, 0x12, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(read_u32(&host, 0x1000), Some(0x1234_5678));
        assert_eq!(read_u16(&host, 0x1002), Some(0x1234));
        assert_eq!(read_uint(&host, 0x1000, 8), Some(0xffff_ffff_1234_5678));
        assert_eq!(read_u32(&host, 0x1006), None);
    }
}
